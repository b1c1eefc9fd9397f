pub mod skip_selection;

pub use skip_selection::SkipSelectionPage;
