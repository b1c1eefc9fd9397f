pub mod filter_bar;
pub mod selection_footer;
pub mod skip_card;
pub mod status;
