//! Outbound integrations.

pub mod skips;

#[allow(unused_imports)]
pub use skips::{load_skips, FetchError, SkipClient, SkipSource};
