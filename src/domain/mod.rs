//! Skip pricing, filtering and selection state live here.

pub mod app_state;
pub mod entities;
pub mod filter;
pub mod pricing;

#[allow(unused_imports)]
pub use app_state::{FetchOutcome, RequestTicket, SkipState};
#[allow(unused_imports)]
pub use entities::{Location, Restriction, Skip, SkipId, BEST_VALUE_MIN_SIZE};
#[allow(unused_imports)]
pub use filter::{filter_skips, filter_skips_by_key, SkipCategory, SkipFilter};
#[allow(unused_imports)]
pub use pricing::{format_currency, gross_price, price_with_vat, PricingError};
