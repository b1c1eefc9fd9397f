pub const APP_NAME: &str = "Skip Selector";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const USER_AGENT: &str = concat!("skip-selector/", env!("CARGO_PKG_VERSION"));
