//! Stylesheet and card illustration compiled into the binary from `assets/`.

use std::sync::OnceLock;

use base64::{engine::general_purpose::STANDARD, Engine};
use rust_embed::RustEmbed;
use tracing::error;

#[derive(RustEmbed)]
#[folder = "assets"]
struct Assets;

const STYLESHEET: &str = "main.css";
const SKIP_IMAGE: &str = "skip.svg";

pub fn main_css() -> &'static str {
    static CSS: OnceLock<String> = OnceLock::new();
    CSS.get_or_init(|| {
        embedded(STYLESHEET)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    })
}

/// `data:` URI of the skip drawing used on every card.
pub fn skip_image_data_uri() -> &'static str {
    static IMAGE: OnceLock<String> = OnceLock::new();
    IMAGE.get_or_init(|| {
        let encoded = embedded(SKIP_IMAGE)
            .map(|bytes| STANDARD.encode(bytes))
            .unwrap_or_default();
        format!("data:image/svg+xml;base64,{encoded}")
    })
}

fn embedded(name: &str) -> Option<Vec<u8>> {
    let file = Assets::get(name);
    if file.is_none() {
        error!(asset = name, "embedded asset missing");
    }
    file.map(|file| file.data.into_owned())
}
