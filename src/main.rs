#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::config::{load_config, AppConfig};
use crate::util::version::APP_NAME;

fn main() {
    let loaded = load_config();
    init_tracing(
        loaded
            .as_ref()
            .map(|(config, _)| config.features.debug_mode)
            .unwrap_or(false),
    );
    let config = match loaded {
        Ok((config, source)) => {
            info!(%source, "configuration resolved");
            config
        }
        Err(err) => {
            warn!(%err, "invalid configuration; using defaults");
            AppConfig::default()
        }
    };
    info!(
        api = %config.api_base_url,
        mode = ?config.mode,
        postcode = %config.location.postcode,
        area = %config.location.area,
        "starting"
    );

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new().with_context(config);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}

/// `RUST_LOG` wins; otherwise debug-level logs for this crate in development mode.
fn init_tracing(debug_mode: bool) {
    let default = if debug_mode {
        "info,skip_selector=debug"
    } else {
        "warn,skip_selector=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
