use filter_sort_paginate::app::{App, APP_TITLE};
use filter_sort_paginate::observability::init_tracing;

#[cfg(feature = "desktop")]
fn main() {
    use filter_sort_paginate::platform::desktop::paths::default_webview_data_dir;

    init_tracing();
    tracing::info!(title = APP_TITLE, "launching desktop app");

    let mut config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title(APP_TITLE));
    match default_webview_data_dir() {
        Ok(webview_data_dir) => config = config.with_data_directory(webview_data_dir),
        Err(err) => tracing::warn!("{err:#}; falling back to the default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    init_tracing();
    tracing::info!(title = APP_TITLE, "launching app");
    dioxus::launch(App);
}
