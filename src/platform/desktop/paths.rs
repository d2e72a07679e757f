use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

const WEBVIEW_DIR_NAME: &str = "webview2";

/// Per-user data directory of the user list app. Not created here.
pub fn app_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "filtersortpaginate", "filter-sort-paginate")
        .ok_or_else(|| anyhow!("no home directory to place user list app data in"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

pub fn ensure_webview_data_dir(app_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = app_dir.join(WEBVIEW_DIR_NAME);
    if webview_data_dir.is_dir() {
        return Ok(webview_data_dir);
    }
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "cannot create the window's browser profile at {}",
            webview_data_dir.display()
        )
    })?;
    tracing::debug!(path = %webview_data_dir.display(), "created webview data dir");
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let app_dir = app_data_dir()?;
    ensure_webview_data_dir(&app_dir)
}
