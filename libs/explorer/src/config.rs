//! Explorer configuration options.

use crate::url::normalize_mount_path;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Options controlling where the explorer is mounted and what it serves.
///
/// All options have working defaults; `ExplorerOptions::new()` mounts the
/// bundled Swagger UI at `/explorer` with CORS enabled.
#[derive(Debug, Clone)]
pub struct ExplorerOptions {
    /// URL prefix the explorer is served under. Normalized when the routes
    /// are built: leading slash enforced, trailing slash stripped.
    pub mount_path: String,

    /// Ordered list of directories searched for front-end files before the
    /// bundled UI. The first directory containing the requested file wins.
    pub ui_dirs: Vec<PathBuf>,

    /// Serve the bundled Swagger UI. When `false` only `config.json` and
    /// `swagger.json` (plus any `ui_dirs` overrides) are available.
    pub swagger_ui: bool,

    /// Optional title surfaced through `config.json`.
    pub title: Option<String>,

    /// Extra keys merged into the served `config.json`. The generated
    /// `url` key always wins over a configured one.
    pub ui_config: Map<String, Value>,

    /// Emit CORS headers on the explorer routes so the description can be
    /// fetched cross-origin. Enabled by default.
    pub cors: bool,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            mount_path: "/explorer".to_string(),
            ui_dirs: Vec::new(),
            swagger_ui: true,
            title: None,
            ui_config: Map::new(),
            cors: true,
        }
    }
}

impl ExplorerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount path for the explorer, `/explorer` by default.
    pub fn with_mount_path(mut self, path: impl AsRef<str>) -> Self {
        self.mount_path = normalize_mount_path(path.as_ref());
        self
    }

    /// Adds a single override directory for front-end files.
    pub fn with_ui_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ui_dirs.push(dir.into());
        self
    }

    /// Replaces the override directories with the given list.
    pub fn with_ui_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.ui_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables serving the bundled Swagger UI.
    pub fn with_swagger_ui(mut self, enabled: bool) -> Self {
        self.swagger_ui = enabled;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Merges an extra key into the served `config.json`.
    pub fn with_ui_config(mut self, key: impl Into<String>, value: Value) -> Self {
        self.ui_config.insert(key.into(), value);
        self
    }

    /// Enables or disables CORS headers on the explorer routes.
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = ExplorerOptions::new();
        assert_eq!(options.mount_path, "/explorer");
        assert!(options.ui_dirs.is_empty());
        assert!(options.swagger_ui);
        assert!(options.cors);
    }

    #[test]
    fn test_mount_path_is_normalized() {
        let options = ExplorerOptions::new().with_mount_path("swagger/");
        assert_eq!(options.mount_path, "/swagger");
    }

    #[test]
    fn test_single_ui_dir_appends() {
        let options = ExplorerOptions::new()
            .with_ui_dir("/tmp/a")
            .with_ui_dir("/tmp/b");
        assert_eq!(options.ui_dirs.len(), 2);
    }

    #[test]
    fn test_ui_dirs_replaces() {
        let options = ExplorerOptions::new()
            .with_ui_dir("/tmp/a")
            .with_ui_dirs(["/tmp/b", "/tmp/c"]);
        assert_eq!(options.ui_dirs, vec![PathBuf::from("/tmp/b"), PathBuf::from("/tmp/c")]);
    }

    #[test]
    fn test_ui_config_extras() {
        let options = ExplorerOptions::new().with_ui_config("deepLinking", json!(true));
        assert_eq!(options.ui_config.get("deepLinking"), Some(&json!(true)));
    }
}
