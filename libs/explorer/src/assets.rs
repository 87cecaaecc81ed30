//! Static front-end asset resolution.
//!
//! Requested files are looked up in the configured override directories
//! first, then in the Swagger UI distribution bundled by
//! `utoipa-swagger-ui`. The bundled lookup also rewrites
//! `swagger-initializer.js` so the UI loads the description generated
//! under the mount path.

use crate::error::ExplorerError;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use utoipa_swagger_ui::Config;

/// A resolved front-end file ready to be served.
pub(crate) struct Asset {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Rejects asset paths that could escape the override directories.
pub(crate) fn is_safe_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && path.split('/').all(|segment| {
            !segment.is_empty() && segment != "." && segment != ".."
        })
}

/// Content type for files served out of an override directory.
pub(crate) fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json" | "map") => "application/json",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Resolves `path` through the override directories and then the bundled
/// UI. Returns `None` when nothing serves the file.
pub(crate) async fn resolve(
    ui_dirs: &[PathBuf],
    swagger_ui: bool,
    swagger_json_url: &str,
    path: &str,
) -> Result<Option<Asset>, ExplorerError> {
    if !is_safe_path(path) {
        return Ok(None);
    }

    for dir in ui_dirs {
        let candidate = dir.join(path);
        match tokio::fs::read(&candidate).await {
            Ok(bytes) => {
                tracing::debug!(file = %candidate.display(), "serving UI override");
                return Ok(Some(Asset {
                    bytes,
                    content_type: content_type_for(path).to_string(),
                }));
            }
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    tracing::debug!(
                        file = %candidate.display(),
                        error = %err,
                        "skipping unreadable UI override"
                    );
                }
            }
        }
    }

    if !swagger_ui {
        return Ok(None);
    }

    let config = Arc::new(Config::from(swagger_json_url));
    let file = utoipa_swagger_ui::serve(path, config)
        .map_err(|err| ExplorerError::BundledAsset(err.to_string()))?;

    Ok(file.map(|file| Asset {
        bytes: file.bytes.into_owned(),
        content_type: file.content_type,
    }))
}
