//! The HTTP surface the explorer contributes to the host application.
//!
//! - `GET <mount>` — 301 redirect to `<mount>/`
//! - `GET <mount>/` — Swagger UI index page
//! - `GET <mount>/config.json` — UI configuration pointing at the description
//! - `GET <mount>/swagger.json` — merged OpenAPI description, rebuilt per request
//! - `GET <mount>/<asset>` — UI front-end files (overrides first, then bundle)

use crate::assets;
use crate::config::ExplorerOptions;
use crate::error::{self, ExplorerError};
use crate::registry::ApiRegistry;
use crate::url::{normalize_mount_path, url_join};
use axum::extract::{Path, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Clone)]
struct ExplorerState {
    registry: Arc<ApiRegistry>,
    options: Arc<ExplorerOptions>,
    mount_path: String,
    swagger_json_url: String,
}

/// Builds the explorer router for the given registry and options.
///
/// The returned router owns its full mount path, so it composes with the
/// host application through `Router::merge`.
pub fn routes(registry: Arc<ApiRegistry>, options: ExplorerOptions) -> Router {
    let mount_path = normalize_mount_path(&options.mount_path);
    let swagger_json_url = url_join(&[&mount_path, "swagger.json"]);
    let cors = options.cors;

    tracing::info!(%mount_path, "mounting API explorer");

    let state = ExplorerState {
        registry,
        mount_path: mount_path.clone(),
        swagger_json_url,
        options: Arc::new(options),
    };

    let mut router = Router::new();
    if mount_path == "/" {
        router = router.route("/", get(index));
    } else {
        router = router
            .route(&mount_path, get(redirect_to_ui))
            .route(&format!("{mount_path}/"), get(index));
    }

    let prefix = if mount_path == "/" { "" } else { mount_path.as_str() };
    let router = router
        .route(&format!("{prefix}/config.json"), get(ui_config))
        .route(&format!("{prefix}/swagger.json"), get(api_description))
        .route(&format!("{prefix}/{{*asset}}"), get(static_asset))
        .with_state(state);

    if cors {
        router.layer(explorer_cors_layer())
    } else {
        router
    }
}

/// Mounts the explorer into an existing application router.
pub fn mount(app: Router, registry: Arc<ApiRegistry>, options: ExplorerOptions) -> Router {
    app.merge(routes(registry, options))
}

/// Mirror-origin CORS for the explorer routes. The explorer is read-only,
/// so only safe methods are allowed.
fn explorer_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
}

async fn redirect_to_ui(State(state): State<ExplorerState>) -> impl IntoResponse {
    let location = format!("{}/", state.mount_path);
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)])
}

async fn index(State(state): State<ExplorerState>) -> Result<Response, ExplorerError> {
    serve_asset(&state, "index.html").await
}

async fn static_asset(
    State(state): State<ExplorerState>,
    Path(asset): Path<String>,
) -> Result<Response, ExplorerError> {
    serve_asset(&state, &asset).await
}

async fn serve_asset(state: &ExplorerState, path: &str) -> Result<Response, ExplorerError> {
    let resolved = assets::resolve(
        &state.options.ui_dirs,
        state.options.swagger_ui,
        &state.swagger_json_url,
        path,
    )
    .await?;

    match resolved {
        Some(asset) => {
            Ok(([(header::CONTENT_TYPE, asset.content_type)], asset.bytes).into_response())
        }
        None => Ok(error::not_found()),
    }
}

/// UI configuration pointing the front-end at the generated description.
async fn ui_config(State(state): State<ExplorerState>) -> Json<Value> {
    let mut config = state.options.ui_config.clone();

    if let Some(title) = &state.options.title {
        config
            .entry("title".to_string())
            .or_insert_with(|| Value::String(title.clone()));
    }

    // The generated url always wins: the UI must load the description
    // served under this mount path.
    config.insert(
        "url".to_string(),
        Value::String(state.swagger_json_url.clone()),
    );

    Json(Value::Object(config))
}

/// The merged API description, rebuilt from the registry on every request.
async fn api_description(State(state): State<ExplorerState>) -> Json<utoipa::openapi::OpenApi> {
    Json(state.registry.build())
}
