//! Products API demo - a REST API browsable through the mounted explorer

use api_explorer::{ApiRegistry, ExplorerOptions};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

mod api;
mod config;
mod server;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store = api::products::ProductStore::default();

    // The explorer rebuilds the description from this registry on every
    // request, so anything registered here is browsable immediately.
    let registry = Arc::new(
        ApiRegistry::new("Products API", env!("CARGO_PKG_VERSION"))
            .with_description("Demo product API browsable through the explorer"),
    );
    registry.register::<api::products::ApiDoc>("/products");

    let options = ExplorerOptions::new()
        .with_mount_path(&config.explorer.mount_path)
        .with_ui_dirs(config.explorer.ui_dirs.clone())
        .with_swagger_ui(config.explorer.swagger_ui)
        .with_cors(config.explorer.cors)
        .with_title("Products API Explorer");

    let app = api_explorer::mount(api::routes(store), registry, options)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CompressionLayer::new());

    info!(
        "Explorer mounted at {} on port {}",
        config.explorer.mount_path, config.server.port
    );

    server::serve(app, &config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}
