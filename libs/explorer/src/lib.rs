//! # API Explorer
//!
//! Mounts an interactive API-documentation explorer (Swagger UI) into an
//! Axum application. The explorer serves a machine-readable OpenAPI
//! description of the host application's registered APIs, plus the static
//! UI front-end that browses it.
//!
//! ## Modules
//!
//! - **[`registry`]**: runtime registry of OpenAPI fragments; the merged
//!   description is rebuilt from it on every request
//! - **[`config`]**: explorer options (mount path, UI override directories,
//!   bundled-UI toggle, CORS)
//! - **[`routes`]**: the HTTP surface contributed to the host application
//! - **[`url`]**: mount-path joining and normalization helpers
//! - **[`error`]**: error responses for the explorer routes
//!
//! ## Quick Start
//!
//! ```ignore
//! use api_explorer::{mount, ApiRegistry, ExplorerOptions};
//! use axum::Router;
//! use std::sync::Arc;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths(/* your handlers */))]
//! struct ProductsDoc;
//!
//! let registry = Arc::new(ApiRegistry::new("Products API", "0.1.0"));
//! registry.register::<ProductsDoc>("/products");
//!
//! let api = Router::new(); // your API routes
//! let app = mount(api, registry, ExplorerOptions::new());
//! // GET /explorer/          -> Swagger UI
//! // GET /explorer/swagger.json -> generated description
//! ```

mod assets;
pub mod config;
pub mod error;
pub mod registry;
pub mod routes;
pub mod url;

// Re-export the public surface
pub use config::ExplorerOptions;
pub use error::ExplorerError;
pub use registry::ApiRegistry;
pub use routes::{mount, routes};
