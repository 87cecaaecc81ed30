//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use self::products::ProductStore;

/// Create all API routes
pub fn routes(store: ProductStore) -> Router {
    Router::new()
        .nest("/api/products", products::router(store))
        .merge(health::router())
}
