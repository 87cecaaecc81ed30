//! In-memory Products API used to demonstrate the explorer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use utoipa::ToSchema;
use uuid::Uuid;

/// OpenAPI documentation for the Products API
#[derive(utoipa::OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product, delete_product),
    components(schemas(Product, CreateProduct)),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Price in the smallest currency unit
    pub price_cents: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub price_cents: i64,
}

/// Shared in-memory product store
#[derive(Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

/// Create the products router with all HTTP endpoints
pub fn router(store: ProductStore) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product).delete(delete_product))
        .with_state(store)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>)
    )
)]
async fn list_products(State(store): State<ProductStore>) -> Json<Vec<Product>> {
    let products = store.products.read().expect("store lock poisoned");
    let mut all: Vec<Product> = products.values().cloned().collect();
    all.sort_by(|a, b| a.name.cmp(&b.name));
    Json(all)
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product)
    )
)]
async fn create_product(
    State(store): State<ProductStore>,
    Json(input): Json<CreateProduct>,
) -> (StatusCode, Json<Product>) {
    let product = Product {
        id: Uuid::new_v4(),
        name: input.name,
        price_cents: input.price_cents,
    };

    store
        .products
        .write()
        .expect("store lock poisoned")
        .insert(product.id, product.clone());

    (StatusCode::CREATED, Json(product))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found")
    )
)]
async fn get_product(
    State(store): State<ProductStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, StatusCode> {
    store
        .products
        .read()
        .expect("store lock poisoned")
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
async fn delete_product(
    State(store): State<ProductStore>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    match store
        .products
        .write()
        .expect("store lock poisoned")
        .remove(&id)
    {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
