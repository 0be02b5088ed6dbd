//! Single-record endpoints under `/product`.

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use tracing::debug;

use super::{
    error::{parse_id, ProductError},
    storage::Products,
    types::{DeleteResponse, ErrorResponse, Product, ProductPayload},
};

// The body is decoded whatever the `Content-Type` header says.
fn decode_payload(body: &[u8]) -> Result<ProductPayload, ProductError> {
    serde_json::from_slice(body).map_err(|err| {
        debug!("Rejected product payload: {err}");
        ProductError::InvalidPayload
    })
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    params(("id" = i64, Path, description = "Product id (digits only)")),
    responses(
        (status = 200, description = "Product found.", body = Product),
        (status = 400, description = "Invalid product ID.", body = ErrorResponse),
        (status = 404, description = "Product not found.", body = ErrorResponse),
        (status = 500, description = "Storage error.", body = ErrorResponse),
    ),
    tag = "products"
)]
/// Fetch one product by id.
pub async fn get_product(
    Path(id): Path<String>,
    products: Extension<Products>,
) -> Result<Json<Product>, ProductError> {
    let id = parse_id(&id)?;

    match products.get_by_id(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ProductError::NotFound),
    }
}

#[utoipa::path(
    post,
    path = "/product",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created.", body = Product),
        (status = 400, description = "Invalid request payload.", body = ErrorResponse),
        (status = 500, description = "Storage error.", body = ErrorResponse),
    ),
    tag = "products"
)]
/// Insert a product and return it with its assigned id.
pub async fn create_product(
    products: Extension<Products>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ProductError> {
    let payload = decode_payload(&body)?;

    let product = products.create(payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    request_body = ProductPayload,
    params(("id" = i64, Path, description = "Product id (digits only)")),
    responses(
        (status = 200, description = "Product updated; the path id wins over any body id.", body = Product),
        (status = 400, description = "Invalid product ID or request payload.", body = ErrorResponse),
        (status = 500, description = "Storage error.", body = ErrorResponse),
    ),
    tag = "products"
)]
/// Overwrite name and price of a product.
///
/// Updating an id with no row still answers `200`; the affected row count is
/// not inspected.
pub async fn update_product(
    Path(id): Path<String>,
    products: Extension<Products>,
    body: Bytes,
) -> Result<Json<Product>, ProductError> {
    let id = parse_id(&id)?;
    let payload = decode_payload(&body)?;

    let product = products.update(id, payload).await?;

    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    params(("id" = i64, Path, description = "Product id (digits only)")),
    responses(
        (status = 200, description = "Delete issued, whether or not a row matched.", body = DeleteResponse),
        (status = 400, description = "Invalid product ID.", body = ErrorResponse),
        (status = 500, description = "Storage error.", body = ErrorResponse),
    ),
    tag = "products"
)]
pub async fn delete_product(
    Path(id): Path<String>,
    products: Extension<Products>,
) -> Result<Json<DeleteResponse>, ProductError> {
    let id = parse_id(&id)?;

    products.delete(id).await?;

    Ok(Json(DeleteResponse::success()))
}
