//! Listing endpoints under `/products`.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::{
    error::ProductError,
    storage::Products,
    types::{ErrorResponse, ListParams, Product, SortField, SortMode},
};

#[utoipa::path(
    get,
    path = "/products",
    params(ListParams),
    responses(
        (status = 200, description = "A page of products, possibly empty.", body = [Product]),
        (status = 500, description = "Storage error.", body = ErrorResponse),
    ),
    tag = "products"
)]
/// List products with a capped `count` and non-negative `start`.
pub async fn list_products(
    products: Extension<Products>,
    params: Option<Query<ListParams>>,
) -> Result<Json<Vec<Product>>, ProductError> {
    // An unparsable query string behaves like an empty one.
    let params = params.map(|Query(params)| params).unwrap_or_default();

    let rows = products.list(params.start(), params.count()).await?;

    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/products/order/{field}/{mode}",
    params(
        ("field" = String, Path, description = "`name` or `price`"),
        ("mode" = String, Path, description = "`asc` or `desc`"),
    ),
    responses(
        (status = 200, description = "All products in the requested order.", body = [Product]),
        (status = 404, description = "Field or mode outside the supported set."),
        (status = 500, description = "Storage error.", body = ErrorResponse),
    ),
    tag = "products"
)]
/// List every product ordered by `name` or `price`.
///
/// Anything other than `name|price` / `asc|desc` is treated as an unmatched
/// route: a bare `404`, never a `400`.
pub async fn order_products(
    Path((field, mode)): Path<(String, String)>,
    products: Extension<Products>,
) -> Response {
    let (Ok(field), Ok(mode)) = (field.parse::<SortField>(), mode.parse::<SortMode>()) else {
        debug!("Unsupported order: {field}/{mode}");
        return StatusCode::NOT_FOUND.into_response();
    };

    match products.order_by(field, mode).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => ProductError::from(err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/products/search/{search}",
    params(("search" = String, Path, description = "Substring to look for in product names")),
    responses(
        (status = 200, description = "Products whose name contains the term, ignoring case.", body = [Product]),
        (status = 500, description = "Storage error.", body = ErrorResponse),
    ),
    tag = "products"
)]
/// Case-insensitive substring search over product names.
pub async fn search_products(
    Path(search): Path<String>,
    products: Extension<Products>,
) -> Result<Json<Vec<Product>>, ProductError> {
    let rows = products.search(&search).await?;

    Ok(Json(rows))
}
