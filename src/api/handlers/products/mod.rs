//! Product catalog endpoints.
//!
//! The handlers only parse inputs and map the high-level flow, while `storage`
//! owns the SQL. Every request issues at most one statement; malformed ids and
//! bodies are rejected with `400` before storage is touched.
//!
//! Routes:
//! - `GET /products?count&start`: capped listing (`count` in 1..=10, `start` >= 0).
//! - `GET /products/order/{field}/{mode}`: sorted listing; unknown field/mode is a `404`.
//! - `GET /products/search/{search}`: case-insensitive substring match on `name`.
//! - `POST /product`, `GET|PUT|DELETE /product/{id}`: single record CRUD.

pub(crate) mod collection;
mod error;
pub(crate) mod single;
pub mod storage;
pub mod types;

pub use error::ProductError;
pub use storage::Products;

const DEFAULT_COUNT: i64 = 10;
const MAX_COUNT: i64 = 10;
