//! API handlers for the product service.

pub mod products;
