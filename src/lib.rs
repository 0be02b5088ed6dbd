//! # Products (catalog CRUD service)
//!
//! `products` exposes a single relational resource, the **product**
//! (`id`, `name`, `price`), over a small JSON HTTP API backed by `PostgreSQL`.
//!
//! ## Request Flow
//!
//! Every request is a thin mapping onto exactly one parameterized SQL
//! statement:
//!
//! 1. The router matches method + path and extracts typed parameters.
//! 2. The handler validates them (`400` on malformed ids or bodies) without
//!    touching storage.
//! 3. The `Products` store runs one statement against the `products` table.
//! 4. The handler serializes the result, or a `{"error": ...}` body, as JSON.
//!
//! ## Storage
//!
//! The pool is owned by an explicitly constructed `Products` store that is
//! injected into handlers, so tests can point the whole router at a
//! disposable database. Sorting only accepts the closed `SortField` x
//! `SortMode` set, each mapped to a fixed statement.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
