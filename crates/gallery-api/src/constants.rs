//! API constants

/// Prefix shared by every gallery endpoint
pub const API_PREFIX: &str = "/api";

/// Largest accepted request body. Gallery payloads are small JSON documents.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;
