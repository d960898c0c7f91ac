//! Request body and query extractors that reject with [`AppError`].
//!
//! axum's own `Json` and `Query` reject with plain-text bodies; these
//! wrappers keep malformed input inside the `{"error", "code"}` format.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor. Use exactly like `axum::Json`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor. Use exactly like `axum::extract::Query`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
