//! XHR header guard
//!
//! Requires `X-Requested-With: XMLHttpRequest` on the request. This blocks
//! plain cross-site form submissions from reaching the auth endpoint; it is
//! not an authentication boundary on its own.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

use crate::error::AppError;

/// Header value browsers cannot attach through a simple form post
pub const XHR_HEADER: &str = "x-requested-with";
pub const XHR_VALUE: &str = "XMLHttpRequest";

/// Reject any request not marked as a programmatic (XHR) call with 403
pub async fn require_xhr(request: Request, next: Next) -> Result<Response, AppError> {
    let marked = request
        .headers()
        .get(XHR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == XHR_VALUE)
        .unwrap_or(false);

    if !marked {
        debug!(path = %request.uri().path(), "Rejecting request without XHR marker");
        return Err(AppError::Forbidden);
    }

    Ok(next.run(request).await)
}
