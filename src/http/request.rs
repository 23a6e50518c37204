//! Request ID assignment and propagation.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Make the ID visible to handlers via the request headers
//! - Echo the ID on the response so clients and logs can correlate
//!
//! # Design Decisions
//! - Request ID added as early as possible in the middleware stack
//! - A client-supplied x-request-id is trusted and preserved as-is

use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

/// Header carrying the request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Axum middleware assigning and propagating `x-request-id`.
pub async fn propagate_request_id(mut request: Request, next: Next) -> Response {
    let id = match request.headers().get(X_REQUEST_ID) {
        Some(existing) => existing.clone(),
        None => {
            let generated = Uuid::new_v4().to_string();
            match HeaderValue::from_str(&generated) {
                Ok(value) => {
                    request.headers_mut().insert(X_REQUEST_ID, value.clone());
                    value
                }
                // A hyphenated UUID is always a valid header value; if that
                // ever fails, serve the request without an ID.
                Err(_) => return next.run(request).await,
            }
        }
    };

    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID, id);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    fn router() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(propagate_request_id))
    }

    #[tokio::test]
    async fn generates_id_when_absent() {
        let response = router()
            .oneshot(HttpRequest::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().get(X_REQUEST_ID).unwrap();
        let parsed = Uuid::parse_str(id.to_str().unwrap());
        assert!(parsed.is_ok());
    }

    #[tokio::test]
    async fn preserves_client_supplied_id() {
        let response = router()
            .oneshot(
                HttpRequest::builder()
                    .uri("/")
                    .header(X_REQUEST_ID, "client-chosen-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(X_REQUEST_ID).unwrap(),
            "client-chosen-id"
        );
    }
}
