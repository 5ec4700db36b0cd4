use std::{any::Any, panic::AssertUnwindSafe};

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use crate::routes::internal_server_error;

/// Answers with the structured 500 outcome if a handler panics.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(request: Request, next: Next) -> Response {
    let route = request.uri().path().to_owned();
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => internal_server_error(anyhow!(
            "handler for {route} panicked: {}",
            panic_message(&*payload)
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload")
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::StatusCode, routing};
    use folio_utils::Apply;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::tests::body_json;

    #[tokio::test]
    async fn panic_becomes_internal_server_error() {
        // Arrange
        let router = Router::new()
            .route(
                "/contact",
                routing::post(|| async {
                    if true {
                        panic!("smtp pool poisoned");
                    }
                    "unreachable"
                }),
            )
            .apply(add);
        let request = axum::http::Request::post("/contact")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = router.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Internal server error"})
        );
    }

    #[test]
    fn message_from_payload() {
        let static_str: Box<dyn Any + Send> = Box::new("boom");
        let string: Box<dyn Any + Send> = Box::new(String::from("bang"));
        let other: Box<dyn Any + Send> = Box::new(42);

        assert_eq!(panic_message(&*static_str), "boom");
        assert_eq!(panic_message(&*string), "bang");
        assert_eq!(panic_message(&*other), "unknown panic payload");
    }
}
