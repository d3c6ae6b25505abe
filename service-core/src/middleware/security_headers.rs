use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

/// Hardening headers for every response.
///
/// JSON routes under `/api` get a deny-all CSP; the HTML surface (`/info`
/// and static assets) may load same-origin resources.
pub async fn security_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let is_api_route = req.uri().path().starts_with("/api/");

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        header::HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        header::HeaderValue::from_static("DENY"),
    );

    let csp = if is_api_route {
        "default-src 'none'; frame-ancestors 'none'"
    } else {
        "default-src 'self'; img-src 'self' data:; frame-ancestors 'none'"
    };
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        header::HeaderValue::from_static(csp),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::util::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/api/persons", get(|| async { "[]" }))
            .route("/info", get(|| async { "<p>ok</p>" }))
            .layer(axum::middleware::from_fn(security_headers_middleware))
    }

    async fn csp_for(uri: &str) -> String {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        response.headers()[header::CONTENT_SECURITY_POLICY]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn api_routes_get_strict_policy() {
        assert!(csp_for("/api/persons").await.starts_with("default-src 'none'"));
    }

    #[tokio::test]
    async fn html_routes_allow_same_origin() {
        assert!(csp_for("/info").await.starts_with("default-src 'self'"));
    }
}
