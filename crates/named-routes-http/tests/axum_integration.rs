//! Integration tests for named routes on the axum backend.
//!
//! Tests cover:
//! 1. Named routes dispatch requests at the paths they reverse to
//! 2. Group prefixes apply to both dispatch and reverse lookups
//! 3. Group handlers wrap the routes beneath them
//! 4. Method shortcuts register the right method
//! 5. Reverse errors surface while the router keeps serving

use axum::body::Body;
use axum::http::{HeaderValue, Request as HttpRequest, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;

use named_routes_http::backend::axum_backend::{endpoint, middleware, AxumBackend, Next};
use named_routes_http::{NamedRoutesError, Router};

type Request = axum::extract::Request;

async fn send(app: axum::Router, method: &str, uri: &str) -> Response {
    let request = HttpRequest::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn echo_path() -> named_routes_http::backend::axum_backend::ChainHandler {
    endpoint(|request: Request| async move { request.uri().path().to_string() })
}

// ============================================================================
// 1. Reverse then dispatch
// ============================================================================

#[tokio::test]
async fn test_reversed_path_is_routable() {
    let mut router = Router::new(AxumBackend::<()>::new());
    router.get("root", "/", [echo_path()]);
    router.get("user", "/user/:id", [echo_path()]);
    router.get("item-splat", "/item/*splat", [echo_path()]);

    let user_path = router.reverse("user").with("id", "3").path().unwrap();
    let splat_path = router
        .reverse("item-splat")
        .with("splat", "records/7")
        .path()
        .unwrap();
    let root_path = router.reverse("root").path().unwrap();

    let app = router.into_backend().into_router();

    let response = send(app.clone(), "GET", &user_path).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "/user/3");

    let response = send(app.clone(), "GET", &splat_path).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "/item/records/7");

    let response = send(app, "GET", &root_path).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// 2. Groups
// ============================================================================

#[tokio::test]
async fn test_nested_group_prefixes() {
    let mut router = Router::new(AxumBackend::<()>::new());
    let mut api = router.group("/api", []);
    api.get("api-info", "/info", [echo_path()]);
    let mut v1 = api.group("v1", []);
    v1.post("v1-submit", "/submit", [echo_path()]);

    assert_eq!(router.reverse("api-info").path().unwrap(), "/api/info");
    let submit = router.reverse("v1-submit").path().unwrap();
    assert_eq!(submit, "/api/v1/submit");

    let app = router.into_backend().into_router();

    let response = send(app.clone(), "POST", &submit).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "/api/v1/submit");

    let response = send(app, "GET", "/api/info").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// 3. Handler chains
// ============================================================================

#[tokio::test]
async fn test_group_handlers_wrap_routes() {
    let tag = middleware(|request: Request, next: Next| async move {
        let mut response = next.run(request).await;
        response
            .headers_mut()
            .insert("x-group", HeaderValue::from_static("api"));
        response
    });

    let mut router = Router::new(AxumBackend::<()>::new());
    let mut api = router.group("/api", [tag]);
    api.get("api-info", "/info", [endpoint(|_req: Request| async { "info" })]);

    let app = router.into_backend().into_router();
    let response = send(app, "GET", "/api/info").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-group"], "api");
    assert_eq!(body_string(response).await, "info");
}

#[tokio::test]
async fn test_middleware_can_short_circuit() {
    let deny = middleware(|_request: Request, _next: Next| async {
        StatusCode::FORBIDDEN.into_response()
    });

    let mut router = Router::new(AxumBackend::<()>::new());
    let mut admin = router.group("/admin", [deny]);
    admin.delete("admin-user", "/users/:id", [echo_path()]);

    let path = router.reverse("admin-user").with("id", "9").path().unwrap();
    let app = router.into_backend().into_router();
    let response = send(app, "DELETE", &path).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_exhausted_chain_is_not_found() {
    let pass = middleware(|request: Request, next: Next| async move { next.run(request).await });

    let mut router = Router::new(AxumBackend::<()>::new());
    router.get("empty", "/empty", [pass]);

    let app = router.into_backend().into_router();
    let response = send(app, "GET", "/empty").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// 4. Methods
// ============================================================================

#[tokio::test]
async fn test_method_shortcuts_register_methods() {
    let mut router = Router::new(AxumBackend::<()>::new());
    router.put("put", "/resource", [endpoint(|_req: Request| async { "put" })]);
    router.patch("patch", "/resource", [endpoint(|_req: Request| async { "patch" })]);
    router.options("options", "/resource", [endpoint(|_req: Request| async { "options" })]);

    let app = router.into_backend().into_router();

    let response = send(app.clone(), "PATCH", "/resource").await;
    assert_eq!(body_string(response).await, "patch");

    let response = send(app.clone(), "OPTIONS", "/resource").await;
    assert_eq!(body_string(response).await, "options");

    let response = send(app, "POST", "/resource").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ============================================================================
// 5. Reverse errors
// ============================================================================

#[tokio::test]
async fn test_reverse_errors_do_not_affect_router() {
    let mut router = Router::new(AxumBackend::<()>::new());
    router.get("user", "/user/:id", [echo_path()]);

    let err = router.reverse("user").path().unwrap_err();
    assert!(matches!(err, NamedRoutesError::RouteParameterNotSet(ref p) if p == "id"));

    let err = router.reverse("missing").path().unwrap_err();
    assert!(matches!(err, NamedRoutesError::NoRouteDefined(ref n) if n == "missing"));

    let app = router.into_backend().into_router();
    let response = send(app, "GET", "/user/5").await;
    assert_eq!(body_string(response).await, "/user/5");
}
