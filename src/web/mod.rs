pub mod routes;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::registry::ActivityRegistry;

/// Assemble the full application router around an injected registry.
pub fn app(registry: ActivityRegistry) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:name/signup",
            post(routes::activity::signup_handler),
        )
        .route(
            "/activities/:name/signoff",
            post(routes::activity::signoff_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(registry)
}
