use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::presentation::http::{
    endpoints::{
        health::HealthEndpoints,
        root::{ApiState, Endpoints},
        users::UsersEndpoints,
    },
    errors::render_error,
};

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Assembles the HTTP application: the API at `/`, Swagger UI at `/docs`
/// and the OpenAPI document at `/openapi.json`.
pub fn build_app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (Endpoints, HealthEndpoints, UsersEndpoints::new(state)),
        "User Accounts API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .catch_all_error(render_error)
        .with(Tracing)
}
