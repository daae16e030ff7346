//! Server construction and middleware wiring.
//!
//! `build_app` is shared by `main` and the integration tests so both run
//! the exact route table, middleware, and JSON error handling.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{App, HttpRequest, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::Error;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::home::home;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, replace_user};
use crate::middleware::trace::Trace;
use crate::outbound::persistence::DieselUserStore;

/// Build the HTTP state from configuration: Diesel-backed when a pool is
/// attached, in-memory otherwise.
pub fn build_http_state(server_config: &ServerConfig) -> HttpState {
    match &server_config.db_pool {
        Some(pool) => HttpState::new(Arc::new(DieselUserStore::new(pool.clone()))),
        None => HttpState::in_memory(),
    }
}

/// Malformed or mistyped JSON bodies surface as the standard error envelope
/// rather than Actix's plain-text default.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid request body: {err}")).into()
}

/// Path segments that fail extraction (a non-integer `{id}`) get the same
/// envelope treatment as bad JSON bodies.
fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid path parameter: {err}")).into()
}

/// Assemble the application: routes, trace middleware, JSON error handling,
/// and (in debug builds) Swagger UI at `/docs`.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(replace_user)
        .service(delete_user);

    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(Trace)
        .service(api)
        .service(home)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::Value;

    fn test_states() -> (web::Data<HttpState>, web::Data<HealthState>) {
        (
            web::Data::new(HttpState::in_memory()),
            web::Data::new(HealthState::new()),
        )
    }

    #[actix_web::test]
    async fn malformed_json_yields_the_error_envelope() {
        let (http_state, health_state) = test_states();
        let app = actix_test::init_service(build_app(http_state, health_state)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/users/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("JSON error body");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    #[actix_web::test]
    async fn non_integer_id_yields_the_error_envelope() {
        let (http_state, health_state) = test_states();
        let app = actix_test::init_service(build_app(http_state, health_state)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/users/abc")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("JSON error body");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    #[actix_web::test]
    async fn pool_less_config_serves_from_the_in_memory_store() {
        let state = build_http_state(&ServerConfig::new("127.0.0.1:0"));
        let users = state.users.list().await.expect("list users");
        assert!(users.is_empty());
    }
}
