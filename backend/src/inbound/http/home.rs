//! Root route serving the static welcome page.

use actix_web::{HttpResponse, get, http::header::ContentType};

const WELCOME_PAGE: &str = "<h1>Welcome to the User Registry API!</h1>";

/// Static welcome page.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome page")
    ),
    tags = ["home"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(WELCOME_PAGE)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::{App, test as actix_test};

    #[actix_web::test]
    async fn home_serves_html() {
        let app = actix_test::init_service(App::new().service(home)).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;

        assert!(response.status().is_success());
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/html"));
        let body = actix_test::read_body(response).await;
        assert_eq!(body, WELCOME_PAGE.as_bytes());
    }
}
