pub mod carts;
pub mod categories;
pub mod deals;
pub mod foods;
pub mod health;
pub mod orders;
pub mod payments;
pub mod reviews;
pub mod swagger;
pub mod users;

use actix_files::Files;
use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Registers every route of the service: the API scopes, the two static
/// image mounts, Swagger UI and the liveness root. Used by `main` and by the
/// HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let openapi = swagger::ApiDoc::openapi();

    cfg.service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
        // Liveness + health
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        // API scopes
        .service(
            web::scope("/api/food")
                .service(foods::list_foods)
                .service(foods::add_food)
                .service(foods::get_food)
                .service(foods::remove_food),
        )
        .service(
            web::scope("/api/category")
                .service(categories::list_categories)
                .service(categories::add_category)
                .service(categories::remove_category),
        )
        .service(
            web::scope("/api/deal")
                .service(deals::list_deals)
                .service(deals::add_deal)
                .service(deals::remove_deal),
        )
        .service(
            web::scope("/api/user")
                .service(users::register_user)
                .service(users::list_users)
                .service(users::get_user),
        )
        .service(
            web::scope("/api/review")
                .service(reviews::list_food_reviews)
                .service(reviews::add_review)
                .service(reviews::remove_review),
        )
        .service(
            web::scope("/api/cart")
                .service(carts::get_cart)
                .service(carts::update_cart)
                .service(carts::clear_cart),
        )
        .service(
            web::scope("/api/order")
                .service(orders::place_order)
                .service(orders::list_user_orders)
                .service(orders::get_order)
                .service(orders::update_order_status),
        )
        .service(
            web::scope("/api/payment")
                .service(payments::record_payment)
                .service(payments::get_order_payment),
        )
        // Uploaded images
        .service(Files::new("/images", "uploads"))
        .service(Files::new("/categoryimages", "uploads/categories"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use actix_web::{test, App};

    fn empty_state() -> web::Data<AppState> {
        web::Data::new(AppState::new())
    }

    #[actix_rt::test]
    async fn root_serves_liveness_without_database() {
        let app = test::init_service(
            App::new().app_data(empty_state()).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, "API working");
    }

    #[actix_rt::test]
    async fn health_reports_database_unavailable() {
        let app = test::init_service(
            App::new().app_data(empty_state()).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["database"], "unavailable");
    }

    #[actix_rt::test]
    async fn database_routes_answer_503_before_bootstrap() {
        let app = test::init_service(
            App::new().app_data(empty_state()).configure(configure),
        )
        .await;

        for uri in [
            "/api/food",
            "/api/category",
            "/api/deal",
            "/api/user",
            "/api/order/user/0123456789abcdef01234567",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 503, "{} should be gated on the DB", uri);
        }
    }

    #[actix_rt::test]
    async fn database_unavailable_wins_over_id_parse_errors() {
        // Parse errors are only reachable once the DB is up; with an empty
        // state the unavailable answer wins. This pins the precedence.
        let app = test::init_service(
            App::new().app_data(empty_state()).configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/food/not-an-object-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);
    }
}
