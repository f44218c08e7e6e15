use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Ordering API",
        version = "1.0.0",
        description = "Backend API for the food ordering application: menu, categories, deals, users, carts, orders, reviews and payment records over MongoDB. Uploaded images are served from /images and /categoryimages."
    ),
    paths(
        // Health
        crate::api::health::root,
        crate::api::health::health_check,

        // Menu
        crate::api::foods::list_foods,
        crate::api::foods::add_food,
        crate::api::categories::list_categories,

        // Users & orders
        crate::api::users::register_user,
        crate::api::orders::place_order,
        crate::api::payments::record_payment,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::AddFoodRequest,
            crate::models::AddCategoryRequest,
            crate::models::AddDealRequest,
            crate::models::RegisterUserRequest,
            crate::models::AddReviewRequest,
            crate::models::UpdateCartRequest,
            crate::models::CartLineRequest,
            crate::models::PlaceOrderRequest,
            crate::models::OrderItemRequest,
            crate::models::UpdateOrderStatusRequest,
            crate::models::RecordPaymentRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and service health endpoints."),
        (name = "Food", description = "Menu item management."),
        (name = "Category", description = "Menu category management."),
        (name = "User", description = "User records. OAuth identifier uniqueness is index-enforced."),
        (name = "Order", description = "Order placement and tracking."),
        (name = "Payment", description = "Payment records tied to orders."),
    )
)]
pub struct ApiDoc;
