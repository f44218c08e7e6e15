use actix_web::{get, post, web, HttpResponse};
use mongodb::bson::{doc, oid::ObjectId};

use crate::models::{Order, Payment, RecordPaymentRequest};
use crate::state::AppState;
use crate::utils::AppError;

pub const COLLECTION: &str = "payments";

/// POST /api/payment - record the outcome reported by the payment provider.
/// No gateway calls happen here; a successful record marks the order paid.
#[utoipa::path(
    post,
    path = "/api/payment",
    tag = "Payment",
    request_body = RecordPaymentRequest,
    responses(
        (status = 201, description = "Payment recorded"),
        (status = 404, description = "Order not found"),
        (status = 503, description = "Database not available")
    )
)]
#[post("")]
pub async fn record_payment(
    state: web::Data<AppState>,
    body: web::Json<RecordPaymentRequest>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;

    let order_id = ObjectId::parse_str(&body.order_id)
        .map_err(|_| AppError::InvalidRequest("Invalid order id".to_string()))?;

    let orders = db.collection::<Order>(super::orders::COLLECTION);
    orders
        .find_one(doc! { "_id": order_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    let payment = Payment {
        id: None,
        order_id,
        amount: body.amount,
        method: body.method.clone(),
        status: body.status.clone(),
        created_at: chrono::Utc::now().timestamp(),
    };

    let collection = db.collection::<Payment>(COLLECTION);
    let result = collection.insert_one(&payment).await?;

    if payment.status == "paid" {
        orders
            .update_one(
                doc! { "_id": order_id },
                doc! { "$set": { "payment": true } },
            )
            .await?;
    }

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "id": result.inserted_id.as_object_id().map(|id| id.to_hex()),
    })))
}

/// GET /api/payment/order/{order_id}
#[get("/order/{order_id}")]
pub async fn get_order_payment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let order_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid order id".to_string()))?;

    let collection = db.collection::<Payment>(COLLECTION);
    let payment = collection
        .find_one(doc! { "order_id": order_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": payment,
    })))
}
