use actix_web::{get, post, put, web, HttpResponse};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

use crate::models::{Order, OrderItem, PlaceOrderRequest, UpdateOrderStatusRequest};
use crate::state::AppState;
use crate::utils::AppError;

pub const COLLECTION: &str = "orders";

/// POST /api/order
#[utoipa::path(
    post,
    path = "/api/order",
    tag = "Order",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed"),
        (status = 400, description = "Empty or malformed order"),
        (status = 503, description = "Database not available")
    )
)]
#[post("")]
pub async fn place_order(
    state: web::Data<AppState>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;

    if body.items.is_empty() {
        return Err(AppError::InvalidRequest(
            "Order must contain at least one item".to_string(),
        ));
    }

    let user_id = ObjectId::parse_str(&body.user_id)
        .map_err(|_| AppError::InvalidRequest("Invalid user id".to_string()))?;

    let mut items = Vec::with_capacity(body.items.len());
    for item in &body.items {
        let food_id = ObjectId::parse_str(&item.food_id)
            .map_err(|_| AppError::InvalidRequest("Invalid food id".to_string()))?;
        items.push(OrderItem {
            food_id,
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        });
    }

    let order = Order {
        id: None,
        user_id,
        items,
        amount: body.amount,
        address: body.address.clone(),
        status: "Food Processing".to_string(),
        payment: false,
        created_at: chrono::Utc::now().timestamp(),
    };

    let collection = db.collection::<Order>(COLLECTION);
    let result = collection.insert_one(&order).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "id": result.inserted_id.as_object_id().map(|id| id.to_hex()),
    })))
}

/// GET /api/order/user/{user_id} - newest first
#[get("/user/{user_id}")]
pub async fn list_user_orders(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let user_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid user id".to_string()))?;

    let collection = db.collection::<Order>(COLLECTION);
    let orders: Vec<Order> = collection
        .find(doc! { "user_id": user_id })
        .sort(doc! { "created_at": -1 })
        .await?
        .try_collect()
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": orders,
        "total": orders.len(),
    })))
}

/// GET /api/order/{id}
#[get("/{id}")]
pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let object_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid order id".to_string()))?;

    let collection = db.collection::<Order>(COLLECTION);
    let order = collection
        .find_one(doc! { "_id": object_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": order,
    })))
}

/// PUT /api/order/{id}/status
#[put("/{id}/status")]
pub async fn update_order_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let object_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid order id".to_string()))?;

    let collection = db.collection::<Order>(COLLECTION);
    let result = collection
        .update_one(
            doc! { "_id": object_id },
            doc! { "$set": { "status": &body.status } },
        )
        .await?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound("Order not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Order status updated",
    })))
}
