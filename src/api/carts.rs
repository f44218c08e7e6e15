use actix_web::{delete, get, put, web, HttpResponse};
use mongodb::bson::{doc, oid::ObjectId};

use crate::models::{Cart, CartLine, UpdateCartRequest};
use crate::state::AppState;
use crate::utils::AppError;

pub const COLLECTION: &str = "carts";

/// GET /api/cart/{user_id} - empty cart when none is stored yet
#[get("/{user_id}")]
pub async fn get_cart(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let user_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid user id".to_string()))?;

    let collection = db.collection::<Cart>(COLLECTION);
    let cart = collection.find_one(doc! { "user_id": user_id }).await?;

    let cart = cart.unwrap_or(Cart {
        id: None,
        user_id,
        items: Vec::new(),
        updated_at: 0,
    });

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": cart,
    })))
}

/// PUT /api/cart/{user_id} - replace the cart contents wholesale
#[put("/{user_id}")]
pub async fn update_cart(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateCartRequest>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let user_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid user id".to_string()))?;

    let mut items = Vec::with_capacity(body.items.len());
    for line in &body.items {
        if line.quantity <= 0 {
            return Err(AppError::InvalidRequest(
                "Quantity must be positive".to_string(),
            ));
        }
        let food_id = ObjectId::parse_str(&line.food_id)
            .map_err(|_| AppError::InvalidRequest("Invalid food id".to_string()))?;
        items.push(CartLine {
            food_id,
            quantity: line.quantity,
        });
    }

    let cart = Cart {
        id: None,
        user_id,
        items,
        updated_at: chrono::Utc::now().timestamp(),
    };

    let collection = db.collection::<Cart>(COLLECTION);
    collection
        .replace_one(doc! { "user_id": user_id }, &cart)
        .upsert(true)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Cart updated",
    })))
}

/// DELETE /api/cart/{user_id}
#[delete("/{user_id}")]
pub async fn clear_cart(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let user_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid user id".to_string()))?;

    let collection = db.collection::<Cart>(COLLECTION);
    collection.delete_one(doc! { "user_id": user_id }).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Cart cleared",
    })))
}
