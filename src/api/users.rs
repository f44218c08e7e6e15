use actix_web::{get, post, web, HttpResponse};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use std::collections::HashMap;

use crate::models::{RegisterUserRequest, User};
use crate::state::AppState;
use crate::utils::AppError;

pub const COLLECTION: &str = "users";

/// POST /api/user - create a user document.
///
/// Uniqueness of `googleId` / `facebookId` is enforced entirely by the
/// sparse unique indexes; a violating insert surfaces here as a duplicate
/// key write error and maps to 409.
#[utoipa::path(
    post,
    path = "/api/user",
    tag = "User",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 409, description = "Duplicate email or OAuth identifier"),
        (status = 503, description = "Database not available")
    )
)]
#[post("")]
pub async fn register_user(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;

    if body.name.trim().is_empty() || body.email.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Name and email are required".to_string(),
        ));
    }

    let user = User {
        id: None,
        name: body.name.clone(),
        email: body.email.clone(),
        password: body.password.clone(),
        google_id: body.google_id.clone(),
        facebook_id: body.facebook_id.clone(),
        cart_data: HashMap::new(),
    };

    let collection = db.collection::<User>(COLLECTION);
    let result = collection.insert_one(&user).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "id": result.inserted_id.as_object_id().map(|id| id.to_hex()),
    })))
}

/// GET /api/user
#[get("")]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let collection = db.collection::<User>(COLLECTION);

    let users: Vec<User> = collection.find(doc! {}).await?.try_collect().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": users,
        "total": users.len(),
    })))
}

/// GET /api/user/{id}
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let object_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid user id".to_string()))?;

    let collection = db.collection::<User>(COLLECTION);
    let user = collection
        .find_one(doc! { "_id": object_id })
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": user,
    })))
}
