use actix_web::{delete, get, post, web, HttpResponse};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

use crate::models::{AddFoodRequest, Food};
use crate::state::AppState;
use crate::utils::AppError;

pub const COLLECTION: &str = "foods";

/// GET /api/food - full menu
#[utoipa::path(
    get,
    path = "/api/food",
    tag = "Food",
    responses(
        (status = 200, description = "All food items"),
        (status = 503, description = "Database not available")
    )
)]
#[get("")]
pub async fn list_foods(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let collection = db.collection::<Food>(COLLECTION);

    let foods: Vec<Food> = collection.find(doc! {}).await?.try_collect().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": foods,
        "total": foods.len(),
    })))
}

/// GET /api/food/{id}
#[get("/{id}")]
pub async fn get_food(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let object_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid food id".to_string()))?;

    let collection = db.collection::<Food>(COLLECTION);
    let food = collection
        .find_one(doc! { "_id": object_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Food item not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": food,
    })))
}

/// POST /api/food - add a menu item
#[utoipa::path(
    post,
    path = "/api/food",
    tag = "Food",
    request_body = AddFoodRequest,
    responses(
        (status = 201, description = "Food item created"),
        (status = 503, description = "Database not available")
    )
)]
#[post("")]
pub async fn add_food(
    state: web::Data<AppState>,
    body: web::Json<AddFoodRequest>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;

    if body.price < 0.0 {
        return Err(AppError::InvalidRequest(
            "Price must not be negative".to_string(),
        ));
    }

    let food = Food {
        id: None,
        name: body.name.clone(),
        description: body.description.clone(),
        price: body.price,
        image: body.image.clone(),
        category: body.category.clone(),
    };

    let collection = db.collection::<Food>(COLLECTION);
    let result = collection.insert_one(&food).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "id": result.inserted_id.as_object_id().map(|id| id.to_hex()),
    })))
}

/// DELETE /api/food/{id}
#[delete("/{id}")]
pub async fn remove_food(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let object_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid food id".to_string()))?;

    let collection = db.collection::<Food>(COLLECTION);
    let result = collection.delete_one(doc! { "_id": object_id }).await?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("Food item not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Food item removed",
    })))
}
