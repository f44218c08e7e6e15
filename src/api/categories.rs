use actix_web::{delete, get, post, web, HttpResponse};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

use crate::models::{AddCategoryRequest, Category};
use crate::state::AppState;
use crate::utils::AppError;

pub const COLLECTION: &str = "categories";

/// GET /api/category
#[utoipa::path(
    get,
    path = "/api/category",
    tag = "Category",
    responses(
        (status = 200, description = "All categories"),
        (status = 503, description = "Database not available")
    )
)]
#[get("")]
pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let collection = db.collection::<Category>(COLLECTION);

    let categories: Vec<Category> = collection.find(doc! {}).await?.try_collect().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": categories,
        "total": categories.len(),
    })))
}

/// POST /api/category
#[post("")]
pub async fn add_category(
    state: web::Data<AppState>,
    body: web::Json<AddCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;

    let category = Category {
        id: None,
        name: body.name.clone(),
        image: body.image.clone(),
    };

    let collection = db.collection::<Category>(COLLECTION);
    let result = collection.insert_one(&category).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "id": result.inserted_id.as_object_id().map(|id| id.to_hex()),
    })))
}

/// DELETE /api/category/{id}
#[delete("/{id}")]
pub async fn remove_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let object_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid category id".to_string()))?;

    let collection = db.collection::<Category>(COLLECTION);
    let result = collection.delete_one(doc! { "_id": object_id }).await?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("Category not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Category removed",
    })))
}
