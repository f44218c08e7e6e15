use actix_web::{delete, get, post, web, HttpResponse};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

use crate::models::{AddReviewRequest, Review};
use crate::state::AppState;
use crate::utils::AppError;

pub const COLLECTION: &str = "reviews";

/// GET /api/review/food/{food_id}
#[get("/food/{food_id}")]
pub async fn list_food_reviews(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let food_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid food id".to_string()))?;

    let collection = db.collection::<Review>(COLLECTION);
    let reviews: Vec<Review> = collection
        .find(doc! { "food_id": food_id })
        .await?
        .try_collect()
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": reviews,
        "total": reviews.len(),
    })))
}

/// POST /api/review
#[post("")]
pub async fn add_review(
    state: web::Data<AppState>,
    body: web::Json<AddReviewRequest>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;

    if !(1..=5).contains(&body.rating) {
        return Err(AppError::InvalidRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    let food_id = ObjectId::parse_str(&body.food_id)
        .map_err(|_| AppError::InvalidRequest("Invalid food id".to_string()))?;
    let user_id = ObjectId::parse_str(&body.user_id)
        .map_err(|_| AppError::InvalidRequest("Invalid user id".to_string()))?;

    let review = Review {
        id: None,
        food_id,
        user_id,
        rating: body.rating,
        comment: body.comment.clone(),
        created_at: chrono::Utc::now().timestamp(),
    };

    let collection = db.collection::<Review>(COLLECTION);
    let result = collection.insert_one(&review).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "id": result.inserted_id.as_object_id().map(|id| id.to_hex()),
    })))
}

/// DELETE /api/review/{id}
#[delete("/{id}")]
pub async fn remove_review(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let object_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid review id".to_string()))?;

    let collection = db.collection::<Review>(COLLECTION);
    let result = collection.delete_one(doc! { "_id": object_id }).await?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("Review not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Review removed",
    })))
}
