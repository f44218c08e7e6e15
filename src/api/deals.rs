use actix_web::{delete, get, post, web, HttpResponse};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::Deserialize;

use crate::models::{AddDealRequest, Deal};
use crate::state::AppState;
use crate::utils::AppError;

pub const COLLECTION: &str = "deals";

#[derive(Debug, Deserialize)]
pub struct DealFilter {
    pub active: Option<bool>,
}

/// GET /api/deal?active=true
#[get("")]
pub async fn list_deals(
    state: web::Data<AppState>,
    query: web::Query<DealFilter>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let collection = db.collection::<Deal>(COLLECTION);

    let filter = match query.active {
        Some(active) => doc! { "active": active },
        None => doc! {},
    };

    let deals: Vec<Deal> = collection.find(filter).await?.try_collect().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": deals,
        "total": deals.len(),
    })))
}

/// POST /api/deal
#[post("")]
pub async fn add_deal(
    state: web::Data<AppState>,
    body: web::Json<AddDealRequest>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;

    if !(0.0..=100.0).contains(&body.discount_percent) {
        return Err(AppError::InvalidRequest(
            "Discount must be between 0 and 100".to_string(),
        ));
    }

    let deal = Deal {
        id: None,
        title: body.title.clone(),
        description: body.description.clone(),
        discount_percent: body.discount_percent,
        image: body.image.clone(),
        active: body.active,
    };

    let collection = db.collection::<Deal>(COLLECTION);
    let result = collection.insert_one(&deal).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "id": result.inserted_id.as_object_id().map(|id| id.to_hex()),
    })))
}

/// DELETE /api/deal/{id}
#[delete("/{id}")]
pub async fn remove_deal(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = state.db().ok_or(AppError::DatabaseUnavailable)?;
    let object_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::InvalidRequest("Invalid deal id".to_string()))?;

    let collection = db.collection::<Deal>(COLLECTION);
    let result = collection.delete_one(doc! { "_id": object_id }).await?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("Deal not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Deal removed",
    })))
}
