use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub food_id: ObjectId,
    pub user_id: ObjectId,
    /// 1..=5
    pub rating: i32,
    pub comment: String,
    pub created_at: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddReviewRequest {
    pub food_id: String,
    pub user_id: String,
    pub rating: i32,
    pub comment: String,
}
