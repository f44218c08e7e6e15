use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartLine {
    pub food_id: ObjectId,
    pub quantity: i64,
}

/// One cart document per user, replaced wholesale on update.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cart {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub items: Vec<CartLine>,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateCartRequest {
    pub items: Vec<CartLineRequest>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CartLineRequest {
    pub food_id: String,
    pub quantity: i64,
}
