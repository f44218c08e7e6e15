use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    pub food_id: ObjectId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub items: Vec<OrderItem>,
    pub amount: f64,
    pub address: String,
    /// "Food Processing" on placement, updated by the admin panel.
    pub status: String,
    pub payment: bool,
    pub created_at: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PlaceOrderRequest {
    pub user_id: String,
    pub items: Vec<OrderItemRequest>,
    pub amount: f64,
    pub address: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct OrderItemRequest {
    pub food_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}
