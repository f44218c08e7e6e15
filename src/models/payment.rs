use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Payment record only; no gateway integration lives in this service.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Payment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub order_id: ObjectId,
    pub amount: f64,
    pub method: String,
    pub status: String,
    pub created_at: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RecordPaymentRequest {
    pub order_id: String,
    pub amount: f64,
    pub method: String,
    pub status: String,
}
