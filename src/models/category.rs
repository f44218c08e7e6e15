use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// Image filename under `uploads/categories/`, served from
    /// `/categoryimages`.
    pub image: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddCategoryRequest {
    pub name: String,
    pub image: String,
}
