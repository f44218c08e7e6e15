use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User document. The OAuth identifiers are optional and independently
/// nullable; uniqueness among present values is enforced by the sparse
/// unique indexes managed in `database::indexes`, not by application code.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// Absent for users created through an OAuth provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "googleId", skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(rename = "facebookId", skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    /// food id -> quantity, kept on the user like the web client expects.
    #[serde(rename = "cartData", default)]
    pub cart_data: HashMap<String, i64>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    #[serde(rename = "googleId")]
    pub google_id: Option<String>,
    #[serde(rename = "facebookId")]
    pub facebook_id: Option<String>,
}
