use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A stored user document.
///
/// `name` and `email` are optional here on purpose: the collection accepts
/// documents without them, and only the create endpoint insists on both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        // BSON dates carry milliseconds; truncate now so the returned record
        // matches what a later read yields.
        let now = bson::DateTime::now().to_chrono();
        Self {
            id: ObjectId::new(),
            name: Some(name),
            email: Some(email),
            created_at: now,
            updated_at: now,
        }
    }
}
