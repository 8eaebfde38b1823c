//! Wire models: request and response payload shapes, one struct per
//! endpoint. Kept separate from the entity so the external JSON contract can
//! drift (field renames, versioning) without touching persistence code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateItemRequestBody {
    pub word: String,
    pub translation: String,
}

#[derive(Debug, Serialize)]
pub struct CreateItemResponseBody {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequestBody {
    pub word: String,
    pub translation: String,
}

#[derive(Debug, Serialize)]
pub struct Item {
    pub id: i64,
    pub word: String,
    pub translation: String,
}

#[derive(Debug, Serialize)]
pub struct ListItemsResponseBody {
    pub items: Vec<Item>,
}
