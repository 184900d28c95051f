//! Core types for Orchard

use serde::{Deserialize, Serialize};

/// A named record managed by the registry.
///
/// `id` is assigned by the registry when the record is stored; an empty `id`
/// marks a candidate that has not been stored yet. Names are free-form and
/// may repeat across records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl Fruit {
    /// A candidate record with the given name and no id.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }
}

/// Request to store a new fruit. The embedded fruit must carry an empty id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFruitRequest {
    pub fruit: Fruit,
}

/// Request to rename an existing fruit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFruitRequest {
    pub name: String,
}

/// Single-record response. `fruit` is `None` when no record matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FruitResponse {
    pub fruit: Option<Fruit>,
}

/// List response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFruitsResponse {
    #[serde(default)]
    pub fruits: Vec<Fruit>,
}
