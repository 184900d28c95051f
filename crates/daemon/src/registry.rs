//! In-memory state management for fruit records

use orchard_common::{Error, Fruit, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Store for all fruit records.
///
/// The registry owns the record collection outright. Ids are assigned here
/// and nowhere else; every mutation takes the write lock exactly once, so
/// readers never observe a partially applied operation.
#[derive(Default)]
pub struct FruitRegistry {
    fruits: RwLock<HashMap<String, Fruit>>,
}

impl FruitRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new fruit under a freshly assigned id.
    ///
    /// The candidate must not carry an id of its own; creation never honors
    /// caller-assigned identifiers.
    pub fn create(&self, fruit: Fruit) -> Result<Fruit> {
        if !fruit.id.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "id is assigned by the registry, got {:?}",
                fruit.id
            )));
        }

        let mut fruits = self.fruits.write();
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !fruits.contains_key(&candidate) {
                break candidate;
            }
        };
        let stored = Fruit {
            id: id.clone(),
            name: fruit.name,
        };
        fruits.insert(id, stored.clone());

        debug!("Created fruit: {} ({})", stored.name, stored.id);

        Ok(stored)
    }

    /// Get a fruit by id
    pub fn get(&self, id: &str) -> Option<Fruit> {
        self.fruits.read().get(id).cloned()
    }

    /// List all fruits, in no particular order
    pub fn list(&self) -> Vec<Fruit> {
        self.fruits.read().values().cloned().collect()
    }

    /// Rename a fruit in place, keeping its id.
    ///
    /// An unknown id is a no-op and returns `None`.
    pub fn update(&self, id: &str, name: String) -> Option<Fruit> {
        let mut fruits = self.fruits.write();
        let fruit = fruits.get_mut(id)?;
        fruit.name = name;
        Some(fruit.clone())
    }

    /// Remove a fruit by id, returning it as it was stored.
    ///
    /// An unknown id returns `None`; removing the same id twice is safe.
    pub fn remove(&self, id: &str) -> Option<Fruit> {
        let removed = self.fruits.write().remove(id);
        if let Some(fruit) = &removed {
            debug!("Removed fruit: {} ({})", fruit.name, fruit.id);
        }
        removed
    }

    /// Remove every fruit
    pub fn remove_all(&self) {
        self.fruits.write().clear();
    }

    /// Number of stored fruits
    pub fn len(&self) -> usize {
        self.fruits.read().len()
    }

    /// Whether the registry holds no fruits
    pub fn is_empty(&self) -> bool {
        self.fruits.read().is_empty()
    }
}
