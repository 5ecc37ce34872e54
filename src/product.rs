//! Product — the single entity held by the inventory store.

use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// A product record as stored and returned by every layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub author: String,
}

/// The client-supplied fields of a product, used for both create and update.
///
/// The id is never part of the input: the store assigns it on create and the
/// caller names it separately on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub author: String,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            photo: String::new(),
            author: String::new(),
        }
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = photo.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Check the range rules every stored product must satisfy.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.is_empty() {
            return Err(StoreError::InvalidArgument("name must not be empty".into()));
        }
        if self.quantity < 0 {
            return Err(StoreError::InvalidArgument("quantity must be >= 0".into()));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(StoreError::InvalidArgument("price must be > 0".into()));
        }
        Ok(())
    }
}

impl Product {
    pub(crate) fn from_input(id: u64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            price: input.price,
            photo: input.photo,
            author: input.author,
        }
    }

    /// Replace the mutable fields. Empty `photo`/`author` keep the prior value.
    pub(crate) fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.quantity = input.quantity;
        self.price = input.price;
        if !input.photo.is_empty() {
            self.photo = input.photo;
        }
        if !input.author.is_empty() {
            self.author = input.author;
        }
    }

    /// The fields of this product without its id.
    pub fn input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
            photo: self.photo.clone(),
            author: self.author.clone(),
        }
    }
}
