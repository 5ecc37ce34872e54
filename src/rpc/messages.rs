// ---------------------------------------------------------------------------
// Message types (prost — standard protobuf wire format)
// ---------------------------------------------------------------------------

use crate::product::{Product, ProductInput};

#[derive(Clone, PartialEq, prost::Message)]
pub struct Empty {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProductId {
    #[prost(uint64, tag = "1")]
    pub id: u64,
}

/// Create/update payload. `id` is ignored by `AddProduct`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProductRequest {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "3")]
    pub quantity: i32,
    #[prost(double, tag = "4")]
    pub price: f64,
    #[prost(string, tag = "5")]
    pub photo: String,
    #[prost(string, tag = "6")]
    pub author: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProductReply {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "3")]
    pub quantity: i32,
    #[prost(double, tag = "4")]
    pub price: f64,
    #[prost(string, tag = "5")]
    pub photo: String,
    #[prost(string, tag = "6")]
    pub author: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProductList {
    #[prost(message, repeated, tag = "1")]
    pub products: Vec<ProductReply>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PingReply {
    #[prost(bool, tag = "1")]
    pub ok: bool,
    #[prost(uint64, tag = "2")]
    pub products: u64,
}

// ---------------------------------------------------------------------------
// Domain conversions
// ---------------------------------------------------------------------------

impl ProductRequest {
    /// Build a request for `UpdateProduct` (or `AddProduct` with `id = 0`).
    pub fn new(id: u64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            price: input.price,
            photo: input.photo,
            author: input.author,
        }
    }

    pub fn into_input(self) -> ProductInput {
        ProductInput {
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            photo: self.photo,
            author: self.author,
        }
    }
}

impl From<Product> for ProductReply {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            quantity: p.quantity,
            price: p.price,
            photo: p.photo,
            author: p.author,
        }
    }
}

impl From<ProductReply> for Product {
    fn from(r: ProductReply) -> Self {
        Self {
            id: r.id,
            name: r.name,
            quantity: r.quantity,
            price: r.price,
            photo: r.photo,
            author: r.author,
        }
    }
}
