//! HTTP gateway — translates JSON requests into store RPCs and RPC outcomes
//! into a uniform envelope.
//!
//! Requires the `http` feature. Uses axum for routing and the generated
//! tonic client for the store.
//!
//! ## Routes
//!
//! - `GET /products` — list all products.
//! - `GET /product/:id` — one product.
//! - `POST /product` — create; `name`, `quantity` and `price` are required.
//! - `PUT /product/:id` — update; absent fields default to zero / empty.
//! - `DELETE /product/:id` — delete.
//! - `GET /health` — `200` while the store answers, `503` when it cannot be
//!   reached.
//!
//! Every body is `{ "status": "success" | "error", "message": ..., "data": ... }`.
//! Store codes map to HTTP as `NOT_FOUND` → 404, `INVALID_ARGUMENT` → 400,
//! anything else → 500.
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use inventory::gateway::{self, StoreClient};
//!
//! let client = StoreClient::connect_lazy("http://localhost:50051", Duration::from_secs(5))?;
//!
//! // Get the router to compose with other axum routes
//! let app = gateway::router(client.clone());
//!
//! // Or serve directly
//! gateway::serve(client, "0.0.0.0:3000".parse()?).await?;
//! ```

mod client;
mod envelope;
mod error;
mod routes;

pub use client::StoreClient;
pub use envelope::{Envelope, EnvelopeStatus};
pub use error::{GatewayError, INTERNAL_MESSAGE};
pub use routes::{router, serve, serve_with_shutdown, REQUIRED_FIELDS};
