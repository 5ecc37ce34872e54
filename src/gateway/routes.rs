use std::future::Future;
use std::net::SocketAddr;

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::product::ProductInput;

use super::client::StoreClient;
use super::envelope::Envelope;
use super::error::GatewayError;

/// Fields a create request must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "quantity", "price"];

/// Build the gateway `Router` over the given store client.
pub fn router(client: StoreClient) -> Router {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/products", get(list_products).fallback(method_not_allowed))
        .route("/product", post(create_product).fallback(method_not_allowed))
        .route(
            "/product/:id",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(method_not_allowed),
        )
        .fallback(unknown_route)
        .layer(middleware::from_fn(log_request))
        .with_state(client)
}

/// Serve the gateway over HTTP at the given address.
pub async fn serve(client: StoreClient, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(client)).await
}

/// Like [`serve`], stopping gracefully once `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    client: StoreClient,
    addr: SocketAddr,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown)
        .await
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// JSON body for create and update. Absent fields take their zero value and
/// are left for the store to reject.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProductBody {
    name: String,
    quantity: i32,
    price: f64,
    photo: String,
    author: String,
}

impl From<ProductBody> for ProductInput {
    fn from(body: ProductBody) -> Self {
        ProductInput {
            name: body.name,
            quantity: body.quantity,
            price: body.price,
            photo: body.photo,
            author: body.author,
        }
    }
}

/// A missing or unparseable body is treated as an empty object.
fn body_or_empty(body: Option<Json<Value>>) -> Value {
    body.map(|Json(value)| value).unwrap_or_else(|| json!({}))
}

fn parse_body(body: Value) -> Result<ProductInput, GatewayError> {
    serde_json::from_value::<ProductBody>(body)
        .map(ProductInput::from)
        .map_err(|e| GatewayError::InvalidArgument(format!("invalid product fields: {e}")))
}

fn missing_fields(body: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|field| body.get(field).is_none())
        .collect()
}

/// A path segment that is not a positive integer cannot name a product.
fn parse_id(raw: &str) -> Result<u64, GatewayError> {
    raw.parse::<u64>()
        .map_err(|_| GatewayError::NotFound(format!("product {raw} not found")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /products`
async fn list_products(State(client): State<StoreClient>) -> Response {
    Envelope::from_result(client.list().await, StatusCode::OK, "")
}

/// `GET /product/:id`
async fn get_product(State(client): State<StoreClient>, Path(id): Path<String>) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => client.get(id).await,
        Err(e) => Err(e),
    };
    Envelope::from_result(result, StatusCode::OK, "")
}

/// `POST /product` — required fields are checked before the store is called.
async fn create_product(
    State(client): State<StoreClient>,
    body: Option<Json<Value>>,
) -> Response {
    let body = body_or_empty(body);

    let missing = missing_fields(&body);
    if !missing.is_empty() {
        return GatewayError::InvalidArgument(format!(
            "missing required fields: {}",
            missing.join(", ")
        ))
        .into_response();
    }

    let input = match parse_body(body) {
        Ok(input) => input,
        Err(e) => return e.into_response(),
    };

    let result = client
        .create(input)
        .await
        .map(|product| json!({ "id": product.id }));
    Envelope::from_result(result, StatusCode::CREATED, "product created")
}

/// `PUT /product/:id`
async fn update_product(
    State(client): State<StoreClient>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let input = match parse_body(body_or_empty(body)) {
        Ok(input) => input,
        Err(e) => return e.into_response(),
    };

    Envelope::from_result(client.update(id, input).await, StatusCode::OK, "product updated")
}

/// `DELETE /product/:id`
async fn delete_product(State(client): State<StoreClient>, Path(id): Path<String>) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => client.delete(id).await,
        Err(e) => Err(e),
    };
    Envelope::from_result(result, StatusCode::OK, "product deleted")
}

/// `GET /health` — healthy whenever the store answers, even with an error.
async fn health(State(client): State<StoreClient>) -> Response {
    match client.ping().await {
        Err(e) if e.is_transport() => {
            warn!(error = %e, "store unreachable");
            let envelope = Envelope {
                data: Some(json!({ "status": "unhealthy" })),
                ..Envelope::error("unhealthy")
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(envelope)).into_response()
        }
        _ => {
            let envelope = Envelope::success(Some(json!({ "status": "healthy" })), "healthy");
            (StatusCode::OK, Json(envelope)).into_response()
        }
    }
}

async fn unknown_route() -> Response {
    GatewayError::NotFound("route not found".into()).into_response()
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::error("method not allowed")),
    )
        .into_response()
}

async fn log_request(request: Request, next: Next) -> Response {
    info!(method = %request.method(), path = %request.uri().path(), "request received");
    next.run(request).await
}
