//! HTTP API implementation

use crate::registry::FruitRegistry;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use orchard_common::{CreateFruitRequest, FruitResponse, ListFruitsResponse, UpdateFruitRequest};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// HTTP front end over a shared fruit registry
pub struct ApiServer {
    registry: Arc<FruitRegistry>,
}

impl ApiServer {
    /// Create a new API server over the given registry
    pub fn new(registry: Arc<FruitRegistry>) -> Self {
        Self { registry }
    }

    /// Create router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/health", get(health_handler))
            .route(
                "/api/fruits",
                get(list_fruits_handler)
                    .post(create_fruit_handler)
                    .delete(remove_all_fruits_handler),
            )
            .route(
                "/api/fruits/:fruit_id",
                get(get_fruit_handler)
                    .put(update_fruit_handler)
                    .delete(remove_fruit_handler),
            )
            .fallback(not_found_handler)
            .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
            .layer(TraceLayer::new_for_http())
            .with_state(self.registry.clone())
    }

    /// Start the API server
    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        info!("Registry API starting on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_handler(State(registry): State<Arc<FruitRegistry>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": orchard_common::VERSION,
        "fruits": registry.len(),
    }))
}

async fn create_fruit_handler(
    State(registry): State<Arc<FruitRegistry>>,
    Json(req): Json<CreateFruitRequest>,
) -> Response {
    match registry.create(req.fruit) {
        Ok(fruit) => (
            StatusCode::CREATED,
            Json(FruitResponse { fruit: Some(fruit) }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

async fn get_fruit_handler(
    State(registry): State<Arc<FruitRegistry>>,
    Path(fruit_id): Path<String>,
) -> impl IntoResponse {
    Json(FruitResponse {
        fruit: registry.get(&fruit_id),
    })
}

async fn list_fruits_handler(State(registry): State<Arc<FruitRegistry>>) -> impl IntoResponse {
    Json(ListFruitsResponse {
        fruits: registry.list(),
    })
}

async fn update_fruit_handler(
    State(registry): State<Arc<FruitRegistry>>,
    Path(fruit_id): Path<String>,
    Json(req): Json<UpdateFruitRequest>,
) -> impl IntoResponse {
    Json(FruitResponse {
        fruit: registry.update(&fruit_id, req.name),
    })
}

async fn remove_fruit_handler(
    State(registry): State<Arc<FruitRegistry>>,
    Path(fruit_id): Path<String>,
) -> impl IntoResponse {
    Json(FruitResponse {
        fruit: registry.remove(&fruit_id),
    })
}

async fn remove_all_fruits_handler(State(registry): State<Arc<FruitRegistry>>) -> StatusCode {
    registry.remove_all();
    StatusCode::NO_CONTENT
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "not found"})),
    )
}
