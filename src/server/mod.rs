//! Read-only JSON query server for the site's pages

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use tower_http::trace::TraceLayer;

use crate::content::{
    markdown, query, ContentCache, ContentError, ContentLoader, Document, ListQuery,
};
use crate::Folio;

/// Server state
struct ServerState {
    folio: Folio,
    loader: ContentLoader,
    cache: Mutex<ContentCache>,
}

impl ServerState {
    fn new(folio: &Folio) -> Self {
        Self {
            folio: folio.clone(),
            loader: folio.loader(),
            cache: Mutex::new(ContentCache::new()),
        }
    }
}

/// Current collection, reloaded only when the content directory changed
async fn documents(state: &Arc<ServerState>) -> Result<Arc<Vec<Document>>, ApiError> {
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || {
        let mut cache = state.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.get_or_load(&state.loader)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?
    .map_err(ApiError::from)
}

/// Errors returned to API clients as `{"error": ...}`
#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Content(ContentError),
    Internal(String),
}

impl From<ContentError> for ApiError {
    fn from(e: ContentError) -> Self {
        Self::Content(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(key) => (StatusCode::NOT_FOUND, format!("Post not found: {}", key)),
            ApiError::Content(e) => {
                tracing::error!("Failed to load content: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ListParams {
    query: Option<String>,
    category: Option<String>,
    visible: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct PostParams {
    #[serde(default)]
    html: bool,
}

#[derive(Debug, Default, Deserialize)]
struct LimitParams {
    limit: Option<usize>,
}

/// Build the API router
pub fn router(folio: &Folio) -> Router {
    let state = Arc::new(ServerState::new(folio));

    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:key", get(get_post))
        .route("/api/posts/:key/related", get(related_posts))
        .route("/api/categories", get(list_categories))
        .route("/api/recent", get(recent_posts))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the query server
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let app = router(folio);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    tracing::info!("Serving {:?}", folio.content_dir);
    println!("{}", banner(folio, ip, port));
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn banner(folio: &Folio, ip: &str, port: u16) -> String {
    format!("{} running at http://{}:{}", folio.config.title, ip, port)
}

/// Blog listing: filters, featured post and the visible window
async fn list_posts(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ListParams>,
) -> Result<Response, ApiError> {
    let docs = documents(&state).await?;

    let listing = &state.folio.config.listing;
    let list_query = ListQuery {
        query: params.query,
        category: params.category.filter(|c| !c.is_empty()),
        visible: params.visible.unwrap_or(listing.initial),
    };

    let view = query::list_view(&docs, &list_query);
    Ok(Json(&view).into_response())
}

async fn get_post(
    State(state): State<Arc<ServerState>>,
    Path(key): Path<String>,
    Query(params): Query<PostParams>,
) -> Result<Response, ApiError> {
    let docs = documents(&state).await?;
    let doc = docs
        .iter()
        .find(|d| d.key == key)
        .ok_or(ApiError::NotFound(key))?;

    let mut value = serde_json::to_value(doc)?;
    if params.html {
        value["html"] = serde_json::Value::String(markdown::render_html(&doc.body));
    }
    Ok(Json(value).into_response())
}

async fn related_posts(
    State(state): State<Arc<ServerState>>,
    Path(key): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Response, ApiError> {
    let docs = documents(&state).await?;
    let doc = docs
        .iter()
        .find(|d| d.key == key)
        .ok_or(ApiError::NotFound(key))?;

    let limit = params.limit.unwrap_or(state.folio.config.related_limit);
    let related = query::find_related(doc, &docs, limit);
    Ok(Json(&related).into_response())
}

async fn list_categories(State(state): State<Arc<ServerState>>) -> Result<Response, ApiError> {
    let docs = documents(&state).await?;
    Ok(Json(query::collect_categories(&docs)).into_response())
}

async fn recent_posts(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<LimitParams>,
) -> Result<Response, ApiError> {
    let docs = documents(&state).await?;
    let limit = params.limit.unwrap_or(state.folio.config.recent_limit);
    Ok(Json(query::recent(&docs, limit)).into_response())
}

async fn fallback_handler() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}
