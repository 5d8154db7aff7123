// src/api.rs
//! JSON endpoints behind the site's pages. Every request does its own
//! fetch-and-normalize pass; nothing is cached between requests.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use validator::ValidationErrors;

use crate::clock::{Clock, SystemClock};
use crate::config::FeedConfig;
use crate::feed::dates::iso;
use crate::feed::error::{FeedError, FeedResult};
use crate::feed::filters::{find_by_id, Page};
use crate::feed::load_events;
use crate::feed::providers::sheets::SheetsSource;
use crate::feed::schema::HeaderSchema;
use crate::feed::types::{EventRecord, FeedSource};
use crate::submission::{EventSubmission, THANK_YOU};
use crate::views::{map_markers, select, select_page, MapMarker, ViewFilter};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn FeedSource>,
    pub clock: Arc<dyn Clock>,
    pub schema: Arc<HeaderSchema>,
    pub page_size: usize,
    pub highlights: usize,
}

impl AppState {
    pub fn new(source: Arc<dyn FeedSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            schema: Arc::new(HeaderSchema::v1()),
            page_size: 15,
            highlights: 3,
        }
    }

    /// Live state: spreadsheet source + host clock.
    pub fn from_config(cfg: &FeedConfig) -> anyhow::Result<Self> {
        let source = SheetsSource::from_config(&cfg.sheet)?;
        Ok(Self {
            source: Arc::new(source),
            clock: Arc::new(SystemClock),
            schema: Arc::new(cfg.header_schema()),
            page_size: cfg.page_size.max(1),
            highlights: cfg.highlights,
        })
    }

    async fn load(&self, today: NaiveDate) -> FeedResult<Vec<EventRecord>> {
        load_events(self.source.as_ref(), &self.schema, today).await
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/events", get(list_events))
        .route("/events/upcoming", get(upcoming_events))
        .route("/events/today", get(today_events))
        .route("/events/{id}", get(event_detail))
        .route("/highlights", get(highlights))
        .route("/map", get(map_view))
        .route("/submissions", post(submit_event))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug)]
pub enum ApiError {
    Feed(FeedError),
    NotFound(u32),
    Invalid(ValidationErrors),
}

impl From<FeedError> for ApiError {
    fn from(e: FeedError) -> Self {
        ApiError::Feed(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Feed(e) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": e.kind().as_str(),
                    "message": e.user_message(),
                    "detail": e.to_string(),
                })),
            )
                .into_response(),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "not_found", "id": id })),
            )
                .into_response(),
            ApiError::Invalid(errs) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "invalid", "fields": errs })),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    date: String,
    page: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

async fn list_events(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Page<EventRecord>>, ApiError> {
    tracing::debug!(target: "api", q = %q.q, date = %q.date, page = ?q.page, "list events");
    let today = state.clock.today();
    let records = state.load(today).await?;
    let filter = ViewFilter::Listing {
        query: q.q,
        date: q.date,
    };
    Ok(Json(select_page(
        records,
        &filter,
        today,
        state.page_size,
        q.page.unwrap_or(1),
    )))
}

async fn upcoming_events(
    State(state): State<AppState>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<EventRecord>>, ApiError> {
    let today = state.clock.today();
    let records = state.load(today).await?;
    Ok(Json(select_page(
        records,
        &ViewFilter::Upcoming,
        today,
        state.page_size,
        q.page.unwrap_or(1),
    )))
}

#[derive(Serialize)]
struct TodayOut {
    today: String,
    events: Vec<EventRecord>,
}

async fn today_events(State(state): State<AppState>) -> Result<Json<TodayOut>, ApiError> {
    let today = state.clock.today();
    let records = state.load(today).await?;
    Ok(Json(TodayOut {
        today: iso(today),
        events: select(records, &ViewFilter::Today, today),
    }))
}

async fn event_detail(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<EventRecord>, ApiError> {
    let today = state.clock.today();
    let records = state.load(today).await?;
    find_by_id(records, id)
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

async fn highlights(State(state): State<AppState>) -> Result<Json<Vec<EventRecord>>, ApiError> {
    let today = state.clock.today();
    let records = state.load(today).await?;
    let mut upcoming = select(records, &ViewFilter::Upcoming, today);
    upcoming.truncate(state.highlights);
    Ok(Json(upcoming))
}

async fn map_view(State(state): State<AppState>) -> Result<Json<Vec<MapMarker>>, ApiError> {
    let today = state.clock.today();
    let records = state.load(today).await?;
    let selected = select(records, &ViewFilter::Map, today);
    Ok(Json(map_markers(&selected)))
}

async fn submit_event(
    Json(body): Json<EventSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    let sub = body.accept().map_err(ApiError::Invalid)?;
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "status": "accepted", "title": sub.title, "message": THANK_YOU })),
    ))
}
