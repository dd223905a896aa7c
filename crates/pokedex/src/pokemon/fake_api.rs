//! In-process stand-in for the PokeAPI endpoints the client uses.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::PokeApiClient;

#[derive(Debug, Clone, Default)]
pub struct FakeApiConfig {
    /// Records 1..=total exist
    pub total: u32,
    /// Detail requests for this id answer HTTP 500
    pub failing_record: Option<u32>,
    /// Detail requests for this id answer a body that isn't a record
    pub malformed_record: Option<u32>,
    /// The list endpoint answers HTTP 503
    pub list_fails: bool,
    /// Per-record delay; lower ids answer later so completion order differs from list order
    pub stagger: Duration,
}

impl FakeApiConfig {
    pub fn with_records(total: u32) -> Self {
        Self {
            total,
            stagger: Duration::from_millis(2),
            ..Default::default()
        }
    }
}

struct FakeState {
    config: FakeApiConfig,
    base_url: String,
    list_requests: Mutex<Vec<usize>>,
    detail_hits: Arc<AtomicUsize>,
}

pub struct FakeApi {
    pub base_url: String,
    pub detail_hits: Arc<AtomicUsize>,
    state: Arc<FakeState>,
}

#[derive(Deserialize)]
struct ListQuery {
    limit: usize,
}

impl FakeApi {
    pub async fn spawn(config: FakeApiConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api/v2", listener.local_addr().unwrap());
        let detail_hits = Arc::new(AtomicUsize::new(0));

        let state = Arc::new(FakeState {
            config,
            base_url: base_url.clone(),
            list_requests: Mutex::new(Vec::new()),
            detail_hits: Arc::clone(&detail_hits),
        });

        let router = Router::new()
            .route("/api/v2/pokemon", get(list_handler))
            .route("/api/v2/pokemon/{id}", get(record_handler))
            .route("/api/v2/pokemon/{id}/", get(record_handler))
            .with_state(Arc::clone(&state));

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url,
            detail_hits,
            state,
        }
    }

    pub fn client(&self) -> PokeApiClient {
        PokeApiClient::new(&self.base_url, Duration::from_secs(5), 8).unwrap()
    }

    /// Limits received by the list endpoint, in arrival order
    pub fn list_requests(&self) -> Vec<usize> {
        self.state.list_requests.lock().unwrap().clone()
    }
}

async fn list_handler(
    State(state): State<Arc<FakeState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, StatusCode> {
    state.list_requests.lock().unwrap().push(query.limit);

    if state.config.list_fails {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let returned = (query.limit as u32).min(state.config.total);
    let results: Vec<Value> = (1..=returned)
        .map(|id| {
            json!({
                "name": record_name(id),
                "url": format!("{}/pokemon/{}/", state.base_url, id),
            })
        })
        .collect();

    Ok(Json(json!({
        "count": state.config.total,
        "next": null,
        "previous": null,
        "results": results,
    })))
}

async fn record_handler(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, StatusCode> {
    state.detail_hits.fetch_add(1, Ordering::SeqCst);

    let remaining = state.config.total.saturating_sub(id);
    tokio::time::sleep(state.config.stagger * remaining).await;

    if id == 0 || id > state.config.total {
        return Err(StatusCode::NOT_FOUND);
    }
    if state.config.failing_record == Some(id) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if state.config.malformed_record == Some(id) {
        return Ok(Json(json!({ "detail": "not a pokemon" })));
    }

    Ok(Json(record_json(id)))
}

fn record_name(id: u32) -> String {
    format!("pokemon-{id}")
}

/// Record in the upstream shape. Odd ids carry a type outside the color table.
pub fn record_json(id: u32) -> Value {
    let second_type = if id % 2 == 1 { "stellar" } else { "poison" };

    json!({
        "id": id,
        "name": record_name(id),
        "height": 7,
        "weight": 69,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": second_type, "url": "https://pokeapi.co/api/v2/type/0/"}}
        ],
        "sprites": {"front_default": format!("https://sprites.example/{id}.png")},
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "defense"}},
            {"base_stat": 65, "effort": 1, "stat": {"name": "special-attack"}},
            {"base_stat": 65, "effort": 0, "stat": {"name": "special-defense"}},
            {"base_stat": 45, "effort": 0, "stat": {"name": "speed"}}
        ]
    })
}
