use crate::config::Config;
use crate::db::init_db;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Fresh SQLite file with the production schema and the fixture dataset.
pub fn init_test_state() -> AppState {
    let path = std::env::temp_dir().join(format!(
        "smartstay_test_{}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));

    let state = AppState::new(Config {
        db_path: path.to_string_lossy().into_owned(),
        ..Config::default()
    });

    init_db(&state.db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    init_db(&state.db, "src/tests/fixtures.sql")
        .unwrap_or_else(|e| panic!("Loading fixtures failed: {e}"));

    state
}

pub fn get_request(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// GET `uri` through the router; panics if the handler returned an error.
pub fn get(state: &AppState, uri: &str) -> Response {
    handle(get_request(uri), state).unwrap_or_else(|e| panic!("GET {uri} failed: {e}"))
}

pub fn body_string(resp: &mut Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut().reader().read_to_end(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

pub fn body_json(resp: &mut Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}

/// Status and decoded JSON body of an API call.
pub fn get_json(state: &AppState, uri: &str) -> (u16, serde_json::Value) {
    let mut resp = get(state, uri);
    (resp.status().as_u16(), body_json(&mut resp))
}

pub fn ids(rows: &serde_json::Value, key: &str) -> Vec<String> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|r| r[key].as_str().unwrap().to_string())
        .collect()
}
