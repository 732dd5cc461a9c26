//! API handlers.
//!
//! One `SessionWorkflow` per session id, held in the shared store. The
//! store lock is short-lived; the workflow itself serializes external
//! calls through its busy flag.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use redress_core::{ExtractedFacts, RedressError};
use redress_engine::SessionWorkflow;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Shared session store keyed by session id
pub type SessionStore = Arc<Mutex<HashMap<Uuid, SessionWorkflow>>>;

pub fn new_store() -> SessionStore {
    Arc::new(Mutex::new(HashMap::new()))
}

fn error_response(err: RedressError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        RedressError::InvalidTransition { .. } => StatusCode::CONFLICT,
        RedressError::Busy => StatusCode::CONFLICT,
        RedressError::SafeguardingBlock { .. } => StatusCode::CONFLICT,
        RedressError::AcknowledgmentRequired => StatusCode::CONFLICT,
        RedressError::MissingFacts | RedressError::MissingPathway => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() })))
}

fn not_found(id: Uuid) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("SESSION/unknown: {}", id) })),
    )
}

fn session_view(id: Uuid, session: &SessionWorkflow) -> Value {
    json!({
        "id": id,
        "status": session.status(),
        "facts": session.facts(),
        "pathway": session.pathway(),
        "deadlines": session.deadlines(),
        "signposting": session.signposting(),
    })
}

pub async fn create_session(State(store): State<SessionStore>) -> (StatusCode, Json<Value>) {
    let id = Uuid::new_v4();
    let mut sessions = store.lock().expect("session store poisoned");
    sessions.insert(id, SessionWorkflow::new());
    tracing::info!(%id, "session created");
    (StatusCode::CREATED, Json(json!({ "id": id, "status": "intake" })))
}

pub async fn get_session(
    State(store): State<SessionStore>,
    Path(id): Path<Uuid>,
) -> (StatusCode, Json<Value>) {
    let sessions = store.lock().expect("session store poisoned");
    match sessions.get(&id) {
        Some(session) => (StatusCode::OK, Json(session_view(id, session))),
        None => not_found(id),
    }
}

pub async fn delete_session(
    State(store): State<SessionStore>,
    Path(id): Path<Uuid>,
) -> (StatusCode, Json<Value>) {
    let mut sessions = store.lock().expect("session store poisoned");
    match sessions.remove(&id) {
        Some(_) => (StatusCode::OK, Json(json!({ "deleted": id }))),
        None => not_found(id),
    }
}

pub async fn submit_facts(
    State(store): State<SessionStore>,
    Path(id): Path<Uuid>,
    Json(facts): Json<ExtractedFacts>,
) -> (StatusCode, Json<Value>) {
    let mut sessions = store.lock().expect("session store poisoned");
    let Some(session) = sessions.get_mut(&id) else {
        return not_found(id);
    };
    match session.submit_facts(facts) {
        Ok(()) => (StatusCode::OK, Json(session_view(id, session))),
        Err(err) => error_response(err),
    }
}

pub async fn acknowledge(
    State(store): State<SessionStore>,
    Path(id): Path<Uuid>,
) -> (StatusCode, Json<Value>) {
    let mut sessions = store.lock().expect("session store poisoned");
    let Some(session) = sessions.get_mut(&id) else {
        return not_found(id);
    };
    session.acknowledge_notice();
    (StatusCode::OK, Json(json!({ "acknowledged": true })))
}

pub async fn confirm_summary(
    State(store): State<SessionStore>,
    Path(id): Path<Uuid>,
) -> (StatusCode, Json<Value>) {
    let mut sessions = store.lock().expect("session store poisoned");
    let Some(session) = sessions.get_mut(&id) else {
        return not_found(id);
    };
    match session.confirm_summary() {
        Ok(_) => (StatusCode::OK, Json(session_view(id, session))),
        Err(err) => {
            // A safeguarding block still moves the session; return the
            // signposting alongside the error
            if let RedressError::SafeguardingBlock { .. } = err {
                let (status, Json(body)) = error_response(err);
                let mut body = body;
                body["signposting"] = json!(session.signposting());
                return (status, Json(body));
            }
            error_response(err)
        }
    }
}

pub async fn request_letter(
    State(store): State<SessionStore>,
    Path(id): Path<Uuid>,
) -> (StatusCode, Json<Value>) {
    let mut sessions = store.lock().expect("session store poisoned");
    let Some(session) = sessions.get_mut(&id) else {
        return not_found(id);
    };
    match session.request_letter() {
        Ok(composed) => (
            StatusCode::OK,
            Json(json!({ "id": id, "data": composed.data, "prompt": composed.prompt })),
        ),
        Err(err) => error_response(err),
    }
}

pub async fn reset_session(
    State(store): State<SessionStore>,
    Path(id): Path<Uuid>,
) -> (StatusCode, Json<Value>) {
    let mut sessions = store.lock().expect("session store poisoned");
    let Some(session) = sessions.get_mut(&id) else {
        return not_found(id);
    };
    session.reset();
    (StatusCode::OK, Json(session_view(id, session)))
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": redress_core::REDRESS_VERSION,
            "catalog": redress_catalog::CATALOG_VERSION,
        })),
    )
}
