//! Companion server: string-table mount plus the API routes the client
//! tests drive. Failure responses carry a machine-readable `reason` code;
//! the string tables under `strings/` map those codes to display messages
//! per language.

use std::path::{Path, PathBuf};

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

#[derive(Debug, Deserialize)]
pub struct NameInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct Reason {
    pub reason: String,
}

fn reject(status: StatusCode, reason: &str) -> (StatusCode, Json<Reason>) {
    (
        status,
        Json(Reason {
            reason: reason.to_string(),
        }),
    )
}

fn reply(data: &str) -> Json<Reply> {
    Json(Reply {
        data: data.to_string(),
    })
}

/// Directory the string tables ship in.
pub fn strings_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("strings")
}

pub fn app<P: AsRef<Path>>(strings_dir: P) -> Router {
    Router::new()
        .route("/welcome", post(welcome))
        .route("/iq", post(iq))
        .route("/admin", get(admin))
        .route(
            "/profile",
            put(replace_profile).patch(rename_profile).delete(remove_profile),
        )
        .route("/plain", get(plain))
        .nest_service("/strings", ServeDir::new(strings_dir))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app(strings_dir())).await
}

async fn welcome(
    Json(input): Json<NameInput>,
) -> Result<Json<Reply>, (StatusCode, Json<Reason>)> {
    if input.name == "smile" {
        return Err(reject(StatusCode::BAD_REQUEST, "SO_BEAUTIFUL_ERROR"));
    }
    Ok(reply("hello!"))
}

async fn iq(Json(input): Json<NameInput>) -> Result<Json<Reply>, (StatusCode, Json<Reason>)> {
    if input.name == "smile" {
        return Err(reject(StatusCode::BAD_REQUEST, "I'M_FOOL_ERROR"));
    }
    Ok(reply("wow!"))
}

async fn admin(
    Query(input): Query<NameInput>,
) -> Result<Json<Reply>, (StatusCode, Json<Reason>)> {
    if input.name != "root" {
        return Err(reject(StatusCode::FORBIDDEN, "NOT_ADMIN_ERROR"));
    }
    Ok(reply("welcome back!"))
}

async fn replace_profile(Json(input): Json<NameInput>) -> Json<Reply> {
    reply(&format!("replaced: {}", input.name))
}

async fn rename_profile(Json(input): Json<NameInput>) -> Json<Reply> {
    reply(&format!("renamed: {}", input.name))
}

async fn remove_profile(Json(input): Json<NameInput>) -> Json<Reply> {
    reply(&format!("removed: {}", input.name))
}

// Deliberately not JSON; clients must treat this as an unknown failure.
async fn plain() -> &'static str {
    "pong"
}
