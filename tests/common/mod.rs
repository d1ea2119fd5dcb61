//! tests/common/mod.rs
//! Shared helpers to spawn the app on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;

use axum::{serve, Router};
use hello_server::config::{environment::EnvironmentVariables, state::AppState};
use hello_server::core::server::create_app;
use tokio::net::TcpListener as TokioTcpListener;

/// Configuration built from the given overrides, defaults for the rest.
pub fn env_with(pairs: &[(&str, &str)]) -> EnvironmentVariables {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    EnvironmentVariables::from_map(&vars).expect("Invalid test configuration")
}

/// Spawns the production router on a random port and returns its base URL.
pub fn spawn_app() -> String {
    spawn_router(create_app(AppState::new(env_with(&[]))))
}

/// Spawns any router on a random port and returns its base URL.
pub fn spawn_router(app: Router) -> String {
    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}
