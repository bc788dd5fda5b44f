// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/web_server.rs
// Version: 1.1.0
//
// This file implements the optional status server for the MonoMine miner. It
// returns the current statistics snapshot as JSON and streams it once a second
// to WebSocket clients.
//
// Tree Location:
// - src/web_server.rs (status server and WebSocket handler)
// - Depends on: axum, tower-http, serde_json, miner/stats

use axum::{
    Json, Router,
    extract::State,
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::Response,
    routing::get,
};
use log::{debug, error, info};
use monomine_miner::miner::stats::{MinerStats, StatsSnapshot};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

const LOG_TARGET: &str = "monomine::web_server";

const PUSH_INTERVAL: Duration = Duration::from_secs(1);

/// Serve the status endpoints on `port` until the process exits
pub async fn start_web_server(stats: Arc<MinerStats>, port: u16) {
    let app = Router::new()
        .route("/", get(status_handler))
        .route("/ws", get(websocket_handler))
        .layer(CorsLayer::permissive())
        .with_state(stats);

    let address = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(target: LOG_TARGET, "❌ Failed to bind web server to port {}: {}", port, e);
            error!(target: LOG_TARGET, "💡 Make sure port {} is not already in use", port);
            return;
        }
    };

    info!(target: LOG_TARGET, "🌐 Status JSON at: http://localhost:{}", port);
    info!(target: LOG_TARGET, "🔗 WebSocket endpoint: ws://localhost:{}/ws", port);

    if let Err(e) = axum::serve(listener, app).await {
        error!(target: LOG_TARGET, "❌ Web server error: {}", e);
    }
}

async fn status_handler(State(stats): State<Arc<MinerStats>>) -> Json<StatsSnapshot> {
    Json(stats.to_websocket_data())
}

async fn websocket_handler(ws: WebSocketUpgrade, State(stats): State<Arc<MinerStats>>) -> Response {
    debug!(target: LOG_TARGET, "🔌 WebSocket connection request received");
    ws.on_upgrade(move |socket| handle_socket(socket, stats))
}

async fn handle_socket(mut socket: WebSocket, stats: Arc<MinerStats>) {
    info!(target: LOG_TARGET, "✅ WebSocket client connected");

    loop {
        let json = match serde_json::to_string(&stats.to_websocket_data()) {
            Ok(json) => json,
            Err(e) => {
                error!(target: LOG_TARGET, "❌ Failed to serialize miner stats: {}", e);
                break;
            }
        };

        if let Err(e) = socket.send(Message::Text(json)).await {
            debug!(target: LOG_TARGET, "🔌 WebSocket client disconnected: {}", e);
            break;
        }

        tokio::time::sleep(PUSH_INTERVAL).await;
    }

    info!(target: LOG_TARGET, "🔌 WebSocket connection closed");
}

// Changelog:
// - v1.1.0: JSON status at "/" with permissive CORS; port is configurable.
// - v1.0.0: WebSocket streaming of miner statistics.
