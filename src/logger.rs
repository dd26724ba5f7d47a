//! Console logging helpers

use crate::config::Config;
use crate::routing::mock;
use chrono::Local;
use hyper::{Method, Uri};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("==================================================");
    println!("Calibration platform demo server");
    println!("==================================================");
    println!("Listening on: http://{addr}");
    for rule in &config.routes.rewrites {
        println!("  {} -> {}", rule.path, rule.target);
    }
    println!("Mock API endpoints:");
    let prefix = &config.routes.api_prefix;
    println!("  GET http://{addr}{prefix}{}", mock::HEALTH_ENDPOINT);
    println!("  GET http://{addr}{prefix}{}", mock::DASHBOARD_ENDPOINT);
    println!("Document root: {}", config.server.document_root);
    println!("==================================================");
    println!("Press Ctrl+C to stop the server\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!(
        "[{}] {} {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        method,
        uri
    );
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] {status} ({size} bytes)");
}

pub fn log_port_fallback(requested: u16, fallback: u16) {
    eprintln!("[Warning] Port {requested} is already in use, trying port {fallback}");
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Server stopped by user");
}

pub fn log_warning(msg: &str) {
    eprintln!("[Warning] {msg}");
}

pub fn log_error(msg: &str) {
    eprintln!("[Error] {msg}");
}
