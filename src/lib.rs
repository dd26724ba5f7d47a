//! Local development server for the calibration platform demo UI.
//!
//! Serves the demo's static HTML/asset files from a document root, rewrites
//! a few well-known paths (`/`, `/dashboard`) to specific documents, and
//! answers the demo's API paths with canned JSON fixtures so the UI loads
//! without a real backend.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
