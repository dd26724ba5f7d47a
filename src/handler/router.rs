//! Request dispatch
//!
//! Entry point for HTTP request processing: method validation, path
//! classification, and dispatch to static serving or the mock fixtures.
//! The development CORS headers are appended to every response on the way
//! out, whichever branch produced it.

use crate::config::Config;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use crate::routing::{self, mock, RouteDecision};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Per-request context handed down to the serving functions.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling.
///
/// Generic over the request body: the server never reads it, and tests can
/// pass `Request<()>`.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    let access_log = config.logging.access_log;
    if access_log {
        logger::log_request(method, req.uri());
    }

    let mut response = match check_http_method(method) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path,
                is_head,
                access_log,
            };
            dispatch(&ctx, &config).await
        }
    };

    // Cross-cutting: every response carries the Server and CORS headers
    http::apply_server_name(&mut response, &config.http.server_name);
    http::apply_cors(&mut response, &config.http.cors_allow_headers);

    Ok(response)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Classify the path and dispatch to the matching branch.
async fn dispatch(ctx: &RequestContext<'_>, config: &Config) -> Response<Full<Bytes>> {
    let document_root = config.server.document_root.as_str();

    match routing::classify(&config.routes, ctx.path) {
        RouteDecision::Rewrite(target) => static_files::serve(ctx, document_root, target).await,
        RouteDecision::Fixture(body) => {
            if ctx.access_log {
                logger::log_response(200, body.len());
            }
            http::build_json_response(body, ctx.is_head)
        }
        RouteDecision::ApiNotFound => {
            if ctx.access_log {
                logger::log_response(200, mock::NOT_FOUND_BODY.len());
            }
            http::build_json_response(mock::NOT_FOUND_BODY, ctx.is_head)
        }
        RouteDecision::Static => static_files::serve(ctx, document_root, ctx.path).await,
    }
}
