//! HTTP response building
//!
//! Builders for the handful of response shapes the server produces, plus the
//! CORS headers appended to every response.

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::Response;

/// Append the development CORS headers to a response.
///
/// Applied to every response of every kind, including errors and mock
/// bodies, so the demo UI can fetch from any origin it is opened under.
pub fn apply_cors(response: &mut Response<Full<Bytes>>, allow_headers: &str) {
    let headers = response.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_str(allow_headers)
            .unwrap_or_else(|_| HeaderValue::from_static("Content-Type")),
    );
}

/// Append the `Server` header to a response.
pub fn apply_server_name(response: &mut Response<Full<Bytes>>, server_name: &str) {
    response.headers_mut().insert(
        "Server",
        HeaderValue::from_str(server_name)
            .unwrap_or_else(|_| HeaderValue::from_static("CalibDemo")),
    );
}

/// Build a 200 JSON response for a mock fixture body
pub fn build_json_response(body: &'static str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = body.len();
    let bytes = if is_head {
        Bytes::new()
    } else {
        Bytes::from_static(body.as_bytes())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(bytes))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 static file response
pub fn build_static_file_response(
    data: Vec<u8>,
    content_type: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { Bytes::from(data) };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_cors_headers() {
        let mut resp = build_404_response();
        apply_cors(&mut resp, "Content-Type");

        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            resp.headers()["Access-Control-Allow-Methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(resp.headers()["Access-Control-Allow-Headers"], "Content-Type");
    }

    #[test]
    fn test_apply_cors_with_authorization() {
        let mut resp = build_options_response();
        apply_cors(&mut resp, "Content-Type, Authorization");
        assert_eq!(
            resp.headers()["Access-Control-Allow-Headers"],
            "Content-Type, Authorization"
        );
    }

    #[test]
    fn test_apply_server_name() {
        let mut resp = build_json_response(r#"{"status": "OK"}"#, false);
        apply_server_name(&mut resp, "CalibDemo/0.1");
        assert_eq!(resp.headers()["Server"], "CalibDemo/0.1");
    }

    #[test]
    fn test_apply_server_name_rejects_invalid_value() {
        let mut resp = build_404_response();
        apply_server_name(&mut resp, "bad\nname");
        assert_eq!(resp.headers()["Server"], "CalibDemo");
    }

    #[test]
    fn test_json_response() {
        let resp = build_json_response(r#"{"error": "Not found"}"#, false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(resp.headers()["Content-Length"], "22");
    }

    #[test]
    fn test_json_head_has_empty_body_and_length() {
        let resp = build_json_response(r#"{"status": "OK"}"#, true);
        assert_eq!(resp.status(), 200);
        // Content-Length still advertises the full body size
        assert_eq!(resp.headers()["Content-Length"], "16");
    }

    #[test]
    fn test_options_response() {
        let resp = build_options_response();
        assert_eq!(resp.status(), 204);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_static_file_response() {
        let resp =
            build_static_file_response(b"<html></html>".to_vec(), "text/html; charset=utf-8", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "13");
    }
}
