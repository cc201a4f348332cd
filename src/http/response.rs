//! HTTP response building module
//!
//! Every response, success or error, carries the permissive CORS
//! headers the front-end relies on. Success responses additionally
//! disable client caching so regenerated manifests and segments are
//! always re-fetched.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::Response;

/// Apply the CORS headers shared by all responses.
fn with_cors(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

/// Build the empty 200 answer to a CORS preflight.
pub fn build_options_response() -> Response<Full<Bytes>> {
    with_cors(Response::builder().status(200))
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 response carrying the full file contents with caching
/// disabled.
pub fn build_file_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    with_cors(Response::builder().status(200))
        .header("Content-Type", content_type)
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header("Pragma", "no-cache")
        .header("Expires", "0")
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the 404 page naming the file that was requested.
///
/// Always HTML, whatever extension the request carried, so the page
/// renders without any other asset being reachable.
pub fn build_not_found_response(file_path: &str) -> Response<Full<Bytes>> {
    let body = format!(
        "<html>\n<body style=\"font-family: Arial; padding: 40px;\">\n\
         <h1>404 - File not found</h1>\n\
         <p>The file <strong>{file_path}</strong> does not exist.</p>\n\
         <p>Back to: <a href=\"/\">home page</a></p>\n\
         </body>\n</html>\n"
    );

    with_cors(Response::builder().status(404))
        .header("Content-Type", "text/html")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the 500 answer for a read failure other than a missing file.
pub fn build_server_error_response(kind: std::io::ErrorKind) -> Response<Full<Bytes>> {
    with_cors(Response::builder().status(500))
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(format!("Server error: {kind:?}"))))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
