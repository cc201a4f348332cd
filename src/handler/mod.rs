//! Request handler module
//!
//! Answers CORS preflights and maps every other request onto the static
//! file pipeline. There is no method whitelist: any non-OPTIONS verb on
//! an existing file serves that file's contents.

pub mod static_files;

use crate::config::Config;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use static_files::Loaded;

/// Main entry point for HTTP request handling.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let url = request_url(&req);
    let access_log = config.logging.access_log;

    if access_log {
        logger::log_request(method, url);
    }

    // Preflight is answered before any path resolution or file access.
    if *method == Method::OPTIONS {
        return Ok(http::build_options_response());
    }

    let file_path = static_files::resolve_path(url, &config.files.root, &config.files.index);

    let response = match static_files::load(&file_path, &config.files.root).await {
        Loaded::File { content, content_type } => {
            if access_log {
                logger::log_response(content.len());
            }
            http::build_file_response(content, content_type)
        }
        Loaded::NotFound => {
            logger::log_not_found(&file_path);
            http::build_not_found_response(&file_path)
        }
        Loaded::Error(kind) => {
            logger::log_server_error(kind);
            http::build_server_error_response(kind)
        }
    };

    Ok(response)
}

/// The request target as sent, query string included.
fn request_url<B>(req: &Request<B>) -> &str {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.uri().path(), |pq| pq.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FilesConfig, LoggingConfig, ServerConfig};
    use http_body_util::BodyExt;

    fn test_config(root: &str) -> Arc<Config> {
        Arc::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            logging: LoggingConfig { access_log: false },
            files: FilesConfig {
                root: root.to_string(),
                index: "/index.html".to_string(),
                pages: Vec::new(),
            },
        })
    }

    fn request(method: Method, target: &str) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(target)
            .body(())
            .unwrap()
    }

    #[tokio::test]
    async fn test_options_short_circuits_without_file_access() {
        // Root points nowhere; a preflight must still succeed.
        let config = test_config("/nonexistent-root");
        let response = handle_request(request(Method::OPTIONS, "/anything"), config)
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert!(response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .is_empty());
    }

    #[tokio::test]
    async fn test_post_falls_through_to_file_serving() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), "<html/>").unwrap();
        let config = test_config(&dir.path().to_string_lossy());

        let response = handle_request(request(Method::POST, "/page.html"), config)
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Type").unwrap(), "text/html");
    }

    #[tokio::test]
    async fn test_missing_file_is_a_404_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir.path().to_string_lossy());

        let response = handle_request(request(Method::GET, "/missing.html"), config)
            .await
            .unwrap();
        assert_eq!(response.status(), 404);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("/missing.html"));
    }
}
