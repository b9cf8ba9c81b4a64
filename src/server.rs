//! Static file server for the public directory
//!
//! Maps any GET path to a file under the served root: query strings are
//! ignored, `/` resolves to `index.html`, content types come from the file
//! extension, and anything missing is a plain-text 404. Paths that would
//! escape the root are rejected outright.

use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::Uri;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::utils::DashboardError;

#[derive(Clone)]
struct AppState {
    public_dir: PathBuf,
}

/// Bind and run the HTTP server until the process exits.
pub async fn serve(config: &Config) -> Result<(), DashboardError> {
    let state = AppState {
        public_dir: config.public_dir.clone(),
    };

    let app = Router::new()
        .fallback(serve_static)
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("server running at http://localhost:{}/", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_static(State(state): State<AppState>, uri: Uri) -> Response {
    match load_file(&state.public_dir, uri.path()).await {
        Some((content_type, bytes)) => ([(CONTENT_TYPE, content_type)], bytes).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "text/plain")],
            "404 Not Found",
        )
            .into_response(),
    }
}

/// Read the file a request path resolves to, with its content type.
async fn load_file(root: &Path, request_path: &str) -> Option<(&'static str, Vec<u8>)> {
    let path = resolve_path(root, request_path)?;
    let bytes = tokio::fs::read(&path).await.ok()?;
    Some((content_type(&path), bytes))
}

/// Map a request path to a file path under the root.
///
/// Strips any query string, maps `/` to `index.html`, and refuses paths
/// containing parent or absolute components so requests cannot reach
/// outside the served directory.
fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let path = request_path.split('?').next().unwrap_or("");
    let trimmed = path.trim_start_matches('/');
    let relative = if trimmed.is_empty() { "index.html" } else { trimmed };

    let relative = Path::new(relative);
    for component in relative.components() {
        match component {
            Component::Normal(_) => {}
            _ => return None,
        }
    }

    Some(root.join(relative))
}

/// Content type derived from the file extension.
fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "html" | "htm" => "text/html",
        "js" => "application/javascript",
        "css" => "text/css",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_basics() {
        let root = Path::new("public");
        assert_eq!(
            resolve_path(root, "/"),
            Some(PathBuf::from("public/index.html"))
        );
        assert_eq!(
            resolve_path(root, "/stock-data.json"),
            Some(PathBuf::from("public/stock-data.json"))
        );
        assert_eq!(
            resolve_path(root, "/images/clear.png"),
            Some(PathBuf::from("public/images/clear.png"))
        );
    }

    #[test]
    fn test_resolve_path_strips_query_string() {
        let root = Path::new("public");
        assert_eq!(
            resolve_path(root, "/weather-graph.png?t=1724400000"),
            Some(PathBuf::from("public/weather-graph.png"))
        );
    }

    #[test]
    fn test_resolve_path_rejects_traversal() {
        let root = Path::new("public");
        assert_eq!(resolve_path(root, "/../secret.txt"), None);
        assert_eq!(resolve_path(root, "/images/../../etc/passwd"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("index.html")), "text/html");
        assert_eq!(content_type(Path::new("main.js")), "application/javascript");
        assert_eq!(
            content_type(Path::new("stock-data.json")),
            "application/json"
        );
        assert_eq!(content_type(Path::new("weather-graph.png")), "image/png");
        assert_eq!(
            content_type(Path::new("mystery.bin")),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_load_file_serves_json_and_404s_missing() {
        let dir = std::env::temp_dir().join("dashboard-server-tests");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("stock-data.json"), b"[]").unwrap();

        let served = load_file(&dir, "/stock-data.json").await;
        let (content_type, bytes) = served.unwrap();
        assert_eq!(content_type, "application/json");
        assert_eq!(bytes, b"[]");

        assert!(load_file(&dir, "/does-not-exist.json").await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
