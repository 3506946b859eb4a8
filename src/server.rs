use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode, Uri},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::ServeDir;

use crate::logging::{log_event, set_min_level, LogLevel};
use crate::routes::Route;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u16, u16) = (1, 65_535);
const REQUEST_ID_HEADER: &str = "x-request-id";

const SECURITY_HEADERS: [(&str, &str); 5] = [
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("x-xss-protection", "1; mode=block"),
    ("permissions-policy", "camera=(), microphone=(), geolocation=()"),
];

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = parse_env_u16_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_env_non_empty_string("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_env_non_empty_string("LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
struct SiteState {
    index_path: Arc<PathBuf>,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    set_min_level(config.log_level);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        LogLevel::Info,
        "server.listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "distDir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn router(config: &ServerConfig) -> Router {
    let state = SiteState {
        index_path: Arc::new(config.dist_dir.join("index.html")),
    };
    let document = get(serve_document).with_state(state);
    let static_service = ServeDir::new(&config.dist_dir).fallback(document);

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn(decorate_response))
}

/// Client-side routes all boot the same document; unknown paths still get
/// it (so the app can render its 404 page) but with a 404 status.
async fn serve_document(State(state): State<SiteState>, uri: Uri) -> Response {
    let route = Route::resolve(uri.path());
    let status = if route == Route::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    match tokio::fs::read_to_string(state.index_path.as_ref()).await {
        Ok(body) => {
            let mut response = (status, Html(body)).into_response();
            response
                .headers_mut()
                .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
            response
        }
        Err(err) => {
            log_event(
                LogLevel::Info,
                "document.missing",
                json!({
                    "path": state.index_path.display().to_string(),
                    "error": err.to_string(),
                }),
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "bundle not built").into_response()
        }
    }
}

async fn decorate_response(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    let status = response.status();
    let level = if status.is_success() || status.is_redirection() {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    log_event(
        level,
        "request.completed",
        json!({
            "requestId": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "elapsedMs": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn parse_env_u16_with_bounds(name: &str, default: u16, bounds: (u16, u16)) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use tower::ServiceExt;

    const INDEX: &str = "<!doctype html><div id=\"app\"></div>";

    fn test_dist(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "seventyarc-dist-{}-{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("temp dist dir");
        std::fs::write(dir.join("index.html"), INDEX).expect("write index");
        std::fs::write(dir.join("app.js"), "console.log('boot')").expect("write asset");
        dir
    }

    fn test_router(name: &str) -> Router {
        router(&ServerConfig {
            port: DEFAULT_PORT,
            dist_dir: test_dist(name),
            log_level: DEFAULT_LOG_LEVEL,
        })
    }

    async fn get_path(app: Router, path: &str) -> Response {
        app.oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("infallible service")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn client_routes_serve_the_document() {
        let response = get_path(test_router("routes"), "/careers").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, INDEX);
    }

    #[tokio::test]
    async fn unknown_paths_serve_the_document_with_not_found_status() {
        let response = get_path(test_router("missing"), "/does-not-exist").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, INDEX);
    }

    #[tokio::test]
    async fn assets_are_served_from_disk() {
        let response = get_path(test_router("assets"), "/app.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "console.log('boot')");
    }

    #[tokio::test]
    async fn every_response_carries_security_headers_and_request_id() {
        let app = test_router("headers");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/privacy")
                    .header(REQUEST_ID_HEADER, "req-from-client")
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("infallible service");

        let headers = response.headers();
        assert_eq!(headers.get("x-frame-options").expect("header"), "DENY");
        assert_eq!(
            headers.get("permissions-policy").expect("header"),
            "camera=(), microphone=(), geolocation=()"
        );
        assert_eq!(headers.get(REQUEST_ID_HEADER).expect("header"), "req-from-client");
    }

    #[test]
    fn generated_request_ids_are_unique() {
        let first = resolve_request_id(&HeaderMap::new());
        let second = resolve_request_id(&HeaderMap::new());
        assert!(first.starts_with("req-"));
        assert_ne!(first, second);
    }
}
