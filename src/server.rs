//! HTTP server for the localized pages.
//!
//! ## Endpoints
//! - GET /                      - Redirect to the visitor's language
//! - GET /:lang/                - Home page
//! - GET /:lang/works/          - Works page
//! - GET /:lang/blog/           - Blog index
//! - GET /posts/:slug/          - Blog post in the visitor's language
//! - GET /api/content/:lang     - Content table as JSON
//! - GET /health                - Liveness check
//!
//! Everything except `/health` sits under the configured base path. When the
//! default language is hidden from URLs, its pages are also served unprefixed
//! and `/` renders the home page instead of redirecting.

use crate::i18n::{
    browser_locale_from_accept_language, content_for, language_static_paths, resolve_language,
    Language, PageContent,
};
use crate::pages::{render_page, Page, SiteOptions};
use crate::storage::STORAGE_KEY;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub options: Arc<SiteOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(self)).into_response()
    }
}

pub fn create_router(options: SiteOptions) -> Router {
    let base = options.base_path.trim_end_matches('/').to_string();
    let hide_default = !options.show_default_language;
    let state = AppState {
        options: Arc::new(options),
    };

    let mut router = Router::new()
        .route("/health", get(health))
        .route(&format!("{}/", base), get(root))
        .route(&format!("{}/api/content/:lang", base), get(content))
        .route(&format!("{}/:lang/", base), get(home))
        .route(&format!("{}/:lang/works/", base), get(works))
        .route(&format!("{}/:lang/blog/", base), get(blog))
        .route(&format!("{}/posts/:slug/", base), get(post));

    for path in language_static_paths() {
        info!(
            "Serving {} ({}) under {}/{}/",
            path.lang.name(),
            path.lang.code(),
            base,
            path.lang.code()
        );
    }

    if hide_default {
        router = router
            .route(&format!("{}/works/", base), get(default_works))
            .route(&format!("{}/blog/", base), get(default_blog));
    }

    router.with_state(state).layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET / - Redirect to `/<lang>/`, or the default home page when unprefixed
async fn root(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !state.options.show_default_language {
        return page_response(&state, Page::Home, Language::default_language());
    }

    let language = visitor_language(&headers);
    let target = state.options.href(&format!("/{}/", language.code()));
    info!("GET / -> {}", target);
    Redirect::temporary(&target).into_response()
}

async fn home(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    localized_page(&state, Page::Home, &lang)
}

async fn works(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    localized_page(&state, Page::Works, &lang)
}

async fn blog(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    localized_page(&state, Page::Blog, &lang)
}

async fn default_works(State(state): State<AppState>) -> Response {
    page_response(&state, Page::Works, Language::default_language())
}

async fn default_blog(State(state): State<AppState>) -> Response {
    page_response(&state, Page::Blog, Language::default_language())
}

/// GET /posts/:slug/ - Posts are not language-prefixed
async fn post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ErrorResponse> {
    let page = Page::post(&slug).ok_or_else(|| not_found(format!("Unknown post: {}", slug)))?;
    Ok(page_response(&state, page, visitor_language(&headers)))
}

/// GET /api/content/:lang
async fn content(Path(lang): Path<String>) -> Result<Json<&'static PageContent>, ErrorResponse> {
    info!("GET /api/content/{}", lang);
    let language = Language::from_code(&lang).map_err(not_found)?;
    Ok(Json(content_for(language)))
}

fn localized_page(state: &AppState, page: Page, lang: &str) -> Response {
    match Language::from_code(lang) {
        Ok(language) => page_response(state, page, language),
        Err(e) => not_found(e).into_response(),
    }
}

fn page_response(state: &AppState, page: Page, language: Language) -> Response {
    info!("Rendering {} page in {}", page.route(), language.code());
    Html(render_page(page, language, &state.options)).into_response()
}

fn not_found(e: impl std::fmt::Display) -> ErrorResponse {
    ErrorResponse {
        error: e.to_string(),
    }
}

/// Language from the preference cookie, then `Accept-Language`.
fn visitor_language(headers: &HeaderMap) -> Language {
    let stored = cookie_value(headers, STORAGE_KEY);
    let locale = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(browser_locale_from_accept_language);
    resolve_language(stored.as_deref(), locale, None)
}

/// Value of the cookie `name` from the request's `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{HeaderValue, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt; // For oneshot()

    fn options(base: &str, show_default: bool) -> SiteOptions {
        SiteOptions {
            base_path: base.to_string(),
            show_default_language: show_default,
            client_script: None,
        }
    }

    async fn get(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response {
        let mut request = Request::builder().uri(uri);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        app.oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    // ==================== Cookie Parsing ====================

    #[test]
    fn test_cookie_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; portfolio-language=en; other=1"),
        );
        assert_eq!(cookie_value(&headers, STORAGE_KEY).as_deref(), Some("en"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn test_cookie_value_no_header() {
        assert_eq!(cookie_value(&HeaderMap::new(), STORAGE_KEY), None);
    }

    // ==================== Routes ====================

    #[tokio::test]
    async fn test_health() {
        let response = get(create_router(SiteOptions::default()), "/health", &[]).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_root_redirects_to_default() {
        let response = get(create_router(SiteOptions::default()), "/", &[]).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/ja/");
    }

    #[tokio::test]
    async fn test_root_redirect_uses_accept_language() {
        let response = get(
            create_router(SiteOptions::default()),
            "/",
            &[("accept-language", "en-US,en;q=0.9")],
        )
        .await;
        assert_eq!(location(&response), "/en/");
    }

    #[tokio::test]
    async fn test_root_redirect_cookie_beats_accept_language() {
        let response = get(
            create_router(options("/portfolio/", true)),
            "/portfolio/",
            &[
                ("accept-language", "en-US"),
                ("cookie", "portfolio-language=ja"),
            ],
        )
        .await;
        assert_eq!(location(&response), "/portfolio/ja/");
    }

    #[tokio::test]
    async fn test_localized_pages() {
        let app = create_router(SiteOptions::default());

        let response = get(app.clone(), "/en/works/", &[]).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("Low Layers Sapporo"));

        let response = get(app, "/ja/blog/", &[]).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("イベントなどの記録"));
    }

    #[tokio::test]
    async fn test_unsupported_language_is_404() {
        let response = get(create_router(SiteOptions::default()), "/fr/", &[]).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("fr"));
    }

    #[tokio::test]
    async fn test_content_api() {
        let app = create_router(SiteOptions::default());

        let response = get(app.clone(), "/api/content/en", &[]).await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["navigation"]["home"], "Home");

        let response = get(app, "/api/content/de", &[]).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blog_post_follows_visitor_language() {
        let app = create_router(options("/portfolio/", true));

        let response = get(app.clone(), "/portfolio/posts/ns-business-plan-contest/", &[]).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<html lang=\"ja\">"));
        assert!(html.contains("参加してきました！</h1>"));

        let response = get(
            app,
            "/portfolio/posts/ns-business-plan-contest/",
            &[("cookie", "portfolio-language=en")],
        )
        .await;
        let html = body_string(response).await;
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("Business Plan Contest 2024!</h1>"));
    }

    #[tokio::test]
    async fn test_unknown_post_is_404() {
        let response = get(create_router(SiteOptions::default()), "/posts/missing/", &[]).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Unknown post: missing"));
    }

    #[tokio::test]
    async fn test_blog_index_links_resolve() {
        let app = create_router(options("/portfolio/", true));
        let html = body_string(get(app.clone(), "/portfolio/en/blog/", &[]).await).await;
        let href = "/portfolio/posts/ns-business-plan-contest/";
        assert!(html.contains(&format!("href=\"{}\"", href)));

        let response = get(app, href, &[]).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_hidden_default_language_routes() {
        let app = create_router(options("/portfolio/", false));

        let response = get(app.clone(), "/portfolio/", &[("accept-language", "en")]).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("<html lang=\"ja\">"));

        let response = get(app.clone(), "/portfolio/works/", &[]).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(app, "/portfolio/en/blog/", &[]).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
