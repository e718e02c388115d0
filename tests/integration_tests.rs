//! Integration tests for the site-i18n server
//!
//! These tests start the real router on an ephemeral port and drive it over
//! HTTP, using the content shipped in `content/` as the bundle source.

use std::path::PathBuf;
use std::sync::Arc;

use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde_json::Value;

use site_i18n::error::I18nError;
use site_i18n::i18n::{DirectorySource, LocaleRegistry, TranslationLoader};
use site_i18n::server::{build_router, AppState, SiteConfig};

// ==================== Test Helpers ====================

fn content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content")
}

async fn content_loader() -> TranslationLoader<DirectorySource> {
    let source = DirectorySource::open(content_dir())
        .await
        .expect("content directory should open");
    TranslationLoader::for_registry(source, LocaleRegistry::get())
}

/// Start the server on a random port and return its base URL
async fn spawn_server() -> String {
    let state = Arc::new(AppState {
        registry: LocaleRegistry::get(),
        loader: content_loader().await,
        site: SiteConfig::new("https://example.com"),
    });
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server");
    });

    format!("http://{}", addr)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("client")
}

async fn get_json(url: &str) -> (StatusCode, Value) {
    let response = client().get(url).send().await.expect("request");
    let status = response.status();
    let body = response.json::<Value>().await.expect("json body");
    (status, body)
}

// ==================== Content Tests ====================

#[tokio::test]
async fn test_shipped_content_is_complete_for_default_locale() {
    let loader = content_loader().await;
    let site = SiteConfig::new("https://example.com");

    assert!(loader.verify(site.page_names()).is_ok());
}

#[tokio::test]
async fn test_incomplete_content_fails_verification() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let pages = dir.path().join("en").join("pages");
    std::fs::create_dir_all(&pages).expect("create pages dir");
    std::fs::write(pages.join("home.json"), r#"{"hero": {"title": "Hello"}}"#)
        .expect("write home");

    let source = DirectorySource::open(dir.path()).await.expect("open");
    let loader = TranslationLoader::for_registry(source, LocaleRegistry::get());
    let site = SiteConfig::new("https://example.com");

    match loader.verify(site.page_names()) {
        Err(I18nError::TranslationMissing { locale, page }) => {
            assert_eq!(locale, "en");
            assert_eq!(page, "about");
        }
        other => panic!("expected missing page, got {:?}", other),
    }

    std::fs::write(pages.join("about.json"), "{}").expect("write about");
    std::fs::write(pages.join("product.json"), "{}").expect("write product");
    let source = DirectorySource::open(dir.path()).await.expect("open");
    let loader = TranslationLoader::for_registry(source, LocaleRegistry::get());

    // Every routed page exists now; the shared namespace is still missing.
    match loader.verify(site.page_names()) {
        Err(I18nError::TranslationMissing { page, .. }) => assert_eq!(page, "common"),
        other => panic!("expected missing common, got {:?}", other),
    }
}

#[tokio::test]
async fn test_shipped_content_matches_typed_pages() {
    let loader = content_loader().await;

    let home = loader.home_page("en").await.expect("en home");
    assert_eq!(home.features.items.len(), 3);
    let about = loader.about_page("en").await.expect("en about");
    assert!(!about.mission.values.is_empty());
    let product = loader.product_page("en").await.expect("en product");
    assert_eq!(product.cta.read_docs, "Read the docs");

    let es_home = loader.home_page("es").await.expect("es home");
    assert_eq!(es_home.hero.start_trial, "Prueba gratis");
}

#[tokio::test]
async fn test_shipped_content_audit_flags_partial_translation() {
    let loader = content_loader().await;

    let findings = loader.audit().await.expect("audit");

    let pt_home = findings
        .iter()
        .find(|f| f.locale == "pt" && f.page == "home")
        .expect("pt home has fewer feature items");
    assert!(pt_home
        .report
        .warnings
        .iter()
        .any(|w| w.contains("features.items")));
    assert!(findings.iter().all(|f| !f.report.has_errors()));
}

// ==================== Routing Tests ====================

#[tokio::test]
async fn test_root_redirects_to_default_locale() {
    let base = spawn_server().await;

    let response = client().get(format!("{}/", base)).send().await.expect("request");

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()["location"], "/en");
}

#[tokio::test]
async fn test_unprefixed_path_redirect_keeps_query() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/about?ref=nav", base))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()["location"], "/en/about?ref=nav");
}

#[tokio::test]
async fn test_localized_root_serves_home() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/es", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locale"], "es");
    assert_eq!(body["path"], "/");
    assert_eq!(body["page"], "home");
    assert_eq!(body["content"]["hero"]["startTrial"], "Prueba gratis");
    assert_eq!(body["common"]["nav"]["home"], "Inicio");
    assert_eq!(body["alternates"]["fr"], "/fr");
    assert_eq!(body["alternates"]["zh-CN"], "/zh-CN");
}

#[tokio::test]
async fn test_missing_translation_serves_default_bundle() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/fr/about/", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locale"], "fr");
    assert_eq!(body["path"], "/about");
    assert_eq!(body["content"]["hero"]["discordText"], "Chat with us on Discord");
    assert_eq!(body["common"]["signIn"], "Sign in");
    assert_eq!(body["alternates"]["es"], "/es/about");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/es/pricing", base)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// ==================== Translation API Tests ====================

#[tokio::test]
async fn test_translation_api_rejects_unknown_locale() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/api/translations/xx/home", base)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "INVALID_LOCALE");
}

#[tokio::test]
async fn test_translation_api_missing_page() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/api/translations/de/pricing", base)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "TRANSLATION_MISSING");
}

#[tokio::test]
async fn test_translation_api_fallback_is_cached() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/api/translations/de/product", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cta"]["title"], "Ready to build?");

    let (_, again) = get_json(&format!("{}/api/translations/de/product", base)).await;
    assert_eq!(again, body);

    let (_, metrics) = get_json(&format!("{}/api/metrics", base)).await;
    assert_eq!(metrics["fallbacks"], 1);
    assert_eq!(metrics["source_fetches"], 2);
    assert_eq!(metrics["cache_hits"], 1);
}

// ==================== Locale Selector & Sitemap Tests ====================

#[tokio::test]
async fn test_locales_endpoint() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/api/locales?path=/es/about", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locale"], "es");
    assert_eq!(body["default_locale"], "en");

    let options = body["options"].as_array().expect("options array");
    assert_eq!(options.len(), 19);
    let de = options.iter().find(|o| o["code"] == "de").expect("de option");
    assert_eq!(de["href"], "/de/about");
    assert_eq!(de["native_name"], "Deutsch");
    assert_eq!(de["selected"], false);
}

#[tokio::test]
async fn test_sitemap() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/sitemap.xml", base))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));

    let body = response.text().await.expect("body");
    assert!(body.contains("<loc>https://example.com/zh-CN/faq</loc>"));
    assert!(body.contains("hreflang=\"tl\" href=\"https://example.com/tl/faq\""));
    assert_eq!(body.matches("<url>").count(), 19 * 9);
}
