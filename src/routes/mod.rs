//! 라우트 설정 모듈
//!
//! 로그인 플로우의 모든 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | 로그인 시작 페이지 |
//! | GET | `/login` | Google 동의 화면으로 리다이렉트 |
//! | GET | `/retry` | 재동의 (권한 누락 시) |
//! | GET | `/authorize` | OAuth 콜백, 리드 저장 |
//! | GET | `/success` | 감사 페이지로 리다이렉트 |
//! | GET | `/health` | 헬스체크 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
}

/// 정적 페이지 라우트를 설정합니다
fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::index)
        .service(handlers::pages::success);
}

/// Google 로그인 라우트를 설정합니다
///
/// Google 콘솔에 등록된 리다이렉트 URI가 `/authorize`를 가리키므로
/// 스코프 없이 루트에 등록합니다.
///
/// # Examples
///
/// ```bash
/// # 로그인 시작 (302 → accounts.google.com)
/// curl -i http://localhost:8080/login
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login)
        .service(handlers::auth::retry)
        .service(handlers::auth::authorize);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "gbp_signin_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
