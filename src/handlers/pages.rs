//! 정적 페이지 핸들러
//!
//! 로그인 시작 페이지와 재동의 안내 페이지는 템플릿 엔진 없이
//! 빌드 시점에 바이너리에 포함됩니다.

use actix_web::http::header::{self, ContentType};
use actix_web::{get, web, HttpResponse};
use crate::config::AppConfig;

/// `GET /` 로그인 시작 페이지
pub const SIGNIN_HTML: &str = include_str!("../../templates/signin.html");

/// 비즈니스 관리 권한이 빠졌을 때 보여주는 재동의 페이지 (`/retry` 링크 포함)
pub const PERMISSION_REQUIRED_HTML: &str = include_str!("../../templates/permission_required.html");

/// 로그인 시작 페이지
///
/// # Endpoint
/// `GET /`
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(SIGNIN_HTML)
}

/// 리드 저장이 끝난 뒤 외부 감사 페이지로 이동합니다.
///
/// # Endpoint
/// `GET /success`
#[get("/success")]
pub async fn success(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, config.success_redirect_url.as_str()))
        .finish()
}
