//! 인증 서비스 모듈
//!
//! Google OAuth 2.0 Authorization Code 플로우를 담당합니다.
//!
//! # Security
//!
//! - CSRF 방지 (OAuth state 매개변수, 세션에 보관)
//! - 클라이언트 시크릿은 토큰 교환 요청 본문에만 포함
//! - 액세스 토큰은 로그에 마스킹되어 출력

pub mod google_auth_service;

pub use google_auth_service::*;
