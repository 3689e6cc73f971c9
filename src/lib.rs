//! Google 비즈니스 프로필 로그인 서비스
//!
//! Google 계정으로 로그인한 사용자에게 비즈니스 프로필 관리 권한(`business.manage`)을
//! 요청하고, 이메일·이름·첫 번째 비즈니스 계정 ID를 Airtable에 리드로 기록한 뒤
//! 감사 페이지로 이동시키는 작은 웹 서비스입니다.
//!
//! # Features
//!
//! - **Google OAuth 2.0**: 기본 정보와 비즈니스 관리 스코프를 한 번에 요청
//! - **스코프 검증**: 권한이 빠지면 재동의 페이지로 안내
//! - **리드 수집**: 사용자 정보 + 비즈니스 계정 조회 후 Airtable 레코드 생성
//! - **세션**: 암호화된 쿠키 세션에 OAuth state와 액세스 토큰 보관
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /, /login, /retry, /authorize, /success, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 세션, 리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← OAuth, 프로필 조회, Airtable 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Google, Airtable│ ← 외부 API (로컬 저장소 없음)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use gbp_signin_service::config::AppConfig;
//! use gbp_signin_service::services::{build_http_client, onboarding::OnboardingService};
//!
//! let config = AppConfig::from_env()?;
//! let http = build_http_client(&config.server)?;
//! let onboarding = OnboardingService::from_config(http, &config).await;
//! ```

pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
