//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 파싱, 세션 처리, 리다이렉트만 담당하고
//! 외부 API 호출은 모두 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser                                      
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 페이지, 로그인, 콜백        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - Google OAuth, 프로필, Airtable      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Domain - DTO, 값 객체                          ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, `?`로 전파된 에러는
//! `AppError`의 `ResponseError` 구현에서 JSON 또는 재동의 페이지로 변환됩니다.
//!
//! ## 모듈 구성
//!
//! - **`pages`**: 정적 페이지
//!   - 로그인 시작 페이지 (`GET /`)
//!   - 감사 페이지 리다이렉트 (`GET /success`)
//! - **`auth`**: Google 로그인
//!   - 로그인 시작 (`GET /login`)
//!   - 재동의 (`GET /retry`)
//!   - OAuth 콜백 (`GET /authorize`)

pub mod pages;
pub mod auth;
