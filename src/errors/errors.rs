//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 로그인 플로우의 모든 실패 경로를 하나의 `AppError` 열거형으로 표현하고,
//! `actix_web::ResponseError` 구현에서 단 한 번 HTTP 응답으로 변환합니다.
//!
//! ## 응답 형식
//!
//! 대부분의 에러는 다음 JSON 본문으로 응답합니다:
//!
//! ```json
//! { "error": "Error fetching GMB ID", "details": "<upstream response text>" }
//! ```
//!
//! 예외적으로 `MissingScope`는 JSON 대신 재동의(re-consent) 안내 페이지를 렌더링합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, UpstreamEndpoint};
//!
//! if !response.status().is_success() {
//!     return Err(AppError::UpstreamFailure {
//!         endpoint: UpstreamEndpoint::UserInfo,
//!         status: response.status().as_u16(),
//!         body: response.text().await.unwrap_or_default(),
//!     });
//! }
//! ```

use std::fmt;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use thiserror::Error;
use crate::handlers::pages::PERMISSION_REQUIRED_HTML;

/// 호출 대상 외부 엔드포인트
///
/// `UpstreamFailure` 에러가 어느 단계에서 발생했는지 구분하기 위해 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamEndpoint {
    /// OpenID discovery 문서
    Discovery,
    /// 인증 코드 → 토큰 교환
    Token,
    /// 사용자 프로필 조회
    UserInfo,
    /// 비즈니스 계정 목록 조회
    BusinessAccounts,
}

impl UpstreamEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamEndpoint::Discovery => "discovery",
            UpstreamEndpoint::Token => "token",
            UpstreamEndpoint::UserInfo => "userinfo",
            UpstreamEndpoint::BusinessAccounts => "business_accounts",
        }
    }

    /// 클라이언트에게 노출되는 에러 요약 문구
    fn summary(&self) -> &'static str {
        match self {
            UpstreamEndpoint::Discovery => "Failed to fetch provider metadata",
            UpstreamEndpoint::Token => "Failed to exchange authorization code",
            UpstreamEndpoint::UserInfo => "Failed to fetch user info",
            UpstreamEndpoint::BusinessAccounts => "Error fetching GMB ID",
        }
    }
}

impl fmt::Display for UpstreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 로그인 → 콜백 → 조회 → 저장 플로우에서 발생할 수 있는 모든 에러를 포괄합니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 토큰 응답에 액세스 토큰이 없음 (400 Bad Request)
    #[error("Failed to retrieve access token: {0}")]
    InvalidToken(String),

    /// OAuth state 누락 또는 불일치 (400 Bad Request)
    #[error("Invalid OAuth state: {0}")]
    InvalidState(String),

    /// 사용자가 동의를 거부했거나 프로바이더가 에러를 반환 (400 Bad Request)
    #[error("Authorization was not granted: {0}")]
    AuthorizationDenied(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필수 스코프 미부여 (403, 재동의 페이지)
    #[error("Missing required scope: {0}")]
    MissingScope(String),

    /// 외부 API가 실패 상태 코드를 반환 (500 Internal Server Error)
    #[error("{endpoint} request failed with status {status}")]
    UpstreamFailure {
        endpoint: UpstreamEndpoint,
        status: u16,
        body: String,
    },

    /// Airtable 레코드 저장 실패 (500 Internal Server Error)
    #[error("Airtable write failed with status {status}")]
    WriteFailure { status: u16, body: String },

    /// 프로필에 저장에 필요한 필드가 없음 (500 Internal Server Error)
    #[error("Incomplete user profile: {0}")]
    IncompleteProfile(String),

    /// 외부 서비스 통신/파싱 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 세션 쿠키 읽기/쓰기 에러 (500 Internal Server Error)
    #[error("Session error: {0}")]
    SessionError(String),

    /// 설정 누락 또는 파싱 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어갈 요약 문구
    pub fn summary(&self) -> &'static str {
        match self {
            AppError::InvalidToken(_) => "Failed to retrieve access token",
            AppError::InvalidState(_) => "Invalid OAuth state",
            AppError::AuthorizationDenied(_) => "Error during authorization",
            AppError::ValidationError(_) => "Invalid request",
            AppError::MissingScope(_) => "Missing required permission",
            AppError::UpstreamFailure { endpoint, .. } => endpoint.summary(),
            AppError::WriteFailure { .. } => "Error saving to Airtable",
            AppError::IncompleteProfile(_) => "Error processing user data",
            AppError::ExternalServiceError(_) => "Error processing user data",
            AppError::SessionError(_) => "Session error",
            AppError::ConfigError(_) => "Server misconfigured",
            AppError::InternalError(_) => "Internal server error",
        }
    }

    /// 응답 본문의 `details` 필드에 들어갈 상세 내용
    ///
    /// 외부 API 실패의 경우 업스트림 응답 본문을 그대로 전달합니다.
    pub fn details(&self) -> String {
        match self {
            AppError::UpstreamFailure { body, .. } | AppError::WriteFailure { body, .. } => {
                body.clone()
            }
            AppError::InvalidToken(msg)
            | AppError::InvalidState(msg)
            | AppError::AuthorizationDenied(msg)
            | AppError::ValidationError(msg)
            | AppError::MissingScope(msg)
            | AppError::IncompleteProfile(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::SessionError(msg)
            | AppError::ConfigError(msg)
            | AppError::InternalError(msg) => msg.clone(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidToken(_)
            | AppError::InvalidState(_)
            | AppError::AuthorizationDenied(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MissingScope(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 스코프 누락은 재동의 페이지로, 나머지는 `{"error", "details"}` JSON으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if let AppError::MissingScope(_) = self {
            return actix_web::HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(PERMISSION_REQUIRED_HTML);
        }

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.summary(),
                "details": self.details()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
