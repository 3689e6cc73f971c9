//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 외부 API(Google OAuth, Google 프로필/비즈니스 API, Airtable)와의 통신을
//! 도메인별 서비스로 분리합니다. 모든 서비스는 시작 시 한 번 생성되어
//! 하나의 `reqwest::Client`를 공유하며, `web::Data`로 핸들러에 주입됩니다.
//!
//! # Modules
//!
//! - [`auth`] - 인증 URL 생성, 토큰 교환, 스코프 검증
//! - [`profile`] - 사용자 정보와 비즈니스 계정 조회
//! - [`storage`] - Airtable 레코드 저장
//! - [`onboarding`] - 위 서비스를 묶어 콜백 플로우를 실행
//!
//! # Examples
//!
//! ```rust,ignore
//! use gbp_signin_service::services::{build_http_client, onboarding::OnboardingService};
//!
//! let http = build_http_client(&config.server)?;
//! let onboarding = OnboardingService::from_config(http, &config).await;
//! ```

pub mod auth;
pub mod profile;
pub mod storage;
pub mod onboarding;

use serde::de::DeserializeOwned;
use crate::config::ServerConfig;
use crate::errors::errors::{AppError, AppResult, ErrorContext, UpstreamEndpoint};

/// 모든 외부 호출에 사용하는 HTTP 클라이언트를 생성합니다.
///
/// 요청마다 `UPSTREAM_TIMEOUT_SECS` 타임아웃이 적용됩니다.
pub fn build_http_client(server: &ServerConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(server.upstream_timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("HTTP 클라이언트 생성 실패")
}

/// 외부 API 응답을 JSON으로 읽습니다.
///
/// 2xx가 아니면 상태 코드와 응답 본문을 담은 `UpstreamFailure`를,
/// 본문 파싱에 실패하면 `ExternalServiceError`를 반환합니다.
pub(crate) async fn read_json<T>(
    response: reqwest::Response,
    endpoint: UpstreamEndpoint,
) -> AppResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} 요청 실패 ({}): {}", endpoint, status, body);
        return Err(AppError::UpstreamFailure {
            endpoint,
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("{} 응답 파싱 실패: {}", endpoint, e)))
}
