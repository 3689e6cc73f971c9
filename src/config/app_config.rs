//! 애플리케이션 전체 설정
//!
//! 시작 시 한 번 생성되어 모든 요청에서 읽기 전용으로 공유됩니다.

use std::env;
use crate::errors::errors::AppResult;
use super::{
    optional_var, AirtableConfig, GoogleOAuthConfig, RateLimitConfig, ServerConfig,
    SessionConfig, DEFAULT_SUCCESS_REDIRECT_URL,
};

/// 서비스 전체 설정 객체
///
/// 프로세스 전역 변수 대신 이 객체를 `web::Data<AppConfig>`로 주입합니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub google: GoogleOAuthConfig,
    pub airtable: AirtableConfig,
    pub session: SessionConfig,
    /// 저장 성공 후 사용자를 보낼 외부 감사 페이지
    pub success_redirect_url: String,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 필수 환경 변수가 누락된 경우
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로 설정을 구성합니다.
    ///
    /// 테스트에서는 `HashMap` 기반 조회 함수를 넘겨 프로세스 환경을 건드리지 않습니다.
    pub fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(lookup),
            rate_limit: RateLimitConfig::from_lookup(lookup),
            google: GoogleOAuthConfig::from_lookup(lookup)?,
            airtable: AirtableConfig::from_lookup(lookup)?,
            session: SessionConfig::from_lookup(lookup)?,
            success_redirect_url: optional_var(
                lookup,
                "SUCCESS_REDIRECT_URL",
                DEFAULT_SUCCESS_REDIRECT_URL,
            ),
        })
    }
}
