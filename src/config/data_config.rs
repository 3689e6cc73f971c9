//! 서버 및 데이터 저장소 설정 관리 모듈
//!
//! HTTP 서버 바인딩, Rate Limiting, 외부 HTTP 호출 타임아웃,
//! 그리고 리드 레코드를 저장하는 Airtable 설정을 관리합니다.

use std::fmt;
use std::time::Duration;
use crate::errors::errors::AppResult;
use crate::utils::string_utils::mask_secret;
use super::{optional_var, parsed_var, required_var};

pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com";
pub const DEFAULT_SUCCESS_REDIRECT_URL: &str = "https://www.fiveoutta5.com/thank-you";

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 호스트 주소. 기본값: "0.0.0.0"
    pub host: String,
    /// 포트 번호. 기본값: 8080
    pub port: u16,
    /// 외부 API 호출 타임아웃. 기본값: 30초
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: optional_var(lookup, "HOST", "0.0.0.0"),
            port: parsed_var(lookup, "PORT", 8080),
            upstream_timeout: Duration::from_secs(parsed_var(lookup, "UPSTREAM_TIMEOUT_SECS", 30)),
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            per_second: parsed_var(lookup, "RATE_LIMIT_PER_SECOND", 100),
            burst_size: parsed_var(lookup, "RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// Airtable 저장소 설정
///
/// 리드 레코드는 `{api_url}/v0/{base_id}/{table_name}` 으로 POST 됩니다.
///
/// ```bash
/// export AIRTABLE_API_KEY="pat..."
/// export AIRTABLE_BASE_ID="appXXXXXXXXXXXXXX"
/// export AIRTABLE_TABLE_NAME="Leads"
/// ```
#[derive(Clone)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table_name: String,
    pub api_url: String,
}

impl AirtableConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api_key: required_var(lookup, "AIRTABLE_API_KEY")?,
            base_id: required_var(lookup, "AIRTABLE_BASE_ID")?,
            table_name: required_var(lookup, "AIRTABLE_TABLE_NAME")?,
            api_url: optional_var(lookup, "AIRTABLE_API_URL", DEFAULT_AIRTABLE_API_URL),
        })
    }

    /// 레코드 생성 엔드포인트 URL
    ///
    /// 테이블 이름에 공백 등이 있을 수 있으므로 URL 인코딩합니다.
    pub fn records_url(&self) -> String {
        format!(
            "{}/v0/{}/{}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(&self.base_id),
            urlencoding::encode(&self.table_name)
        )
    }
}

impl fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .field("api_url", &self.api_url)
            .finish()
    }
}
