//! # Configuration Module
//!
//! 서비스 설정을 담당하는 모듈입니다.
//! 환경 변수(및 `.env` 파일)에서 값을 한 번 읽어 [`AppConfig`]를 구성하고,
//! 이후에는 읽기 전용 객체로 `web::Data`를 통해 각 핸들러에 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 전체 설정을 묶는 `AppConfig`
//! - [`auth_config`] - Google OAuth, 세션 쿠키 설정
//! - [`data_config`] - 서버, Rate Limiting, Airtable 설정
//!
//! ## 설계 원칙
//!
//! - 비밀 값은 환경 변수로만 제공되며 코드에 포함하지 않습니다
//! - 필수 값이 없으면 `AppError::ConfigError`로 시작 단계에서 실패합니다
//! - 숫자/불리언 값 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use gbp_signin_service::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```

pub mod app_config;
pub mod auth_config;
pub mod data_config;

pub use app_config::*;
pub use auth_config::*;
pub use data_config::*;

use std::fmt::Display;
use std::str::FromStr;
use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::clean_optional_string;

/// 필수 설정 값을 읽습니다. 값이 없거나 공백이면 `ConfigError`를 반환합니다.
pub(crate) fn required_var<F>(lookup: &F, key: &str) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    clean_optional_string(lookup(key))
        .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}

/// 선택 설정 값을 읽고, 없으면 기본값을 사용합니다.
pub(crate) fn optional_var<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    clean_optional_string(lookup(key)).unwrap_or_else(|| default.to_string())
}

/// 파싱이 필요한 선택 설정 값을 읽습니다.
pub(crate) fn parsed_var<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match clean_optional_string(lookup(key)) {
        None => default,
        Some(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}
