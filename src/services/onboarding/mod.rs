//! 로그인 완료 후 리드 수집 플로우 모듈

pub mod onboarding_service;

pub use onboarding_service::*;
