//! Google 프로필 조회 서비스 모듈

pub mod google_profile_service;

pub use google_profile_service::*;
