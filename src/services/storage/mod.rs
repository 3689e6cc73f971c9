//! 리드 저장소 서비스 모듈

pub mod airtable_service;

pub use airtable_service::*;
