//! 에러 타입 모듈
//!
//! [`errors::AppError`]와 HTTP 응답 변환 로직을 제공합니다.

pub mod errors;

pub use errors::*;
