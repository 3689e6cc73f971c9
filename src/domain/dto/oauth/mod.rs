//! OAuth 관련 DTO
//!
//! - [`request`] - 콜백 쿼리 파라미터
//! - [`response`] - Google 토큰/비즈니스 계정 응답

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
