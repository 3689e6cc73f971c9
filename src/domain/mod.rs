//! # Domain Layer
//!
//! 로그인 플로우에서 주고받는 데이터의 형태를 정의합니다.
//!
//! ```text
//! domain/
//! ├── dto/       ← 외부 경계의 요청/응답 (콜백 쿼리, Google/Airtable 응답)
//! └── models/    ← 플로우 내부의 값 객체 (사용자 정보, 스코프, 리드 레코드)
//! ```

pub mod dto;
pub mod models;
