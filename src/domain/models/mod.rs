//! # Domain Models Module
//!
//! 플로우 안에서 생성되고 같은 요청 안에서 폐기되는 값 객체들입니다.
//! 어떤 모델도 로컬에 저장되지 않습니다.
//!
//! - [`oauth`] - Google 사용자 정보, 부여된 스코프, discovery 메타데이터
//! - [`lead_record`] - Airtable에 기록되는 리드 레코드

pub mod oauth;
pub mod lead_record;

pub use oauth::{GoogleUserInfo, GrantedScopes, ProviderMetadata};
pub use lead_record::LeadRecord;
