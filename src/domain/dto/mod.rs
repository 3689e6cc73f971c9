//! # Data Transfer Objects (DTO) Module
//!
//! 외부 경계(브라우저 콜백, Google API, Airtable API)에서 주고받는
//! 데이터 구조를 정의합니다. `serde` 어노테이션으로 JSON 필드를 매핑하고,
//! 요청 입력은 `validator`로 검증합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── oauth/      # 콜백 쿼리, 토큰 교환 및 비즈니스 계정 응답
//! └── airtable/   # 레코드 생성 요청/응답
//! ```

pub mod oauth;
pub mod airtable;

pub use oauth::{
    BusinessAccount, BusinessAccountsResponse, GoogleTokenResponse, OAuthCallbackQuery,
    NO_BUSINESS_ID,
};
pub use airtable::{AirtableCreateRequest, AirtableCreatedRecord};
