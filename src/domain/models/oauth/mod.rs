//! # Google OAuth 2.0 Domain Models
//!
//! Google OAuth 2.0 / OpenID Connect 플로우에서 쓰이는 모델들입니다.
//!
//! ## Authorization Code Flow
//!
//! ```text
//! 1. 사용자 → /login → Google 인증 URL로 리다이렉트 (scope + prompt=consent)
//! 2. Google → /authorize?code=...&state=... 로 리다이렉트
//! 3. 서버 → code를 access_token으로 교환, 부여된 스코프 확인
//! 4. 서버 → access_token으로 사용자 정보와 비즈니스 계정 조회
//! ```
//!
//! ## 스코프
//!
//! | 스코프 | 용도 |
//! |--------|------|
//! | `openid`, `email`, `profile` | 이메일과 이름 조회 |
//! | `https://www.googleapis.com/auth/business.manage` | 비즈니스 계정 조회 (필수) |

pub mod google_user;
pub mod granted_scopes;
pub mod provider_metadata;

pub use google_user::*;
pub use granted_scopes::*;
pub use provider_metadata::*;
