//! # 리드 레코드 모델
//!
//! Airtable에 저장되는 한 건의 리드를 표현합니다. 저장 전 모든 필드가
//! 채워져 있어야 하며, 이 불변식은 [`LeadRecord::from_profile`]에서 보장됩니다.

use serde::Serialize;
use validator::Validate;
use crate::domain::models::oauth::GoogleUserInfo;
use crate::errors::errors::{AppError, AppResult};

/// Airtable 테이블의 한 행
///
/// 직렬화 시 필드 이름은 Airtable 컬럼 이름(`Email`, `Name`, ...)을 따릅니다.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct LeadRecord {
    #[serde(rename = "Email")]
    #[validate(email(message = "유효한 이메일 주소가 아닙니다"))]
    pub email: String,

    #[serde(rename = "Name")]
    #[validate(length(min = 1, message = "이름이 비어 있습니다"))]
    pub name: String,

    #[serde(rename = "GoogleBusinessId")]
    #[validate(length(min = 1, message = "비즈니스 계정 ID가 비어 있습니다"))]
    pub google_business_id: String,

    #[serde(rename = "ReviewManagementAllowed")]
    pub review_management_allowed: bool,

    #[serde(rename = "LeadSource")]
    pub lead_source: String,
}

impl LeadRecord {
    pub const LEAD_SOURCE: &'static str = "Google Sign In";

    /// 사용자 프로필과 비즈니스 계정 ID로 레코드를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::IncompleteProfile` - 이메일/이름이 없거나 검증에 실패한 경우
    pub fn from_profile(user: GoogleUserInfo, google_business_id: String) -> AppResult<Self> {
        let email = user
            .email
            .ok_or_else(|| AppError::IncompleteProfile("email이 응답에 없습니다".to_string()))?;
        let name = user
            .name
            .ok_or_else(|| AppError::IncompleteProfile("name이 응답에 없습니다".to_string()))?;

        let record = Self {
            email,
            name,
            google_business_id,
            review_management_allowed: true,
            lead_source: Self::LEAD_SOURCE.to_string(),
        };

        record
            .validate()
            .map_err(|e| AppError::IncompleteProfile(e.to_string()))?;

        Ok(record)
    }
}
