//! # Airtable 저장 서비스
//!
//! 리드 레코드를 Airtable 테이블에 한 건씩 생성합니다.
//!
//! ```text
//! POST {AIRTABLE_API_URL}/v0/{base_id}/{table_name}
//! Authorization: Bearer {AIRTABLE_API_KEY}
//! Content-Type: application/json
//!
//! {"fields": {"Email": ..., "Name": ..., "GoogleBusinessId": ..., ...}}
//! ```
//!
//! 중복 제거는 하지 않습니다. 같은 사용자가 두 번 로그인하면 두 개의 레코드가 생깁니다.

use crate::config::AirtableConfig;
use crate::domain::dto::airtable::{AirtableCreateRequest, AirtableCreatedRecord};
use crate::domain::models::LeadRecord;
use crate::errors::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AirtableService {
    http: reqwest::Client,
    config: AirtableConfig,
}

impl AirtableService {
    pub fn new(http: reqwest::Client, config: AirtableConfig) -> Self {
        Self { http, config }
    }

    /// 리드 레코드를 생성하고 생성된 레코드 ID를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::WriteFailure` - Airtable이 2xx가 아닌 응답을 반환한 경우
    /// * `AppError::ExternalServiceError` - 요청 전송 또는 성공 응답 파싱에 실패한 경우
    pub async fn create_lead(&self, record: &LeadRecord) -> AppResult<AirtableCreatedRecord> {
        let response = self
            .http
            .post(self.config.records_url())
            .bearer_auth(&self.config.api_key)
            .json(&AirtableCreateRequest { fields: record })
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Airtable 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Airtable 저장 실패 ({}): {}", status, body);
            return Err(AppError::WriteFailure {
                status: status.as_u16(),
                body,
            });
        }

        let created = response
            .json::<AirtableCreatedRecord>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Airtable 응답 파싱 실패: {}", e)))?;

        log::info!(
            "Airtable 레코드 생성 완료: {} (createdTime={})",
            created.id,
            created.created_time.as_deref().unwrap_or("unknown")
        );
        Ok(created)
    }
}
