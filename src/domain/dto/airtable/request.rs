use serde::Serialize;
use crate::domain::models::LeadRecord;

/// 레코드 생성 요청 본문
///
/// Airtable은 `{"fields": {...}}` 형태의 본문을 요구합니다.
#[derive(Debug, Serialize)]
pub struct AirtableCreateRequest<'a> {
    pub fields: &'a LeadRecord,
}
