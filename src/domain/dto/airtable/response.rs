use serde::Deserialize;

/// 레코드 생성 응답
#[derive(Debug, Deserialize)]
pub struct AirtableCreatedRecord {
    /// 생성된 레코드 ID (`rec...`)
    pub id: String,
    #[serde(default, rename = "createdTime")]
    pub created_time: Option<String>,
}
