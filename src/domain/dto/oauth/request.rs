//! OAuth 콜백 요청 DTO
//!
//! Google이 `/authorize`로 리다이렉트할 때 전달하는 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의를 거부하면 Google은 `code` 없이 `error`와 `state`만 전달하므로
/// 모든 필드는 선택적입니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(length(min = 1, message = "Authorization code가 비어 있습니다"))]
    pub code: Option<String>,

    #[validate(length(min = 1, message = "State가 비어 있습니다"))]
    pub state: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}
