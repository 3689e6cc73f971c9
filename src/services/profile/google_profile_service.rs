//! # Google 프로필 조회 서비스
//!
//! 스코프 검증을 통과한 액세스 토큰으로 사용자 정보와 비즈니스 계정을 조회합니다.
//! 두 요청 모두 `Authorization: Bearer <token>` 헤더를 사용합니다.

use crate::config::GoogleOAuthConfig;
use crate::domain::dto::oauth::BusinessAccountsResponse;
use crate::domain::models::oauth::GoogleUserInfo;
use crate::errors::errors::{AppError, AppResult, UpstreamEndpoint};
use crate::services::read_json;
use crate::utils::string_utils::mask_secret;

#[derive(Debug, Clone)]
pub struct GoogleProfileService {
    http: reqwest::Client,
    userinfo_uri: String,
    business_accounts_uri: String,
}

impl GoogleProfileService {
    pub fn new(http: reqwest::Client, config: &GoogleOAuthConfig) -> Self {
        Self {
            http,
            userinfo_uri: config.userinfo_uri.clone(),
            business_accounts_uri: config.business_accounts_uri.clone(),
        }
    }

    /// 사용자 정보를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UpstreamFailure` - userinfo 엔드포인트가 2xx가 아닌 응답을 반환한 경우
    pub async fn fetch_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self
            .http
            .get(&self.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("사용자 정보 요청 실패: {}", e)))?;

        let user: GoogleUserInfo = read_json(response, UpstreamEndpoint::UserInfo).await?;
        log::debug!(
            "Google 사용자 정보 조회 완료: {}",
            user.email.as_deref().map(mask_secret).unwrap_or_default()
        );
        Ok(user)
    }

    /// 첫 번째 비즈니스 계정의 식별자를 조회합니다.
    ///
    /// 계정이 없으면 `"No GMB ID found"`를 반환합니다. 2페이지 이후는 조회하지 않습니다.
    pub async fn fetch_business_account_id(&self, access_token: &str) -> AppResult<String> {
        let response = self
            .http
            .get(&self.business_accounts_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("비즈니스 계정 요청 실패: {}", e)))?;

        let accounts: BusinessAccountsResponse =
            read_json(response, UpstreamEndpoint::BusinessAccounts).await?;

        let account_id = accounts.first_account_id();
        log::info!(
            "비즈니스 계정 조회 완료: {} (총 {}개)",
            account_id,
            accounts.accounts.len()
        );
        Ok(account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PinnedEndpoints, BUSINESS_MANAGE_SCOPE, DEFAULT_SCOPES};
    use crate::domain::dto::oauth::NO_BUSINESS_ID;

    fn service(server_url: &str) -> GoogleProfileService {
        let config = GoogleOAuthConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            redirect_uri: "http://localhost:8080/authorize".to_string(),
            discovery_url: format!("{}/.well-known/openid-configuration", server_url),
            auth_uri: format!("{}/auth", server_url),
            token_uri: format!("{}/token", server_url),
            userinfo_uri: format!("{}/oauth2/v2/userinfo", server_url),
            business_accounts_uri: format!("{}/v1/accounts", server_url),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            required_scope: BUSINESS_MANAGE_SCOPE.to_string(),
            pinned: PinnedEndpoints::default(),
        };
        GoogleProfileService::new(reqwest::Client::new(), &config)
    }

    #[actix_web::test]
    async fn test_fetch_user_info_sends_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/oauth2/v2/userinfo")
            .match_header("authorization", "Bearer ya29.token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"42","email":"a@b.com","verified_email":true,"name":"A B"}"#)
            .create_async()
            .await;

        let user = service(&server.url()).fetch_user_info("ya29.token").await.unwrap();

        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert_eq!(user.name.as_deref(), Some("A B"));
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_fetch_user_info_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/oauth2/v2/userinfo")
            .with_status(401)
            .with_body("Request had invalid authentication credentials.")
            .create_async()
            .await;

        match service(&server.url()).fetch_user_info("expired").await {
            Err(AppError::UpstreamFailure { endpoint, status, body }) => {
                assert_eq!(endpoint, UpstreamEndpoint::UserInfo);
                assert_eq!(status, 401);
                assert!(body.contains("invalid authentication"));
            }
            other => panic!("Expected UpstreamFailure, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_fetch_business_account_id_takes_first() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/accounts")
            .match_header("authorization", "Bearer ya29.token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"accounts":[{"name":"accounts/123"},{"name":"accounts/456"}]}"#)
            .create_async()
            .await;

        let id = service(&server.url())
            .fetch_business_account_id("ya29.token")
            .await
            .unwrap();
        assert_eq!(id, "accounts/123");
    }

    #[actix_web::test]
    async fn test_fetch_business_account_id_without_accounts() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/accounts")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let id = service(&server.url())
            .fetch_business_account_id("ya29.token")
            .await
            .unwrap();
        assert_eq!(id, NO_BUSINESS_ID);
    }

    #[actix_web::test]
    async fn test_fetch_business_account_id_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/accounts")
            .with_status(403)
            .with_body(r#"{"error":{"status":"PERMISSION_DENIED"}}"#)
            .create_async()
            .await;

        let result = service(&server.url()).fetch_business_account_id("ya29.token").await;
        assert!(matches!(
            result,
            Err(AppError::UpstreamFailure { endpoint: UpstreamEndpoint::BusinessAccounts, status: 403, .. })
        ));
    }
}
