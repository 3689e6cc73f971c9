//! Google 로그인 HTTP 핸들러
//!
//! 로그인 시작(`/login`, `/retry`)과 OAuth 콜백(`/authorize`)을 처리합니다.
//! OAuth state와 액세스 토큰은 암호화된 쿠키 세션에 보관됩니다.
//!
//! # Endpoints
//!
//! - `GET /login` - state 생성 후 Google 동의 화면으로 리다이렉트
//! - `GET /retry` - 권한이 빠졌을 때의 재동의 진입점 (`/login`과 동일)
//! - `GET /authorize` - 콜백 처리 후 `/success`로 리다이렉트
use actix_session::Session;
use actix_web::http::header;
use actix_web::{get, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::oauth::OAuthCallbackQuery;
use crate::errors::errors::{AppError, AppResult};
use crate::services::onboarding::OnboardingService;
use crate::utils::string_utils::mask_secret;

/// 세션에 저장되는 OAuth state 키
pub const OAUTH_STATE_KEY: &str = "oauth_state";
/// 세션에 저장되는 Google 액세스 토큰 키
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Google 로그인 시작 핸들러
///
/// # Endpoint
/// `GET /login`
#[get("/login")]
pub async fn login(
    session: Session,
    onboarding: web::Data<OnboardingService>,
) -> Result<HttpResponse, AppError> {
    redirect_to_consent(&session, &onboarding)
}

/// 재동의 핸들러
///
/// 동의 화면에서 비즈니스 관리 권한을 체크하지 않은 사용자가 다시 시도할 때 사용합니다.
///
/// # Endpoint
/// `GET /retry`
#[get("/retry")]
pub async fn retry(
    session: Session,
    onboarding: web::Data<OnboardingService>,
) -> Result<HttpResponse, AppError> {
    log::info!("권한 재요청");
    redirect_to_consent(&session, &onboarding)
}

/// Google OAuth 콜백 처리 핸들러
///
/// 토큰 교환 → 스코프 확인 → 프로필/비즈니스 계정 조회 → Airtable 저장 순서로 처리합니다.
///
/// # Endpoint
/// `GET /authorize?code={code}&state={state}`
#[get("/authorize")]
pub async fn authorize(
    query: web::Query<OAuthCallbackQuery>,
    session: Session,
    onboarding: web::Data<OnboardingService>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    // 사용자가 거부했거나 프로바이더 에러
    if let Some(error) = &query.error {
        session.remove(OAUTH_STATE_KEY);
        let description = query.error_description.as_deref().unwrap_or(error);
        log::warn!("Google OAuth 에러: {} - {}", error, description);
        return Err(AppError::AuthorizationDenied(description.to_string()));
    }

    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    verify_state(&session, query.state.as_deref())?;

    let code = query
        .code
        .ok_or_else(|| AppError::ValidationError("Authorization code가 없습니다".to_string()))?;

    let token = onboarding.authorize(&code).await?;

    session
        .insert(ACCESS_TOKEN_KEY, &token.access_token)
        .map_err(|e| AppError::SessionError(e.to_string()))?;

    let lead = onboarding.capture_lead(&token).await?;
    log::info!(
        "리드 저장 완료: {} ({}) → {}",
        mask_secret(&lead.record.email),
        lead.record.google_business_id,
        lead.airtable_id
    );

    Ok(redirect("/success"))
}

fn redirect_to_consent(session: &Session, onboarding: &OnboardingService) -> AppResult<HttpResponse> {
    let state = onboarding.auth().generate_oauth_state();
    session
        .insert(OAUTH_STATE_KEY, &state)
        .map_err(|e| AppError::SessionError(e.to_string()))?;

    Ok(redirect(&onboarding.auth().authorization_url(&state)))
}

/// 콜백의 state가 세션에 저장된 값과 같은지 확인합니다. state는 한 번만 사용됩니다.
fn verify_state(session: &Session, received: Option<&str>) -> AppResult<()> {
    let expected = session
        .get::<String>(OAUTH_STATE_KEY)
        .map_err(|e| AppError::SessionError(e.to_string()))?;
    session.remove(OAUTH_STATE_KEY);

    match (expected.as_deref(), received) {
        (Some(expected), Some(received)) if expected == received => Ok(()),
        (None, _) => Err(AppError::InvalidState("세션에 저장된 state가 없습니다".to_string())),
        _ => Err(AppError::InvalidState("state가 일치하지 않습니다".to_string())),
    }
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use actix_session::storage::CookieSessionStore;
    use actix_session::SessionMiddleware;
    use actix_web::cookie::{Cookie, Key};
    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use mockito::{Matcher, ServerGuard};
    use crate::config::AppConfig;
    use crate::services::auth::GoogleAuthService;
    use crate::services::profile::GoogleProfileService;
    use crate::services::storage::AirtableService;

    const FULL_SCOPE: &str = "openid email profile https://www.googleapis.com/auth/business.manage";

    fn test_config(server_url: &str) -> AppConfig {
        let token_uri = format!("{}/token", server_url);
        let userinfo_uri = format!("{}/oauth2/v2/userinfo", server_url);
        let accounts_uri = format!("{}/v1/accounts", server_url);
        let env: HashMap<&str, &str> = HashMap::from([
            ("GOOGLE_CLIENT_ID", "client-id"),
            ("GOOGLE_CLIENT_SECRET", "client-secret"),
            ("GOOGLE_REDIRECT_URI", "http://localhost:8080/authorize"),
            ("GOOGLE_AUTH_URI", "https://accounts.test/auth"),
            ("GOOGLE_TOKEN_URI", token_uri.as_str()),
            ("GOOGLE_USERINFO_URI", userinfo_uri.as_str()),
            ("GOOGLE_BUSINESS_ACCOUNTS_URI", accounts_uri.as_str()),
            ("AIRTABLE_API_KEY", "key-test"),
            ("AIRTABLE_BASE_ID", "appBase"),
            ("AIRTABLE_TABLE_NAME", "Leads"),
            ("AIRTABLE_API_URL", server_url),
            ("SESSION_SECRET", "a-session-secret-that-is-long-enough"),
            ("SESSION_COOKIE_SECURE", "false"),
            ("SUCCESS_REDIRECT_URL", "https://example.com/thank-you"),
        ]);
        AppConfig::from_lookup(&|key: &str| env.get(key).map(|v| v.to_string())).unwrap()
    }

    fn onboarding(config: &AppConfig) -> OnboardingService {
        let http = reqwest::Client::new();
        OnboardingService::new(
            GoogleAuthService::new(http.clone(), config.google.clone()),
            GoogleProfileService::new(http.clone(), &config.google),
            AirtableService::new(http, config.airtable.clone()),
        )
    }

    macro_rules! init_app {
        ($config:expr) => {{
            let config = $config;
            test::init_service(
                App::new()
                    .wrap(
                        SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                            .cookie_secure(false)
                            .build(),
                    )
                    .app_data(web::Data::new(onboarding(&config)))
                    .app_data(web::Data::new(config))
                    .configure(crate::routes::configure_all_routes),
            )
            .await
        }};
    }

    fn location<B>(resp: &ServiceResponse<B>) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
        resp.response()
            .cookies()
            .next()
            .expect("session cookie")
            .into_owned()
    }

    fn state_from(url: &str) -> String {
        url.split('&')
            .find_map(|pair| pair.strip_prefix("state="))
            .expect("state parameter")
            .to_string()
    }

    async fn mock_token(server: &mut ServerGuard, scope: &str) {
        server
            .mock("POST", "/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"access_token":"ya29.token","token_type":"Bearer","scope":"{}"}}"#, scope))
            .create_async()
            .await;
    }

    async fn mock_profile(server: &mut ServerGuard, accounts_body: &str) {
        server
            .mock("GET", "/oauth2/v2/userinfo")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"1","email":"a@b.com","verified_email":true,"name":"A B"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/v1/accounts")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(accounts_body.to_string())
            .create_async()
            .await;
    }

    #[actix_web::test]
    async fn test_login_redirects_to_consent_screen() {
        let app = init_app!(test_config("http://127.0.0.1:1"));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        let url = location(&resp);
        assert!(url.starts_with("https://accounts.test/auth?"));
        assert!(url.contains("prompt=consent"));
        assert!(url.contains("business.manage"));
        assert!(!state_from(&url).is_empty());
    }

    #[actix_web::test]
    async fn test_full_sign_in_writes_lead_and_redirects() {
        let mut server = mockito::Server::new_async().await;
        mock_token(&mut server, FULL_SCOPE).await;
        mock_profile(&mut server, r#"{"accounts":[{"name":"accounts/123"}]}"#).await;
        let write = server
            .mock("POST", "/v0/appBase/Leads")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "fields": {
                    "Email": "a@b.com",
                    "Name": "A B",
                    "GoogleBusinessId": "accounts/123",
                    "ReviewManagementAllowed": true,
                    "LeadSource": "Google Sign In"
                }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"rec1"}"#)
            .expect(1)
            .create_async()
            .await;

        let app = init_app!(test_config(&server.url()));

        let login_resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let state = state_from(&location(&login_resp));
        let cookie = session_cookie(&login_resp);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/authorize?code=auth-code&state={}", state))
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/success");
        write.assert_async().await;
    }

    #[actix_web::test]
    async fn test_missing_business_scope_renders_reconsent_page() {
        let mut server = mockito::Server::new_async().await;
        mock_token(&mut server, "openid email profile").await;
        let write = server
            .mock("POST", "/v0/appBase/Leads")
            .expect(0)
            .create_async()
            .await;

        let app = init_app!(test_config(&server.url()));

        let login_resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let state = state_from(&location(&login_resp));
        let cookie = session_cookie(&login_resp);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/authorize?code=auth-code&state={}", state))
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("/retry"));
        write.assert_async().await;
    }

    #[actix_web::test]
    async fn test_state_mismatch_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let token = server.mock("POST", "/token").expect(0).create_async().await;

        let app = init_app!(test_config(&server.url()));

        let login_resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let cookie = session_cookie(&login_resp);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/authorize?code=auth-code&state=forged")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], "Invalid OAuth state");
        token.assert_async().await;
    }

    #[actix_web::test]
    async fn test_callback_without_session_is_rejected() {
        let app = init_app!(test_config("http://127.0.0.1:1"));

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/authorize?code=auth-code&state=abc")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_provider_error_is_bad_request() {
        let app = init_app!(test_config("http://127.0.0.1:1"));

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/authorize?error=access_denied&state=abc")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], "Error during authorization");
        assert_eq!(json["details"], "access_denied");
    }

    #[actix_web::test]
    async fn test_userinfo_failure_returns_json_error() {
        let mut server = mockito::Server::new_async().await;
        mock_token(&mut server, FULL_SCOPE).await;
        server
            .mock("GET", "/oauth2/v2/userinfo")
            .with_status(401)
            .with_body("invalid credentials")
            .create_async()
            .await;
        let write = server
            .mock("POST", "/v0/appBase/Leads")
            .expect(0)
            .create_async()
            .await;

        let app = init_app!(test_config(&server.url()));

        let login_resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let state = state_from(&location(&login_resp));
        let cookie = session_cookie(&login_resp);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/authorize?code=auth-code&state={}", state))
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], "Failed to fetch user info");
        assert_eq!(json["details"], "invalid credentials");
        write.assert_async().await;
    }

    #[actix_web::test]
    async fn test_airtable_failure_returns_json_error() {
        let mut server = mockito::Server::new_async().await;
        mock_token(&mut server, FULL_SCOPE).await;
        mock_profile(&mut server, r#"{"accounts":[]}"#).await;
        server
            .mock("POST", "/v0/appBase/Leads")
            .with_status(422)
            .with_body("INVALID_VALUE_FOR_COLUMN")
            .create_async()
            .await;

        let app = init_app!(test_config(&server.url()));

        let login_resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let state = state_from(&location(&login_resp));
        let cookie = session_cookie(&login_resp);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/authorize?code=auth-code&state={}", state))
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], "Error saving to Airtable");
        assert_eq!(json["details"], "INVALID_VALUE_FOR_COLUMN");
    }

    #[actix_web::test]
    async fn test_retry_issues_fresh_state() {
        let app = init_app!(test_config("http://127.0.0.1:1"));

        let login_resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let first_state = state_from(&location(&login_resp));

        let retry_resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/retry")
                .cookie(session_cookie(&login_resp))
                .to_request(),
        )
        .await;

        assert_eq!(retry_resp.status(), StatusCode::FOUND);
        let url = location(&retry_resp);
        assert!(url.starts_with("https://accounts.test/auth?"));
        assert!(url.contains("prompt=consent"));
        assert!(url.contains("business.manage"));
        let retry_state = state_from(&url);
        assert!(!retry_state.is_empty());
        assert_ne!(retry_state, first_state);
    }

    #[actix_web::test]
    async fn test_each_completed_sign_in_writes_its_own_record() {
        let mut server = mockito::Server::new_async().await;
        mock_token(&mut server, FULL_SCOPE).await;
        mock_profile(&mut server, r#"{"accounts":[{"name":"accounts/123"}]}"#).await;
        let write = server
            .mock("POST", "/v0/appBase/Leads")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "fields": { "Email": "a@b.com", "GoogleBusinessId": "accounts/123" }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"rec1"}"#)
            .expect(2)
            .create_async()
            .await;

        let app = init_app!(test_config(&server.url()));

        for _ in 0..2 {
            let login_resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
            let state = state_from(&location(&login_resp));

            let resp = test::call_service(
                &app,
                test::TestRequest::get()
                    .uri(&format!("/authorize?code=auth-code&state={}", state))
                    .cookie(session_cookie(&login_resp))
                    .to_request(),
            )
            .await;

            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(location(&resp), "/success");
        }

        write.assert_async().await;
    }

    #[actix_web::test]
    async fn test_success_redirects_to_thank_you_page() {
        let app = init_app!(test_config("http://127.0.0.1:1"));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/success").to_request()).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "https://example.com/thank-you");
    }

    #[actix_web::test]
    async fn test_index_serves_signin_page() {
        let app = init_app!(test_config("http://127.0.0.1:1"));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("href=\"/login\""));
    }
}
