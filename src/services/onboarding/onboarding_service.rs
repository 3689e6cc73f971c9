//! # 온보딩 서비스
//!
//! 콜백 이후의 전체 플로우를 하나로 묶습니다.
//!
//! ```text
//! authorize(code)
//!   └─ 토큰 교환 → business.manage 스코프 확인
//! capture_lead(token)
//!   ├─ 사용자 정보 조회
//!   ├─ 비즈니스 계정 조회 (없으면 "No GMB ID found")
//!   └─ Airtable 레코드 생성
//! ```
//!
//! 각 단계는 앞 단계가 성공했을 때만 실행됩니다. 조회 단계에서 실패하면
//! Airtable에는 아무것도 기록되지 않습니다.

use crate::config::AppConfig;
use crate::domain::models::LeadRecord;
use crate::errors::errors::AppResult;
use crate::services::auth::{AuthorizedToken, GoogleAuthService};
use crate::services::profile::GoogleProfileService;
use crate::services::storage::AirtableService;

/// 저장까지 완료된 리드
#[derive(Debug, Clone)]
pub struct CapturedLead {
    pub record: LeadRecord,
    pub airtable_id: String,
}

#[derive(Debug, Clone)]
pub struct OnboardingService {
    auth: GoogleAuthService,
    profile: GoogleProfileService,
    store: AirtableService,
}

impl OnboardingService {
    pub fn new(auth: GoogleAuthService, profile: GoogleProfileService, store: AirtableService) -> Self {
        Self { auth, profile, store }
    }

    /// 설정으로부터 서비스를 구성합니다.
    ///
    /// OpenID discovery를 먼저 수행하므로 프로필 서비스도 discovery로 확정된
    /// userinfo 엔드포인트를 사용합니다.
    pub async fn from_config(http: reqwest::Client, config: &AppConfig) -> Self {
        let auth = GoogleAuthService::discover(http.clone(), config.google.clone()).await;
        let profile = GoogleProfileService::new(http.clone(), auth.config());
        let store = AirtableService::new(http, config.airtable.clone());
        Self::new(auth, profile, store)
    }

    pub fn auth(&self) -> &GoogleAuthService {
        &self.auth
    }

    /// 인증 코드를 교환하고 필수 스코프를 확인합니다.
    pub async fn authorize(&self, auth_code: &str) -> AppResult<AuthorizedToken> {
        self.auth.authorize(auth_code).await
    }

    /// 프로필과 비즈니스 계정을 조회해 Airtable에 리드를 기록합니다.
    pub async fn capture_lead(&self, token: &AuthorizedToken) -> AppResult<CapturedLead> {
        let user = self.profile.fetch_user_info(&token.access_token).await?;
        let business_id = self
            .profile
            .fetch_business_account_id(&token.access_token)
            .await?;

        let record = LeadRecord::from_profile(user, business_id)?;
        let created = self.store.create_lead(&record).await?;

        Ok(CapturedLead {
            record,
            airtable_id: created.id,
        })
    }
}
