//! 부여된 OAuth 스코프 집합

/// 토큰 응답의 `scope` 필드를 파싱한 스코프 목록
///
/// Google은 부여된 스코프를 공백으로 구분된 하나의 문자열로 반환합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantedScopes(Vec<String>);

impl GrantedScopes {
    pub fn parse(raw: &str) -> Self {
        Self(raw.split_whitespace().map(str::to_string).collect())
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.0.iter().any(|granted| granted == scope)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BUSINESS_MANAGE_SCOPE;

    #[test]
    fn test_parse_space_separated() {
        let scopes = GrantedScopes::parse(
            "openid https://www.googleapis.com/auth/userinfo.email  https://www.googleapis.com/auth/business.manage",
        );
        assert_eq!(scopes.as_slice().len(), 3);
        assert!(scopes.contains(BUSINESS_MANAGE_SCOPE));
        assert!(scopes.contains("openid"));
    }

    #[test]
    fn test_prefix_does_not_match() {
        let scopes = GrantedScopes::parse("https://www.googleapis.com/auth/business");
        assert!(!scopes.contains(BUSINESS_MANAGE_SCOPE));
    }

    #[test]
    fn test_empty() {
        assert!(GrantedScopes::parse("   ").as_slice().is_empty());
    }
}
