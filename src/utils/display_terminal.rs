//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 설정 요약을 박스 제목과 트리 형태로 출력합니다.

use crate::config::AppConfig;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 서브 항목을 트리 구조로 출력합니다
///
/// ```text
///    ├─ Airtable: appBase/Leads
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 시작 시 설정 요약을 출력합니다
///
/// 비밀 값은 출력하지 않고 엔드포인트와 식별자만 보여줍니다.
pub fn print_startup_summary(config: &AppConfig) {
    println!();
    print_boxed_title("🚀 GBP SIGN-IN SERVICE");
    print_sub_task("Bind", &config.server.bind_address());
    print_sub_task("Redirect URI", &config.google.redirect_uri);
    print_sub_task("Authorization", &config.google.auth_uri);
    print_sub_task("Business accounts", &config.google.business_accounts_uri);
    print_sub_task(
        "Airtable",
        &format!("{}/{}", config.airtable.base_id, config.airtable.table_name),
    );
    print_sub_task("Success redirect", &config.success_redirect_url);
    println!();
}
