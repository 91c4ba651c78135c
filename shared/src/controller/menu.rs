use crate::api::KopiApi;
use crate::navigator::Navigator;
use crate::page::PageState;
use crate::request::HttpClient;
use crate::session::SessionProbe;
use crate::{Category, text};

/// 欢迎横幅与登出按钮的渲染状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WelcomeView {
    pub text: String,
    pub show_logout: bool,
}

impl WelcomeView {
    /// 只有拿到非空全名时才显示欢迎语和登出按钮，其余情况一律按匿名处理
    pub fn from_probe(probe: &SessionProbe) -> Self {
        match probe.identity().and_then(|me| me.display_name()) {
            Some(name) => Self {
                text: format!("{}{}", text::WELCOME_PREFIX, name),
                show_logout: true,
            },
            None => Self::default(),
        }
    }
}

/// 一个分类：标题加若干 "{name} - {price}" 行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub heading: String,
    pub lines: Vec<String>,
}

impl CategorySection {
    /// 按服务端顺序整体生成，不保留任何上一次渲染的内容
    pub fn render_all(categories: &[Category]) -> Vec<CategorySection> {
        categories
            .iter()
            .map(|cat| CategorySection {
                heading: cat.name.clone().unwrap_or_default(),
                lines: cat
                    .products
                    .iter()
                    .map(|p| {
                        let price = p.price.as_ref().map(ToString::to_string).unwrap_or_default();
                        let name = p.name.as_deref().unwrap_or_default();
                        format!("{} - {}", name, price)
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct MenuController<C, N> {
    api: KopiApi<C>,
    navigator: N,
}

impl<C: HttpClient, N: Navigator> MenuController<C, N> {
    pub fn new(api: KopiApi<C>, navigator: N) -> Self {
        Self { api, navigator }
    }

    /// 身份探测，失败不影响菜单
    pub async fn welcome(&self) -> WelcomeView {
        let probe = self.api.me().await;
        if let SessionProbe::TransientError(e) = &probe {
            log_error!("[Menu] Identity probe failed: {}", e);
        }
        WelcomeView::from_probe(&probe)
    }

    /// 菜单加载，失败不影响欢迎横幅
    pub async fn catalog(&self) -> PageState<Vec<CategorySection>> {
        match self.api.menu().await {
            Ok(categories) => PageState::Rendered(CategorySection::render_all(&categories)),
            Err(e) => {
                log_error!("[Menu] Catalog fetch failed: {}", e);
                PageState::ErrorDisplayed(text::MENU_LOAD_FAILED.to_string())
            }
        }
    }

    /// 登出后无论成功与否都重新加载页面
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            log_error!("[Menu] Logout failed, reloading anyway: {}", e);
        }
        self.navigator.reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount::MountPath;
    use crate::navigator::{MockNavigator, NavEvent};
    use crate::protocol::CredentialsMode;
    use crate::request::MockHttpClient;
    use serde_json::json;

    fn setup(pathname: &str) -> (
        MockHttpClient,
        MockNavigator,
        MenuController<MockHttpClient, MockNavigator>,
    ) {
        let client = MockHttpClient::new();
        let navigator = MockNavigator::new();
        let api = KopiApi::new(client.clone(), MountPath::from_pathname(pathname));
        let controller = MenuController::new(api, navigator.clone());
        (client, navigator, controller)
    }

    fn sample_menu() -> serde_json::Value {
        json!([
            {
                "name": "Cà phê",
                "products": [
                    { "name": "Đen đá", "price": 25000 },
                    { "name": "Bạc xỉu", "price": 35000 }
                ]
            },
            {
                "name": "Trà",
                "products": [
                    { "name": "Trà đào", "price": "40000" }
                ]
            },
            { "name": "Bánh", "products": [] }
        ])
    }

    #[tokio::test]
    async fn test_welcome_for_authenticated_user() {
        let (client, _, controller) = setup("/menu");
        client.mock_response("/api/auth/me", 200, json!({ "fullName": "Bob B" }));

        let welcome = controller.welcome().await;

        assert_eq!(welcome.text, "Welcome, Bob B");
        assert!(welcome.show_logout);
    }

    #[tokio::test]
    async fn test_anonymous_variants_hide_logout() {
        let (client, _, controller) = setup("/menu");

        client.mock_response("/api/auth/me", 401, json!({}));
        assert_eq!(controller.welcome().await, WelcomeView::default());

        client.mock_response("/api/auth/me", 200, json!({ "fullName": "" }));
        assert_eq!(controller.welcome().await, WelcomeView::default());

        client.mock_response("/api/auth/me", 200, json!({ "username": "bob" }));
        assert_eq!(controller.welcome().await, WelcomeView::default());

        client.mock_raw("/api/auth/me", 200, "not json");
        assert_eq!(controller.welcome().await, WelcomeView::default());

        client.mock_network_failure("/api/auth/me");
        let welcome = controller.welcome().await;
        assert_eq!(welcome.text, "");
        assert!(!welcome.show_logout);
    }

    #[tokio::test]
    async fn test_catalog_preserves_server_order() {
        let (client, _, controller) = setup("/menu");
        client.mock_response("/api/menu", 200, sample_menu());

        let state = controller.catalog().await;
        let sections = state.rendered().unwrap();

        let headings: Vec<&str> = sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, ["Cà phê", "Trà", "Bánh"]);
        assert_eq!(sections[0].lines, ["Đen đá - 25000", "Bạc xỉu - 35000"]);
        assert_eq!(sections[1].lines, ["Trà đào - 40000"]);
        assert!(sections[2].lines.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_failures_show_fixed_message() {
        let (client, _, controller) = setup("/menu");
        let failed = PageState::ErrorDisplayed("Không tải được menu".to_string());

        client.mock_raw("/api/menu", 200, "<html>");
        assert_eq!(controller.catalog().await, failed);

        client.mock_response("/api/menu", 500, json!({ "error": "boom" }));
        assert_eq!(controller.catalog().await, failed);

        client.mock_network_failure("/api/menu");
        assert_eq!(controller.catalog().await, failed);
    }

    #[tokio::test]
    async fn test_catalog_renders_null_names_as_empty() {
        let (client, _, controller) = setup("/menu");
        client.mock_response(
            "/api/menu",
            200,
            json!([
                {
                    "name": null,
                    "products": [
                        { "name": null, "price": 15000 },
                        { "name": "Bạc xỉu", "price": 35000 }
                    ]
                }
            ]),
        );

        let state = controller.catalog().await;

        assert_eq!(
            state,
            PageState::Rendered(vec![CategorySection {
                heading: String::new(),
                lines: vec![" - 15000".into(), "Bạc xỉu - 35000".into()],
            }])
        );
    }

    #[tokio::test]
    async fn test_failures_are_isolated() {
        let (client, _, controller) = setup("/app/menu");
        client.mock_response("/app/api/auth/me", 200, json!({ "fullName": "Bob B" }));
        client.mock_network_failure("/app/api/menu");

        let (welcome, catalog) = tokio::join!(controller.welcome(), controller.catalog());
        assert_eq!(welcome.text, "Welcome, Bob B");
        assert!(matches!(catalog, PageState::ErrorDisplayed(_)));

        client.mock_network_failure("/app/api/auth/me");
        client.mock_response("/app/api/menu", 200, sample_menu());

        let (welcome, catalog) = tokio::join!(controller.welcome(), controller.catalog());
        assert_eq!(welcome, WelcomeView::default());
        assert_eq!(catalog.rendered().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_menu_request_keeps_browser_default_credentials() {
        let (client, _, controller) = setup("/menu");
        tokio::join!(controller.welcome(), controller.catalog());

        let me = client.request_to("/api/auth/me").unwrap();
        let menu = client.request_to("/api/menu").unwrap();
        assert_eq!(me.credentials, CredentialsMode::Include);
        assert_eq!(menu.credentials, CredentialsMode::BrowserDefault);
    }

    #[tokio::test]
    async fn test_second_render_replaces_first() {
        let (client, _, controller) = setup("/menu");
        client.mock_response("/api/menu", 200, sample_menu());
        let first = controller.catalog().await;

        client.mock_response(
            "/api/menu",
            200,
            json!([{ "name": "Nước ép", "products": [{ "name": "Cam", "price": 30000 }] }]),
        );
        let second = controller.catalog().await;

        assert_ne!(first, second);
        assert_eq!(
            second,
            PageState::Rendered(vec![CategorySection {
                heading: "Nước ép".into(),
                lines: vec!["Cam - 30000".into()],
            }])
        );
        assert_eq!(CategorySection::render_all(&[]), Vec::new());
    }

    #[tokio::test]
    async fn test_logout_reloads_on_success() {
        let (client, navigator, controller) = setup("/menu");
        client.mock_response("/api/auth/logout", 200, json!({ "message": "logged out" }));

        controller.logout().await;

        assert_eq!(navigator.events(), [NavEvent::Reload]);
        let req = client.request_to("/api/auth/logout").unwrap();
        assert_eq!(req.credentials, CredentialsMode::Include);
    }

    #[tokio::test]
    async fn test_logout_reloads_on_network_failure() {
        let (client, navigator, controller) = setup("/menu");
        client.mock_network_failure("/api/auth/logout");

        controller.logout().await;

        assert_eq!(navigator.events(), [NavEvent::Reload]);
    }
}
