use crate::api::KopiApi;
use crate::navigator::Navigator;
use crate::page::PageState;
use crate::request::HttpClient;
use crate::text;
use crate::Credentials;

/// 登录表单的渲染状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// 最近一次提交的错误，每次提交都会被替换
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    /// 发请求前清除旧错误
    pub fn begin_submit(&mut self) {
        self.error = None;
        self.submitting = true;
    }

    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.submitting = false;
        if let SubmitOutcome::Rejected(msg) = outcome {
            self.error = Some(msg.clone());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 登录成功，已跳转到给定路径
    Redirected(String),
    /// 登录失败，携带要展示的固定文案
    Rejected(String),
}

#[derive(Clone)]
pub struct LoginController<C, N> {
    api: KopiApi<C>,
    navigator: N,
}

impl<C: HttpClient, N: Navigator> LoginController<C, N> {
    pub fn new(api: KopiApi<C>, navigator: N) -> Self {
        Self { api, navigator }
    }

    fn go_to_menu(&self) -> String {
        let target = self.api.mount().menu();
        log_info!("[Login] Redirecting to {}", target);
        self.navigator.assign(&target);
        target
    }

    /// 页面加载：已有会话则直接跳转菜单，否则（包括网络失败）展示表单
    pub async fn mount(&self) -> PageState<LoginForm> {
        let probe = self.api.me().await;
        if probe.indicates_session() {
            PageState::Redirected(self.go_to_menu())
        } else {
            PageState::Rendered(LoginForm::default())
        }
    }

    /// 提交凭据；任何失败都只给出同一条固定文案
    pub async fn submit(&self, credentials: &Credentials) -> SubmitOutcome {
        match self.api.login(credentials).await {
            Ok(()) => SubmitOutcome::Redirected(self.go_to_menu()),
            Err(e) => {
                log_error!("[Login] Login failed for {}: {}", credentials.username, e);
                SubmitOutcome::Rejected(text::LOGIN_FAILED.to_string())
            }
        }
    }
}
