use crate::api::KopiApi;
use crate::navigator::Navigator;
use crate::page::PageState;
use crate::request::HttpClient;
use crate::{Profile, text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: String,
}

impl ProfileField {
    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub heading: &'static str,
    pub fields: Vec<ProfileField>,
}

impl ProfileView {
    /// 固定顺序的字段列表，缺失值渲染为空字符串
    pub fn render(profile: &Profile) -> Self {
        let text_of = |v: &Option<String>| v.clone().unwrap_or_default();
        let time_of = |v: &Option<crate::Timestamp>| {
            v.as_ref().map(ToString::to_string).unwrap_or_default()
        };
        let values = [
            text_of(&profile.username),
            text_of(&profile.full_name),
            text_of(&profile.email),
            text_of(&profile.phone),
            text_of(&profile.role),
            text_of(&profile.status),
            time_of(&profile.created_at),
            time_of(&profile.updated_at),
        ];

        Self {
            heading: text::PROFILE_HEADING,
            fields: text::PROFILE_LABELS
                .into_iter()
                .zip(values)
                .map(|(label, value)| ProfileField { label, value })
                .collect(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.fields.iter().map(ProfileField::line).collect()
    }
}

#[derive(Clone)]
pub struct ProfileController<C, N> {
    api: KopiApi<C>,
    navigator: N,
}

impl<C: HttpClient, N: Navigator> ProfileController<C, N> {
    pub fn new(api: KopiApi<C>, navigator: N) -> Self {
        Self { api, navigator }
    }

    /// 成功则渲染资料；401 以及其它任何失败都跳回登录页
    pub async fn load(&self) -> PageState<ProfileView> {
        match self.api.profile().await {
            Ok(profile) => PageState::Rendered(ProfileView::render(&profile)),
            Err(e) => {
                if e.is_unauthorized() {
                    log_info!("[Profile] Not signed in");
                } else {
                    log_error!("[Profile] Profile fetch failed: {}", e);
                }
                let target = self.api.mount().login_root();
                log_info!("[Profile] Redirecting to {}", target);
                self.navigator.assign(&target);
                PageState::Redirected(target)
            }
        }
    }
}
