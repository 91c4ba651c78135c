//! 应用配置
//!
//! 挂载前缀只在启动时从 URL 推导一次，之后通过 Context 注入到各页面。

use kopi_shared::controller::{LoginController, MenuController, ProfileController};
use kopi_shared::{KopiApi, MountPath, log_info};
use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::{BrowserNavigator, FetchClient, current_path};

/// 运行时配置
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 挂载前缀
    pub mount: MountPath,
    /// 当前文档对应的页面
    pub route: AppRoute,
}

impl AppConfig {
    pub fn from_pathname(pathname: &str) -> Self {
        let mount = MountPath::from_pathname(pathname);
        let route = AppRoute::from_path(&mount.relative(pathname));
        Self { mount, route }
    }

    /// 从 `window.location` 读取
    pub fn from_location() -> Self {
        let config = Self::from_pathname(&current_path());
        log_info!(
            "[Config] mount='{}' route={}",
            config.mount.as_str(),
            config.route
        );
        config
    }

    pub fn api(&self) -> KopiApi<FetchClient> {
        KopiApi::new(FetchClient, self.mount.clone())
    }

    pub fn login_controller(&self) -> LoginController<FetchClient, BrowserNavigator> {
        LoginController::new(self.api(), BrowserNavigator)
    }

    pub fn menu_controller(&self) -> MenuController<FetchClient, BrowserNavigator> {
        MenuController::new(self.api(), BrowserNavigator)
    }

    pub fn profile_controller(&self) -> ProfileController<FetchClient, BrowserNavigator> {
        ProfileController::new(self.api(), BrowserNavigator)
    }
}

/// 提供配置到 Context
pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// 从 Context 获取配置
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig should be provided")
}
