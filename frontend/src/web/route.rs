//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 页面之间通过整页跳转切换，这里只负责“当前文档该显示哪个页面”。

use std::fmt::Display;

/// 应用页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (挂载根)
    #[default]
    Login,
    /// 菜单页面
    Menu,
    /// 个人资料页面
    Profile,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将去掉挂载前缀后的 path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/login" | "/index.html" => Self::Login,
            "/menu" => Self::Menu,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 path（不含挂载前缀）
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Menu => "/menu",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
