//! Kopi 前端应用
//!
//! 同一个 WASM 包被每个 HTML 文档加载，按当前 URL 决定渲染哪个页面：
//! - `config`: 启动时推导一次的挂载前缀与页面，经 Context 注入
//! - `web`: fetch 与 location 的浏览器封装
//! - `components`: 三个彼此独立的页面

mod components {
    pub mod login;
    pub mod menu;
    pub mod profile;
}
mod config;
pub(crate) mod web;

use crate::components::login::LoginPage;
use crate::components::menu::MenuPage;
use crate::components::profile::ProfilePage;
use crate::config::{AppConfig, provide_app_config};
use crate::web::route::AppRoute;

use kopi_shared::text;
use leptos::prelude::*;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Menu => view! { <MenuPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div style="font-family: sans-serif; padding: 24px; text-align: center;">
                <h1>{text::NOT_FOUND_CODE}</h1>
                <p>{text::NOT_FOUND}</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 挂载前缀只推导一次
    let config = AppConfig::from_location();
    let route = config.route;
    provide_app_config(config);

    route_matcher(route)
}
