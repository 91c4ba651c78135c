//! 浏览器原生 API 封装模块
//!
//! 页面组件不直接接触 `web_sys`，只通过这里的类型访问 fetch 与 location。

mod http;
mod location;
pub mod route;

pub use http::FetchClient;
pub use location::{BrowserNavigator, current_path};
