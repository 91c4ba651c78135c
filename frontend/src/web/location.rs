//! Location 封装模块
//!
//! 所有对 `window.location` 的操作都集中在此。

use kopi_shared::{Navigator, log_error};
use wasm_bindgen::JsValue;

/// 获取当前浏览器路径
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn report(action: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log_error!("[Location] {} failed: {:?}", action, e);
    }
}

/// 通过整页跳转实现的导航器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn assign(&self, path: &str) {
        match web_sys::window() {
            Some(window) => report("assign", window.location().assign(path)),
            None => log_error!("[Location] No window, cannot navigate to {}", path),
        }
    }

    fn reload(&self) {
        match web_sys::window() {
            Some(window) => report("reload", window.location().reload()),
            None => log_error!("[Location] No window, cannot reload"),
        }
    }
}
