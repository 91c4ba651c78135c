//! Kopi 前端共享层
//!
//! 与目标平台无关的部分都在这里，可直接在宿主机上测试：
//! - 领域模型与 API 协议
//! - 挂载前缀推导
//! - HTTP / 导航抽象
//! - 三个页面控制器及其视图状态

#[macro_use]
pub mod log;

pub mod api;
pub mod controller;
pub mod error;
pub mod mount;
pub mod navigator;
pub mod page;
pub mod protocol;
pub mod request;
pub mod session;
pub mod text;

pub use api::KopiApi;
pub use error::ClientError;
pub use mount::MountPath;
pub use navigator::Navigator;
pub use page::PageState;
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use session::SessionProbe;

use serde::{Deserialize, Serialize};
use std::fmt;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 登录表单中的凭据，只存在于输入框状态中
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// 当前会话身份（`/api/auth/me`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

impl Me {
    /// 非空的全名
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
}

/// 价格：服务端可能返回数字（BigDecimal）或字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write_number(f, n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// 按浏览器打印 JS number 的方式输出：`35000.0` 输出为 `35000`
fn write_number(f: &mut fmt::Formatter<'_>, n: &serde_json::Number) -> fmt::Result {
    if let Some(i) = n.as_i64() {
        write!(f, "{}", i)
    } else if let Some(u) = n.as_u64() {
        write!(f, "{}", u)
    } else {
        match n.as_f64() {
            Some(x) => write_float(f, x),
            None => write!(f, "{}", n),
        }
    }
}

/// JS 在 `[1e-6, 1e21)` 之外改用指数形式，指数为正时带 `+`
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let magnitude = x.abs();
    if x == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", x);
    }
    let exp = format!("{:e}", x);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{}e+{}", mantissa, power),
        _ => f.write_str(&exp),
    }
}

/// 时间戳：ISO 字符串，或 Jackson 未启用日期格式化时的分量数组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Parts(Vec<i64>),
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Text(s) => f.write_str(s),
            Timestamp::Parts(parts) => {
                let joined: Vec<String> = parts.iter().map(i64::to_string).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

/// 当前用户资料（`/api/profile`）
///
/// 服务端曾以 snake_case 输出部分字段，这里同时接受两种命名。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: Option<String>,
    #[serde(alias = "display_name")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "phone_number")]
    pub phone: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "created_at")]
    pub created_at: Option<Timestamp>,
    #[serde(alias = "updated_at")]
    pub updated_at: Option<Timestamp>,
}
