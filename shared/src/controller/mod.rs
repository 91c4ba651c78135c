//! 页面控制器
//!
//! 每个页面一个控制器，彼此独立。控制器只负责发请求并产出视图状态，
//! 视图层按状态整体重绘。

mod login;
mod menu;
mod profile;

pub use login::{LoginController, LoginForm, SubmitOutcome};
pub use menu::{CategorySection, MenuController, WelcomeView};
pub use profile::{ProfileController, ProfileField, ProfileView};
