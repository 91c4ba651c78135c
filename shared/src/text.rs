//! 界面文案（越南语）
//!
//! 所有页面可见的固定字符串集中在此，页面与控制器只引用常量。

pub const LOGIN_TITLE: &str = "Đăng nhập";
pub const USERNAME_LABEL: &str = "Tài khoản";
pub const PASSWORD_LABEL: &str = "Mật khẩu";
pub const LOGIN_BUTTON: &str = "Login";
pub const LOGIN_FAILED: &str = "Sai tài khoản hoặc mật khẩu";
pub const REDIRECTING: &str = "Đang chuyển hướng...";

pub const WELCOME_PREFIX: &str = "Welcome, ";
pub const LOGOUT_BUTTON: &str = "Đăng xuất";
pub const MENU_LOADING: &str = "Đang tải menu...";
pub const MENU_LOAD_FAILED: &str = "Không tải được menu";

pub const PROFILE_HEADING: &str = "Thông tin người dùng";

/// 个人资料字段标签，顺序即渲染顺序
pub const PROFILE_LABELS: [&str; 8] = [
    "Tài khoản",
    "Họ tên",
    "Email",
    "SĐT",
    "Vai trò",
    "Trạng thái",
    "Tạo lúc",
    "Cập nhật",
];

pub const NOT_FOUND_CODE: &str = "404";
pub const NOT_FOUND: &str = "Không tìm thấy trang";
