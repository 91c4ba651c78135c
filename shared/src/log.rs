// =========================================================
// 跨平台日志宏
// =========================================================
//
// wasm32 下写入浏览器控制台，其余平台（单元测试）写入 stdout/stderr。

#[doc(hidden)]
pub fn write_info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());

    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", msg);
}

#[doc(hidden)]
pub fn write_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", msg);
}

#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => ($crate::log::write_info(&format!($($t)*)))
}

#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => ($crate::log::write_error(&format!($($t)*)))
}
