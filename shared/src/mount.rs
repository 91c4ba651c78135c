//! 挂载前缀推导
//!
//! 应用可能挂在某个路径前缀之下（如 `/app/menu`），所有 API 与跳转路径都要带上该前缀。

/// 应用自身的页面名，它们出现在第一段时说明应用部署在根路径
pub const PAGE_SEGMENTS: [&str; 4] = ["menu", "profile", "login", "index.html"];

/// 挂载前缀，空字符串表示部署在根路径
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountPath(String);

impl MountPath {
    /// 部署在根路径
    pub fn root() -> Self {
        Self(String::new())
    }

    /// 从当前 URL path 推导挂载前缀
    ///
    /// 取第一个非空路径段；若该段本身是页面名则前缀为空。
    pub fn from_pathname(pathname: &str) -> Self {
        match pathname.split('/').find(|segment| !segment.is_empty()) {
            Some(segment) if !PAGE_SEGMENTS.contains(&segment) => Self(format!("/{}", segment)),
            _ => Self::root(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 给请求路径加上挂载前缀
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    /// 登录页（挂载根）
    pub fn login_root(&self) -> String {
        self.join("/")
    }

    pub fn menu(&self) -> String {
        self.join("/menu")
    }

    /// 去掉挂载前缀后的页面路径，始终以 `/` 开头且不带末尾的 `/`
    ///
    /// 空路径段（`//`）先被折叠，与 `from_pathname` 的取段规则一致。
    pub fn relative(&self, pathname: &str) -> String {
        let mut segments = pathname.split('/').filter(|segment| !segment.is_empty()).peekable();
        let mount = self.0.trim_start_matches('/');
        if !mount.is_empty() && segments.peek() == Some(&mount) {
            segments.next();
        }
        format!("/{}", segments.collect::<Vec<_>>().join("/"))
    }
}
