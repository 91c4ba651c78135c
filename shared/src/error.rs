use std::fmt;

/// 客户端请求错误
///
/// 页面层会把这些错误折叠为固定文案或重定向，这里保留原因以便记录日志。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// 请求构建失败
    Build(String),
    /// 网络请求失败（fetch 被拒绝）
    Network(String),
    /// 服务端返回非 2xx 状态码
    Status(u16),
    /// 响应体无法读取或不是预期的 JSON
    Parse { status: u16, message: String },
}

impl ClientError {
    /// 收到响应时的 HTTP 状态码；网络层失败时为 `None`
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status(status) | ClientError::Parse { status, .. } => Some(*status),
            ClientError::Build(_) | ClientError::Network(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Status(401))
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Build(msg) => write!(f, "请求构建失败: {}", msg),
            ClientError::Network(msg) => write!(f, "网络错误: {}", msg),
            ClientError::Status(status) => write!(f, "服务端返回状态码 {}", status),
            ClientError::Parse { status, message } => {
                write!(f, "响应解析失败 (HTTP {}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ClientError {}
