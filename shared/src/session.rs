//! 会话探测结果
//!
//! 把“匿名”和“暂时性失败”显式区分开，调用方可以自行决定是否合并处理。

use crate::error::ClientError;
use crate::request::HttpResponse;
use crate::Me;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionProbe {
    /// 2xx 且身份可解析
    Authenticated(Me),
    /// 服务端明确表示没有会话（非 2xx）
    Anonymous,
    /// 网络失败，或 2xx 但响应体无法解析
    TransientError(ClientError),
}

impl SessionProbe {
    pub fn from_result(result: Result<HttpResponse, ClientError>) -> Self {
        match result {
            Ok(res) if res.is_success() => match res.json::<Me>() {
                Ok(me) => SessionProbe::Authenticated(me),
                Err(e) => SessionProbe::TransientError(e),
            },
            Ok(_) => SessionProbe::Anonymous,
            Err(e) => SessionProbe::TransientError(e),
        }
    }

    pub fn identity(&self) -> Option<&Me> {
        match self {
            SessionProbe::Authenticated(me) => Some(me),
            _ => None,
        }
    }

    /// 服务端是否以 2xx 回应了探测（无论响应体能否解析）
    pub fn indicates_session(&self) -> bool {
        match self {
            SessionProbe::Authenticated(_) => true,
            SessionProbe::Anonymous => false,
            SessionProbe::TransientError(e) => e.status().is_some_and(|s| (200..300).contains(&s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> Result<HttpResponse, ClientError> {
        Ok(HttpResponse {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn test_authenticated() {
        let probe = SessionProbe::from_result(response(200, r#"{"fullName":"Bob B"}"#));
        assert_eq!(
            probe.identity().and_then(Me::display_name),
            Some("Bob B")
        );
        assert!(probe.indicates_session());
    }

    #[test]
    fn test_non_success_is_anonymous() {
        for status in [401, 403, 500] {
            let probe = SessionProbe::from_result(response(status, r#"{"fullName":"x"}"#));
            assert_eq!(probe, SessionProbe::Anonymous);
            assert!(!probe.indicates_session());
        }
    }

    #[test]
    fn test_network_failure_is_transient() {
        let probe = SessionProbe::from_result(Err(ClientError::Network("offline".into())));
        assert!(matches!(probe, SessionProbe::TransientError(_)));
        assert!(probe.identity().is_none());
        assert!(!probe.indicates_session());
    }

    #[test]
    fn test_unparseable_success_still_indicates_session() {
        let probe = SessionProbe::from_result(response(200, "ok"));
        assert!(matches!(probe, SessionProbe::TransientError(ClientError::Parse { .. })));
        assert!(probe.identity().is_none());
        assert!(probe.indicates_session());
    }
}
