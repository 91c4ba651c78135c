use crate::error::ClientError;
use crate::mount::MountPath;
use crate::protocol::{
    ApiRequest, LoginRequest, LogoutRequest, MeRequest, MenuRequest, ProfileRequest,
};
use crate::request::{HttpClient, HttpResponse};
use crate::session::SessionProbe;
use crate::{Category, Credentials, Profile};

/// Kopi REST API 客户端
///
/// 持有挂载前缀，所有路径都在这里统一加前缀。
#[derive(Clone, Debug, PartialEq)]
pub struct KopiApi<C> {
    client: C,
    mount: MountPath,
}

impl<C: HttpClient> KopiApi<C> {
    pub fn new(client: C, mount: MountPath) -> Self {
        Self { client, mount }
    }

    pub fn mount(&self) -> &MountPath {
        &self.mount
    }

    async fn call<R: ApiRequest>(&self, request: &R) -> Result<HttpResponse, ClientError> {
        let req = request.to_http(&self.mount)?;
        self.client.send(req).await
    }

    /// 发送请求并要求 2xx，不解析响应体
    async fn expect_success<R: ApiRequest>(&self, request: &R) -> Result<(), ClientError> {
        let res = self.call(request).await?;
        if !res.is_success() {
            return Err(ClientError::Status(res.status));
        }
        Ok(())
    }

    /// 发送请求并要求 2xx，解析响应体
    async fn fetch<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ClientError> {
        let res = self.call(request).await?;
        if !res.is_success() {
            return Err(ClientError::Status(res.status));
        }
        res.json::<R::Response>()
    }

    /// 探测当前会话
    pub async fn me(&self) -> SessionProbe {
        SessionProbe::from_result(self.call(&MeRequest).await)
    }

    /// 登录；成功后会话由服务端通过 Cookie 维持
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ClientError> {
        self.expect_success(&LoginRequest::from(credentials)).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.expect_success(&LogoutRequest).await
    }

    /// 获取菜单，保持服务端顺序
    pub async fn menu(&self) -> Result<Vec<Category>, ClientError> {
        self.fetch(&MenuRequest).await
    }

    pub async fn profile(&self) -> Result<Profile, ClientError> {
        self.fetch(&ProfileRequest).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MockHttpClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_every_call_uses_the_mount_prefix() {
        let client = MockHttpClient::new();
        let api = KopiApi::new(client.clone(), MountPath::from_pathname("/app/menu"));

        let _ = api.me().await;
        let _ = api.menu().await;
        let _ = api.profile().await;
        let _ = api.logout().await;
        let _ = api
            .login(&Credentials {
                username: "bob".into(),
                password: "pw".into(),
            })
            .await;

        let urls: Vec<String> = client.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "/app/api/auth/me",
                "/app/api/menu",
                "/app/api/profile",
                "/app/api/auth/logout",
                "/app/api/auth/login",
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_maps_status_and_parse_errors() {
        let client = MockHttpClient::new();
        let api = KopiApi::new(client.clone(), MountPath::root());

        client.mock_response("/api/profile", 401, json!({ "message": "Unauthorized" }));
        assert_eq!(api.profile().await, Err(ClientError::Status(401)));

        client.mock_raw("/api/menu", 200, "<html></html>");
        assert!(matches!(
            api.menu().await,
            Err(ClientError::Parse { status: 200, .. })
        ));
    }

    #[tokio::test]
    async fn test_login_ignores_response_body() {
        let client = MockHttpClient::new();
        let api = KopiApi::new(client.clone(), MountPath::root());
        client.mock_raw("/api/auth/login", 200, "");

        let result = api
            .login(&Credentials {
                username: "bob".into(),
                password: "pw".into(),
            })
            .await;
        assert_eq!(result, Ok(()));
    }
}
