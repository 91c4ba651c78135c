//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的浏览器 `fetch` 实现共享层的 `HttpClient`。

use gloo_net::http::Request;
use kopi_shared::protocol::{CredentialsMode, HttpMethod};
use kopi_shared::{ClientError, HttpClient, HttpRequest, HttpResponse};
use web_sys::RequestCredentials;

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        // 未指定时保持浏览器默认（same-origin）
        if req.credentials == CredentialsMode::Include {
            builder = builder.credentials(RequestCredentials::Include);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Build(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ClientError::Parse {
            status,
            message: e.to_string(),
        })?;

        Ok(HttpResponse { status, body })
    }
}
