//! Shlink HTTP 请求方法

use reqwest::Method;
use serde_json::Value;

use crate::error::Result;
use crate::http_client::{HttpResponse, HttpUtils};
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::{ProblemDetail, ShlinkProvider};

impl ShlinkProvider {
    /// 执行请求，返回完整响应（不论状态码）
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<HttpResponse> {
        let url = format!("{}{path}", self.base_url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Accept", "application/json")
            .header("X-Api-Key", &self.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            log::debug!("Request Body: {body}");
            request = request.json(body);
        }

        HttpUtils::execute_request(request, self.provider_name(), method.as_str(), &url).await
    }

    /// Read a problem-detail body; a body that is not one still yields a message.
    pub(crate) fn problem(&self, response: &HttpResponse) -> RawApiError {
        let problem: ProblemDetail = serde_json::from_str(&response.body).unwrap_or_else(|_| {
            log::warn!(
                "[{}] HTTP {} without problem detail",
                self.provider_name(),
                response.status
            );
            ProblemDetail {
                title: Some(format!("HTTP {}", response.status)),
                ..ProblemDetail::default()
            }
        });
        RawApiError::with_status(response.status, problem.error_type.clone(), problem.message())
    }
}
