//! Porkbun HTTP 请求方法

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::redact_secrets;

use super::{PorkbunProvider, PorkbunStatus};

/// Remote outcome: parsed payload, or what the API said when it refused.
pub(crate) type Remote<T> = std::result::Result<T, RawApiError>;

impl PorkbunProvider {
    /// 执行 POST 请求
    ///
    /// `fields` is merged with the API key pair to form the body. A response whose
    /// `status` is not `SUCCESS` comes back as `Ok(Err(raw))`.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        fields: Map<String, Value>,
    ) -> Result<Remote<T>> {
        let url = format!("{}{endpoint}", self.base_url);

        let mut body = fields;
        body.insert("apikey".to_string(), Value::String(self.api_key.clone()));
        body.insert(
            "secretapikey".to_string(),
            Value::String(self.secret_api_key.clone()),
        );
        let body = Value::Object(body);
        log::debug!("Request Body: {}", redact_secrets(&body));

        let request = self.client.post(&url).json(&body);
        let response =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        let status: PorkbunStatus = HttpUtils::parse_json(&response.body, self.provider_name())?;
        if !status.is_success() {
            let message = status
                .message
                .unwrap_or_else(|| format!("Unknown error (HTTP {})", response.status));
            return Ok(Err(RawApiError::new(message)));
        }

        HttpUtils::parse_json(&response.body, self.provider_name()).map(Ok)
    }
}
