use crate::error::ProviderError;
use crate::types::Envelope;

/// 原始 API 错误（内部使用）
///
/// What a provider said when it answered but refused the request. Turned into a
/// failed [`Envelope`], never into a [`ProviderError`].
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP status, for providers that signal failure through it
    pub status: Option<u16>,
    /// Provider error type (Shlink problem-detail `type`)
    pub error_type: Option<String>,
    /// Message shown to the user
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            error_type: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, error_type: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            error_type,
            message: message.into(),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
///
/// Every client implements this to label its errors and to turn remote
/// refusals into failed envelopes the same way.
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射为失败的 Envelope
    fn map_failure<T>(&self, raw: RawApiError) -> Envelope<T> {
        log::warn!("[{}] API refused request: {}", self.provider_name(), raw.message);
        let envelope = Envelope::failure(raw.message).with_error_type(raw.error_type);
        match raw.status {
            Some(status) => envelope.with_status_code(status),
            None => envelope,
        }
    }

    /// 快捷方法：参数错误
    fn invalid_parameter(&self, param: &str, detail: impl ToString) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }
}
