//! Generic HTTP client tools
//!
//! Shared request handling for HTTP-backed catalog sources: sending the
//! request, logging, mapping transport failures and reading the body.
//!
//! Requests are executed exactly once. A failed fetch is reported to the
//! caller, which decides what an unavailable row looks like.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider_name: &str) -> Result<Client, ProviderError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP GET-style request and returns the response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor
    /// * `provider_name` - source name (for logging and error context)
    /// * `url` - requested URL (for logging and error context)
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(ProviderError::Timeout | NetworkError)` - transport failure
    /// * `Err(ProviderError::HttpStatus)` - any non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        url: &str,
    ) -> Result<String, ProviderError> {
        log::debug!("[{provider_name}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{provider_name}] Response Status: {status}");

        if !status.is_success() {
            return Err(ProviderError::HttpStatus {
                provider: provider_name.to_string(),
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
