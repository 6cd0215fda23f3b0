//! Generic HTTP client tools
//!
//! Sending, logging and reading the body are the same for every command;
//! building the request (GET query vs. POST form) stays with the caller.
//!
//! Nothing here retries. A failed request is reported once.

use reqwest::RequestBuilder;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, query or form body)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `command` - API command name (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - status code and body, whatever the status
    /// * `Err(ProviderError::Timeout)` - the transport timed out
    /// * `Err(ProviderError::NetworkError)` - any other transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        command: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {command}");

        // The URL carries ApiKey in its query string; keep it out of error text.
        let response = request_builder.send().await.map_err(|e| {
            let timed_out = e.is_timeout();
            let detail = e.without_url().to_string();
            if timed_out {
                ProviderError::Timeout { detail }
            } else {
                ProviderError::NetworkError { detail }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {}", e.without_url()),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }
}

/// Whether `status` is in the 2xx range.
pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
