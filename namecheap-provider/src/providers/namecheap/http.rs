//! Namecheap HTTP 请求方法

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, is_success};
use crate::traits::RegistrarProvider;
use crate::types::DomainName;
use crate::utils::log_sanitizer::{redact_params, truncate_for_log};
use crate::xml::{self, XmlNode};

use super::{CMD_DNS_SET_HOSTS, NamecheapProvider};

impl NamecheapProvider {
    /// Authentication parameters plus `Command`, in wire order.
    fn base_params(&self, command: &str) -> Vec<(String, String)> {
        let cred = &self.credentials;
        vec![
            ("ApiUser".to_string(), cred.api_user.clone()),
            ("ApiKey".to_string(), cred.api_key.clone()),
            ("UserName".to_string(), cred.user_name.clone()),
            ("ClientIp".to_string(), cred.client_ip.clone()),
            ("Command".to_string(), command.to_string()),
        ]
    }

    /// Send one command and return its `CommandResponse`.
    ///
    /// `setHosts` goes out as a form POST since its parameter list grows with
    /// the record count; every other command is a GET.
    pub(crate) async fn request(
        &self,
        command: &str,
        domain: Option<&DomainName>,
        extra: Vec<(String, String)>,
    ) -> Result<XmlNode> {
        // 1. 组装参数
        let mut params = self.base_params(command);
        if let Some(domain) = domain {
            params.push(("SLD".to_string(), domain.sld.clone()));
            params.push(("TLD".to_string(), domain.tld.clone()));
        }
        params.extend(extra);

        log::debug!("[{}] Params: {}", self.id(), redact_params(&params));

        // 2. 发送请求
        let endpoint = self.endpoint();
        let (method, request) = if command == CMD_DNS_SET_HOSTS {
            ("POST", self.client.post(endpoint).form(&params))
        } else {
            ("GET", self.client.get(endpoint).query(&params))
        };

        let (status, body) =
            HttpUtils::execute_request(request, self.id(), method, command).await?;

        // 3. 解析响应
        match xml::decode(&body) {
            Ok(response) => Ok(response),
            Err(ProviderError::ParseError { .. }) if !is_success(status) => {
                let err = ProviderError::NetworkError {
                    detail: format!("HTTP {status}: {}", truncate_for_log(body.trim())),
                };
                log::error!("[{}] {command} failed: {err}", self.id());
                Err(err)
            }
            Err(err) => {
                if err.is_expected() {
                    log::warn!("[{}] {command} failed: {err}", self.id());
                } else {
                    log::error!("[{}] {command} failed: {err}", self.id());
                }
                Err(err)
            }
        }
    }
}
