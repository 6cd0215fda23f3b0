//! Namecheap Provider

mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::NamecheapCredentials;

pub(crate) const CMD_DOMAINS_GET_LIST: &str = "namecheap.domains.getList";
pub(crate) const CMD_DNS_GET_HOSTS: &str = "namecheap.domains.dns.getHosts";
pub(crate) const CMD_DNS_SET_HOSTS: &str = "namecheap.domains.dns.setHosts";
pub(crate) const CMD_WHOISGUARD_GET_LIST: &str = "namecheap.whoisguard.getList";
pub(crate) const CMD_WHOISGUARD_ENABLE: &str = "namecheap.whoisguard.enable";
pub(crate) const CMD_WHOISGUARD_DISABLE: &str = "namecheap.whoisguard.disable";

/// Namecheap Provider
///
/// Credentials are checked when the provider is built and never change afterwards.
#[derive(Debug)]
pub struct NamecheapProvider {
    pub(crate) client: Client,
    pub(crate) credentials: NamecheapCredentials,
}

/// Namecheap Provider Builder
pub struct NamecheapProviderBuilder {
    credentials: NamecheapCredentials,
    client: Option<Client>,
}

impl NamecheapProviderBuilder {
    fn new(credentials: NamecheapCredentials) -> Self {
        Self {
            credentials,
            client: None,
        }
    }

    /// Point the provider at another endpoint (e.g. the sandbox).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.credentials.endpoint = endpoint.into();
        self
    }

    /// Use a preconfigured HTTP client instead of the default one.
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Validate the credentials, then create the provider. No request is sent.
    pub fn build(self) -> Result<NamecheapProvider> {
        self.credentials.validate()?;

        let client = match self.client {
            Some(client) => client,
            None => create_http_client()?,
        };

        log::debug!(
            "[namecheap] provider ready for {} at {}",
            self.credentials.user_name,
            self.credentials.endpoint
        );

        Ok(NamecheapProvider {
            client,
            credentials: self.credentials,
        })
    }
}

impl NamecheapProvider {
    pub fn new(credentials: NamecheapCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: NamecheapCredentials) -> NamecheapProviderBuilder {
        NamecheapProviderBuilder::new(credentials)
    }

    /// Endpoint every request is sent to.
    pub fn endpoint(&self) -> &str {
        &self.credentials.endpoint
    }
}
