//! Namecheap `RegistrarProvider` implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::RegistrarProvider;
use crate::types::{DnsRecord, DomainName, DomainSummary, PaginationParams, PrivacySubscription};

use super::types::{domains_from_response, host_params, hosts_from_response, subscriptions_from_response};
use super::{
    CMD_DNS_GET_HOSTS, CMD_DNS_SET_HOSTS, CMD_DOMAINS_GET_LIST, CMD_WHOISGUARD_DISABLE,
    CMD_WHOISGUARD_ENABLE, CMD_WHOISGUARD_GET_LIST, NamecheapProvider,
};

#[async_trait]
impl RegistrarProvider for NamecheapProvider {
    fn id(&self) -> &'static str {
        "namecheap"
    }

    async fn list_domains(&self, params: &PaginationParams) -> Result<Vec<DomainSummary>> {
        let extra = vec![
            ("Page".to_string(), params.page.to_string()),
            ("PageSize".to_string(), params.page_size.to_string()),
            ("SortBy".to_string(), "NAME".to_string()),
        ];

        let response = self.request(CMD_DOMAINS_GET_LIST, None, extra).await?;
        Ok(domains_from_response(&response))
    }

    async fn get_hosts(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        let domain = DomainName::parse(domain)?;
        let response = self
            .request(CMD_DNS_GET_HOSTS, Some(&domain), Vec::new())
            .await?;
        hosts_from_response(&response)
    }

    async fn set_hosts(&self, domain: &str, records: &[DnsRecord]) -> Result<()> {
        let domain = DomainName::parse(domain)?;
        let response = self
            .request(CMD_DNS_SET_HOSTS, Some(&domain), host_params(records))
            .await?;

        let reported = response
            .child("DomainDNSSetHostsResult")
            .and_then(|r| r.field("IsSuccess"));
        if reported.is_some_and(|v| v != "true") {
            log::warn!("[{}] {domain}: setHosts reported IsSuccess={reported:?}", self.id());
        }
        Ok(())
    }

    async fn get_whoisguard_list(&self) -> Result<Vec<PrivacySubscription>> {
        let response = self
            .request(CMD_WHOISGUARD_GET_LIST, None, Vec::new())
            .await?;
        Ok(subscriptions_from_response(&response))
    }

    async fn enable_whoisguard(&self, whoisguard_id: &str) -> Result<()> {
        let extra = vec![("WhoisguardID".to_string(), whoisguard_id.to_string())];
        self.request(CMD_WHOISGUARD_ENABLE, None, extra).await?;
        Ok(())
    }

    async fn disable_whoisguard(&self, whoisguard_id: &str) -> Result<()> {
        let extra = vec![("WhoisguardID".to_string(), whoisguard_id.to_string())];
        self.request(CMD_WHOISGUARD_DISABLE, None, extra).await?;
        Ok(())
    }
}
