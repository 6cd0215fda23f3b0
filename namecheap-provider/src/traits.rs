use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{DnsRecord, DomainSummary, PaginationParams, PrivacyStatus, PrivacySubscription};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawApiError {
    /// 错误码（`Number` 或 `Code`）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

impl From<RawApiError> for ProviderError {
    fn from(raw: RawApiError) -> Self {
        Self::Api {
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Registrar operations.
///
/// Implementors supply the single-request primitives. The composite operations
/// (`add_hosts`, `delete_hosts`, the privacy helpers) are default methods built on
/// top of them, so their semantics are identical for every implementation.
#[async_trait]
pub trait RegistrarProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取域名列表 (分页)
    async fn list_domains(&self, params: &PaginationParams) -> Result<Vec<DomainSummary>>;

    /// Every host record of `domain`, in API order.
    async fn get_hosts(&self, domain: &str) -> Result<Vec<DnsRecord>>;

    /// Replace the whole host record set of `domain` with `records`.
    ///
    /// This is the only write primitive the API offers: anything not in
    /// `records` is gone afterwards. Record order defines the wire index.
    async fn set_hosts(&self, domain: &str, records: &[DnsRecord]) -> Result<()>;

    /// Every WhoisGuard subscription in the account.
    async fn get_whoisguard_list(&self) -> Result<Vec<PrivacySubscription>>;

    /// Turn on the subscription with the given id.
    async fn enable_whoisguard(&self, whoisguard_id: &str) -> Result<()>;

    /// Turn off the subscription with the given id.
    async fn disable_whoisguard(&self, whoisguard_id: &str) -> Result<()>;

    /// Append `new_records` to the current set and write the result back.
    ///
    /// Read and write are two separate calls; a change made by someone else in
    /// between is overwritten.
    async fn add_hosts(&self, domain: &str, new_records: &[DnsRecord]) -> Result<()> {
        let mut records = self.get_hosts(domain).await?;
        log::debug!(
            "[{}] {domain}: {} existing record(s), adding {}",
            self.id(),
            records.len(),
            new_records.len()
        );
        records.extend_from_slice(new_records);
        self.set_hosts(domain, &records).await
    }

    /// Drop every record whose host id is in `host_ids` and write the rest back.
    ///
    /// Unknown ids are ignored. Same read/write caveat as [`add_hosts`](Self::add_hosts).
    async fn delete_hosts(&self, domain: &str, host_ids: &[String]) -> Result<()> {
        let ids: HashSet<&str> = host_ids.iter().map(String::as_str).collect();
        let current = self.get_hosts(domain).await?;
        let before = current.len();

        let remaining: Vec<DnsRecord> = current
            .into_iter()
            .filter(|r| !r.host_id.as_deref().is_some_and(|id| ids.contains(id)))
            .collect();

        log::debug!(
            "[{}] {domain}: removing {} of {before} record(s)",
            self.id(),
            before - remaining.len()
        );
        self.set_hosts(domain, &remaining).await
    }

    /// The subscription attached to exactly `domain`, if any.
    async fn find_subscription(&self, domain: &str) -> Result<Option<PrivacySubscription>> {
        let list = self.get_whoisguard_list().await?;
        Ok(list.into_iter().find(|s| s.domain_name == domain))
    }

    async fn get_whois_status(&self, domain: &str) -> Result<PrivacyStatus> {
        let subscription = self.find_subscription(domain).await?;
        Ok(PrivacyStatus::from(subscription.as_ref()))
    }

    /// Enable privacy for `domain`; does nothing when it is already on.
    async fn enable_privacy(&self, domain: &str) -> Result<()> {
        let subscription = self.find_subscription(domain).await?.ok_or_else(|| {
            ProviderError::NoSubscription {
                domain: domain.to_string(),
            }
        })?;

        if subscription.is_enabled {
            log::info!("[{}] privacy already enabled for {domain}", self.id());
            return Ok(());
        }
        self.enable_whoisguard(&subscription.whoisguard_id).await
    }

    /// Disable privacy for `domain`; does nothing when it is already off.
    async fn disable_privacy(&self, domain: &str) -> Result<()> {
        let subscription = self.find_subscription(domain).await?.ok_or_else(|| {
            ProviderError::NoSubscription {
                domain: domain.to_string(),
            }
        })?;

        if !subscription.is_enabled {
            log::info!("[{}] privacy already disabled for {domain}", self.id());
            return Ok(());
        }
        self.disable_whoisguard(&subscription.whoisguard_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// In-memory registrar that records every primitive call.
    #[derive(Default)]
    struct Recorder {
        hosts: Vec<DnsRecord>,
        subscriptions: Vec<PrivacySubscription>,
        calls: Mutex<Vec<String>>,
        written: Mutex<Option<Vec<DnsRecord>>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }
    }

    #[async_trait]
    impl RegistrarProvider for Recorder {
        fn id(&self) -> &'static str {
            "recorder"
        }

        async fn list_domains(&self, _params: &PaginationParams) -> Result<Vec<DomainSummary>> {
            self.record("list_domains");
            Ok(Vec::new())
        }

        async fn get_hosts(&self, _domain: &str) -> Result<Vec<DnsRecord>> {
            self.record("get_hosts");
            Ok(self.hosts.clone())
        }

        async fn set_hosts(&self, _domain: &str, records: &[DnsRecord]) -> Result<()> {
            self.record("set_hosts");
            *self.written.lock().unwrap() = Some(records.to_vec());
            Ok(())
        }

        async fn get_whoisguard_list(&self) -> Result<Vec<PrivacySubscription>> {
            self.record("get_whoisguard_list");
            Ok(self.subscriptions.clone())
        }

        async fn enable_whoisguard(&self, whoisguard_id: &str) -> Result<()> {
            self.record(format!("enable:{whoisguard_id}"));
            Ok(())
        }

        async fn disable_whoisguard(&self, whoisguard_id: &str) -> Result<()> {
            self.record(format!("disable:{whoisguard_id}"));
            Ok(())
        }
    }

    fn host(id: &str, name: &str) -> DnsRecord {
        DnsRecord {
            host_id: Some(id.to_string()),
            ..DnsRecord::new(name, "A", "192.0.2.1").with_ttl(1800)
        }
    }

    fn subscription(domain: &str, id: &str, enabled: bool) -> PrivacySubscription {
        PrivacySubscription {
            domain_name: domain.to_string(),
            whoisguard_id: id.to_string(),
            is_enabled: enabled,
            expires: "01/01/2030".to_string(),
        }
    }

    #[tokio::test]
    async fn add_hosts_appends_after_existing() {
        let p = Recorder {
            hosts: vec![host("1", "@"), host("2", "www")],
            ..Default::default()
        };
        let new = DnsRecord::new("mail", "mx", "mx.example.com").with_mx_pref(10);

        p.add_hosts("example.com", std::slice::from_ref(&new))
            .await
            .unwrap();

        assert_eq!(p.calls(), vec!["get_hosts", "set_hosts"]);
        let written = p.written.lock().unwrap().clone().unwrap();
        assert_eq!(written, vec![host("1", "@"), host("2", "www"), new]);
    }

    #[tokio::test]
    async fn delete_hosts_keeps_order_and_ignores_unknown_ids() {
        let p = Recorder {
            hosts: vec![host("1", "a"), host("2", "b"), host("3", "c"), host("4", "d")],
            ..Default::default()
        };

        p.delete_hosts(
            "example.com",
            &["3".to_string(), "1".to_string(), "999".to_string()],
        )
        .await
        .unwrap();

        assert_eq!(p.calls(), vec!["get_hosts", "set_hosts"]);
        let written = p.written.lock().unwrap().clone().unwrap();
        assert_eq!(written, vec![host("2", "b"), host("4", "d")]);
    }

    #[tokio::test]
    async fn delete_hosts_keeps_records_without_id() {
        let local = DnsRecord::new("x", "TXT", "hello");
        let p = Recorder {
            hosts: vec![local.clone(), host("1", "a")],
            ..Default::default()
        };

        p.delete_hosts("example.com", &["1".to_string()])
            .await
            .unwrap();

        let written = p.written.lock().unwrap().clone().unwrap();
        assert_eq!(written, vec![local]);
    }

    #[tokio::test]
    async fn whois_status_requires_exact_match() {
        let p = Recorder {
            subscriptions: vec![
                subscription("example.com", "10", true),
                subscription("other.net", "11", false),
            ],
            ..Default::default()
        };

        assert_eq!(
            p.get_whois_status("example.com").await.unwrap(),
            PrivacyStatus::Enabled
        );
        assert_eq!(
            p.get_whois_status("other.net").await.unwrap(),
            PrivacyStatus::Disabled
        );
        assert_eq!(
            p.get_whois_status("www.example.com").await.unwrap(),
            PrivacyStatus::NotPresent
        );
        assert_eq!(
            p.get_whois_status("EXAMPLE.COM").await.unwrap(),
            PrivacyStatus::NotPresent
        );
    }

    #[tokio::test]
    async fn enable_privacy_without_subscription_fails() {
        let p = Recorder::default();
        let err = p.enable_privacy("example.com").await.unwrap_err();
        assert!(
            matches!(err, ProviderError::NoSubscription { ref domain } if domain == "example.com"),
            "unexpected error: {err:?}"
        );
        assert_eq!(p.calls(), vec!["get_whoisguard_list"]);
    }

    #[tokio::test]
    async fn enable_privacy_already_enabled_is_noop() {
        let p = Recorder {
            subscriptions: vec![subscription("example.com", "10", true)],
            ..Default::default()
        };
        p.enable_privacy("example.com").await.unwrap();
        assert_eq!(p.calls(), vec!["get_whoisguard_list"]);
    }

    #[tokio::test]
    async fn enable_privacy_issues_one_call_keyed_by_id() {
        let p = Recorder {
            subscriptions: vec![subscription("example.com", "10", false)],
            ..Default::default()
        };
        p.enable_privacy("example.com").await.unwrap();
        assert_eq!(p.calls(), vec!["get_whoisguard_list", "enable:10"]);
    }

    #[tokio::test]
    async fn disable_privacy_mirrors_enable() {
        let p = Recorder {
            subscriptions: vec![
                subscription("on.com", "1", true),
                subscription("off.com", "2", false),
            ],
            ..Default::default()
        };

        p.disable_privacy("off.com").await.unwrap();
        p.disable_privacy("on.com").await.unwrap();
        let err = p.disable_privacy("none.com").await.unwrap_err();

        assert!(matches!(err, ProviderError::NoSubscription { .. }));
        assert_eq!(
            p.calls(),
            vec![
                "get_whoisguard_list",
                "get_whoisguard_list",
                "disable:1",
                "get_whoisguard_list",
            ]
        );
    }

    #[test]
    fn raw_api_error_into_provider_error() {
        let err: ProviderError = RawApiError::with_code("2019166", "Domain not found").into();
        assert_eq!(err.to_string(), "Domain not found (Code: 2019166)");
        let err: ProviderError = RawApiError::new("plain").into();
        assert_eq!(err.to_string(), "plain");
    }
}
