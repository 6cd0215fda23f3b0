use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// Production API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.namecheap.com/xml.response";

// ============ Pagination ============

/// Pagination parameters for `namecheap.domains.getList`.
///
/// Values are passed to the API unchanged. Pages are 1-indexed.
///
/// # Default
///
/// The default is `page = 1, page_size = 100` (the API maximum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 100,
        }
    }
}

// ============ Domain Types ============

/// A domain name split the way the API addresses it.
///
/// `"example.co.uk"` becomes `sld = "example"`, `tld = "co.uk"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    /// Second-level label.
    pub sld: String,
    /// Everything after the first dot.
    pub tld: String,
}

impl DomainName {
    /// Split on the first `.` after stripping a trailing root dot.
    pub fn parse(domain: &str) -> Result<Self> {
        let name = domain.trim().trim_end_matches('.');

        match name.split_once('.') {
            Some((sld, tld)) if !sld.is_empty() && !tld.is_empty() => Ok(Self {
                sld: sld.to_string(),
                tld: tld.to_string(),
            }),
            _ => Err(ProviderError::InvalidParameter {
                param: "domain".to_string(),
                detail: format!("'{domain}' is not a registrable domain name"),
            }),
        }
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.sld, self.tld)
    }
}

/// A domain in the account, as listed by `namecheap.domains.getList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSummary {
    /// Namecheap domain ID.
    pub id: String,
    /// Fully qualified domain name.
    pub name: String,
    /// Creation date as reported (`MM/DD/YYYY`).
    pub created: String,
    /// Expiry date as reported (`MM/DD/YYYY`).
    pub expires: String,
    pub is_expired: bool,
    pub is_locked: bool,
    pub auto_renew: bool,
    /// WhoisGuard state string (`ENABLED`, `NOTPRESENT`, ...), passed through.
    pub whois_guard: String,
    pub is_premium: bool,
    /// Whether the domain uses Namecheap's own nameservers.
    #[serde(rename = "isOurDNS")]
    pub is_our_dns: bool,
}

// ============ DNS Record Types ============

/// A host record.
///
/// Records read from the API carry a `host_id`; records built locally do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Remote-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    /// Host name (`"@"`, `"www"`, ...).
    pub name: String,
    /// Record type, upper case (`A`, `AAAA`, `CNAME`, `MX`, `TXT`, `URL`, ...).
    pub record_type: String,
    /// Record value.
    pub address: String,
    /// TTL in seconds; `Some(0)` is "Automatic".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// MX preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_pref: Option<u16>,
}

impl DnsRecord {
    /// A new, not yet written record. The type is upper-cased.
    pub fn new(
        name: impl Into<String>,
        record_type: impl AsRef<str>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            host_id: None,
            name: name.into(),
            record_type: record_type.as_ref().to_uppercase(),
            address: address.into(),
            ttl: None,
            mx_pref: None,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn with_mx_pref(mut self, mx_pref: u16) -> Self {
        self.mx_pref = Some(mx_pref);
        self
    }
}

// ============ WhoisGuard Types ============

/// A WhoisGuard (domain privacy) subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySubscription {
    /// Domain the subscription is attached to (may be empty for unassigned ones).
    pub domain_name: String,
    /// Subscription identifier used by enable/disable.
    pub whoisguard_id: String,
    pub is_enabled: bool,
    /// Expiry date as reported.
    pub expires: String,
}

/// Privacy state of one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrivacyStatus {
    Enabled,
    Disabled,
    /// No subscription is attached to the domain.
    NotPresent,
}

impl PrivacyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "ENABLED",
            Self::Disabled => "DISABLED",
            Self::NotPresent => "NOTPRESENT",
        }
    }
}

impl From<Option<&PrivacySubscription>> for PrivacyStatus {
    fn from(subscription: Option<&PrivacySubscription>) -> Self {
        match subscription {
            Some(s) if s.is_enabled => Self::Enabled,
            Some(_) => Self::Disabled,
            None => Self::NotPresent,
        }
    }
}

impl fmt::Display for PrivacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Credential Types ============

/// Configuration key for the API user.
pub const KEY_API_USER: &str = "NC_API_USER";
/// Configuration key for the API key.
pub const KEY_API_KEY: &str = "NC_API_KEY";
/// Configuration key for the account user name.
pub const KEY_USERNAME: &str = "NC_USERNAME";
/// Configuration key for the whitelisted client IP.
pub const KEY_CLIENT_IP: &str = "NC_CLIENT_IP";
/// Configuration key for the endpoint override.
pub const KEY_ENDPOINT: &str = "NC_ENDPOINT";

/// Static credentials attached to every call.
///
/// Not serializable, so the API key can only leave the process as a request
/// parameter.
#[derive(Clone, PartialEq, Eq)]
pub struct NamecheapCredentials {
    pub api_user: String,
    pub api_key: String,
    pub user_name: String,
    pub client_ip: String,
    /// API endpoint URL.
    pub endpoint: String,
}

impl NamecheapCredentials {
    /// Build from a flat key/value map keyed by `NC_*` names.
    ///
    /// Missing keys become empty strings and are reported by [`validate`](Self::validate);
    /// a missing endpoint falls back to [`DEFAULT_ENDPOINT`].
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let get = |key: &str| map.get(key).cloned().unwrap_or_default();
        let endpoint = map
            .get(KEY_ENDPOINT)
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            api_user: get(KEY_API_USER),
            api_key: get(KEY_API_KEY),
            user_name: get(KEY_USERNAME),
            client_ip: get(KEY_CLIENT_IP),
            endpoint,
        }
    }

    /// Fail with [`ProviderError::Configuration`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (KEY_API_USER, &self.api_user),
            (KEY_API_KEY, &self.api_key),
            (KEY_USERNAME, &self.user_name),
            (KEY_CLIENT_IP, &self.client_ip),
            (KEY_ENDPOINT, &self.endpoint),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ProviderError::Configuration {
                field: (*field).to_string(),
                detail: "check the environment or config.json".to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for NamecheapCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamecheapCredentials")
            .field("api_user", &self.api_user)
            .field("api_key", &"***")
            .field("user_name", &self.user_name)
            .field("client_ip", &self.client_ip)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
