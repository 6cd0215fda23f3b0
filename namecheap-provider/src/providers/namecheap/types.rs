//! Namecheap 响应映射

use std::str::FromStr;

use crate::error::{ProviderError, Result};
use crate::providers::common::parse_bool;
use crate::types::{DnsRecord, DomainSummary, PrivacySubscription};
use crate::xml::XmlNode;

// ============ Response → model ============

fn text_field(node: &XmlNode, name: &str) -> String {
    node.field(name).unwrap_or_default().to_string()
}

/// Optional numeric field; absent or blank is `None`, garbage is a parse error.
fn numeric_field<T: FromStr>(node: &XmlNode, name: &str) -> Result<Option<T>> {
    match node.field(name).map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ProviderError::ParseError {
                detail: format!("{} {name} is not a number: {raw:?}", node.name()),
            }),
    }
}

/// `DomainGetListResult/Domain` entries.
pub(crate) fn domains_from_response(response: &XmlNode) -> Vec<DomainSummary> {
    let Some(result) = response.child("DomainGetListResult") else {
        return Vec::new();
    };

    result
        .children("Domain")
        .into_iter()
        .map(|d| DomainSummary {
            id: text_field(d, "ID"),
            name: text_field(d, "Name"),
            created: text_field(d, "Created"),
            expires: text_field(d, "Expires"),
            is_expired: parse_bool(d.field("IsExpired")),
            is_locked: parse_bool(d.field("IsLocked")),
            auto_renew: parse_bool(d.field("AutoRenew")),
            whois_guard: text_field(d, "WhoisGuard"),
            is_premium: parse_bool(d.field("IsPremium")),
            is_our_dns: parse_bool(d.field("IsOurDNS")),
        })
        .collect()
}

/// `DomainDNSGetHostsResult/host` entries (either case).
pub(crate) fn hosts_from_response(response: &XmlNode) -> Result<Vec<DnsRecord>> {
    let Some(result) = response.child("DomainDNSGetHostsResult") else {
        return Ok(Vec::new());
    };

    result
        .children_any(&["host", "Host"])
        .into_iter()
        .map(|h| {
            Ok(DnsRecord {
                host_id: h.field("HostId").map(str::to_string),
                name: text_field(h, "Name"),
                record_type: text_field(h, "Type"),
                address: text_field(h, "Address"),
                ttl: numeric_field(h, "TTL")?,
                mx_pref: numeric_field(h, "MXPref")?,
            })
        })
        .collect()
}

/// `WhoisguardGetListResult/Whoisguard` entries.
///
/// The id comes from `WhoisguardID`, `WhoisguardId` or `ID`, whichever is set.
/// Entries without `IsEnabled` fall back to `Status="enabled"`.
pub(crate) fn subscriptions_from_response(response: &XmlNode) -> Vec<PrivacySubscription> {
    let Some(result) = response.child("WhoisguardGetListResult") else {
        return Vec::new();
    };

    result
        .children("Whoisguard")
        .into_iter()
        .map(|w| {
            let whoisguard_id = ["WhoisguardID", "WhoisguardId", "ID"]
                .iter()
                .find_map(|key| w.field(key).filter(|v| !v.is_empty()))
                .unwrap_or_default()
                .to_string();

            let is_enabled = match w.field("IsEnabled") {
                Some(flag) => parse_bool(Some(flag)),
                None => w
                    .field("Status")
                    .is_some_and(|s| s.eq_ignore_ascii_case("enabled")),
            };

            PrivacySubscription {
                domain_name: text_field(w, "DomainName"),
                whoisguard_id,
                is_enabled,
                expires: text_field(w, "Expires"),
            }
        })
        .collect()
}

// ============ Model → request ============

/// Indexed `setHosts` parameters, 1-based in record order.
///
/// `MXPref{n}` and `TTL{n}` are only sent when set; a TTL of 0 is sent.
pub(crate) fn host_params(records: &[DnsRecord]) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(records.len() * 5);

    for (i, record) in records.iter().enumerate() {
        let n = i + 1;
        params.push((format!("HostName{n}"), record.name.clone()));
        params.push((format!("RecordType{n}"), record.record_type.clone()));
        params.push((format!("Address{n}"), record.address.clone()));
        if let Some(mx_pref) = record.mx_pref {
            params.push((format!("MXPref{n}"), mx_pref.to_string()));
        }
        if let Some(ttl) = record.ttl {
            params.push((format!("TTL{n}"), ttl.to_string()));
        }
    }

    params
}
