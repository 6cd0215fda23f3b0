//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::env;

use httpmock::MockServer;
use namecheap_provider::{
    DnsRecord, KEY_API_KEY, KEY_API_USER, KEY_CLIENT_IP, KEY_ENDPOINT, KEY_USERNAME,
    NamecheapCredentials, NamecheapProvider, RegistrarProvider,
};

/// Path the mock servers answer on.
pub const API_PATH: &str = "/xml.response";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Credentials pointing at `endpoint`.
pub fn test_credentials(endpoint: String) -> NamecheapCredentials {
    NamecheapCredentials {
        api_user: "apiuser".to_string(),
        api_key: "test-api-key".to_string(),
        user_name: "account".to_string(),
        client_ip: "192.0.2.10".to_string(),
        endpoint,
    }
}

/// A provider talking to `server`.
pub fn mock_provider(server: &MockServer) -> NamecheapProvider {
    NamecheapProvider::new(test_credentials(server.url(API_PATH)))
        .expect("test credentials are complete")
}

/// Successful envelope wrapping `body` as the command response.
pub fn ok_envelope(command: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <Warnings />
  <RequestedCommand>{command}</RequestedCommand>
  <CommandResponse Type="{command}">{body}</CommandResponse>
  <Server>TEST</Server>
  <GMTTimeDifference>--5:00</GMTTimeDifference>
  <ExecutionTime>0.01</ExecutionTime>
</ApiResponse>"#
    )
}

/// Error envelope with a single `Error` entry.
pub fn error_envelope(number: &str, message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="ERROR" xmlns="http://api.namecheap.com/xml.response">
  <Errors>
    <Error Number="{number}">{message}</Error>
  </Errors>
  <Warnings />
  <RequestedCommand />
</ApiResponse>"#
    )
}

/// `getHosts` body for the given `(id, name, type, address, ttl)` rows.
pub fn hosts_body(rows: &[(&str, &str, &str, &str, u32)]) -> String {
    let hosts: String = rows
        .iter()
        .map(|(id, name, kind, address, ttl)| {
            format!(
                r#"<host HostId="{id}" Name="{name}" Type="{kind}" Address="{address}" MXPref="10" TTL="{ttl}" AssociatedAppTitle="" FriendlyName="" IsActive="true" IsDDNSEnabled="false" />"#
            )
        })
        .collect();

    format!(
        r#"<DomainDNSGetHostsResult Domain="example.com" EmailType="" IsUsingOurDNS="true">{hosts}</DomainDNSGetHostsResult>"#
    )
}

/// `whoisguard.getList` body for the given `(id, domain, enabled)` rows.
pub fn whoisguard_body(rows: &[(&str, &str, bool)]) -> String {
    let entries: String = rows
        .iter()
        .map(|(id, domain, enabled)| {
            format!(
                r#"<Whoisguard WhoisguardID="{id}" DomainName="{domain}" Created="01/01/2020" Expires="01/01/2030" IsEnabled="{enabled}" />"#
            )
        })
        .collect();

    format!("<WhoisguardGetListResult>{entries}</WhoisguardGetListResult>")
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装真实 Provider 和测试域名
pub struct TestContext {
    pub provider: NamecheapProvider,
    pub domain: String,
}

impl TestContext {
    /// Build from `NC_*` variables and `TEST_DOMAIN`.
    pub fn from_env() -> Option<Self> {
        let map: HashMap<String, String> = [
            KEY_API_USER,
            KEY_API_KEY,
            KEY_USERNAME,
            KEY_CLIENT_IP,
            KEY_ENDPOINT,
        ]
        .iter()
        .filter_map(|key| env::var(key).ok().map(|v| ((*key).to_string(), v)))
        .collect();

        let provider = NamecheapProvider::new(NamecheapCredentials::from_map(&map)).ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        Some(Self { provider, domain })
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self) {
        let Ok(records) = self.provider.get_hosts(&self.domain).await else {
            return;
        };

        let ids: Vec<String> = records
            .iter()
            .filter(|r| r.name.starts_with("_test-"))
            .filter_map(|r: &DnsRecord| r.host_id.clone())
            .collect();

        if !ids.is_empty() {
            let _ = self.provider.delete_hosts(&self.domain, &ids).await;
        }
    }
}
