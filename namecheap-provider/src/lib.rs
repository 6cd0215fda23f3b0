//! # namecheap-provider
//!
//! A small client for the Namecheap XML API covering the account's domain list,
//! DNS host records and WhoisGuard (domain privacy) subscriptions.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//!
//! use namecheap_provider::{
//!     DnsRecord, NamecheapCredentials, NamecheapProvider, PaginationParams, RegistrarProvider,
//!     normalize_ttl,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Credentials, validated before any request is made
//!     let credentials = NamecheapCredentials::from_map(&HashMap::from([
//!         ("NC_API_USER".to_string(), "alice".to_string()),
//!         ("NC_API_KEY".to_string(), "secret".to_string()),
//!         ("NC_USERNAME".to_string(), "alice".to_string()),
//!         ("NC_CLIENT_IP".to_string(), "192.0.2.10".to_string()),
//!     ]));
//!     let provider = NamecheapProvider::new(credentials)?;
//!
//!     // 2. List domains
//!     for domain in provider.list_domains(&PaginationParams::default()).await? {
//!         println!("{} expires {}", domain.name, domain.expires);
//!     }
//!
//!     // 3. Append a record; the full host set is written back
//!     let record = DnsRecord::new("www", "cname", "example.net").with_ttl(normalize_ttl(Some("5m"))?);
//!     provider.add_hosts("example.com", &[record]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::Configuration`]: a credential is missing
//! - [`ProviderError::InvalidTtl`]: a TTL string was rejected
//! - [`ProviderError::Api`]: the API answered with an error envelope
//! - [`ProviderError::NoSubscription`]: privacy change requested for a domain without a subscription
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: transport failures
//!
//! Nothing is retried. See [`ProviderError`] for the full list.

mod error;
mod http_client;
mod providers;
mod traits;
mod ttl;
mod types;
mod utils;
mod xml;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export core trait
pub use traits::RegistrarProvider;

// Re-export types
pub use types::{
    DEFAULT_ENDPOINT, DnsRecord, DomainName, DomainSummary, KEY_API_KEY, KEY_API_USER,
    KEY_CLIENT_IP, KEY_ENDPOINT, KEY_USERNAME, NamecheapCredentials, PaginationParams,
    PrivacyStatus, PrivacySubscription,
};

pub use ttl::{AUTOMATIC_TTL, DEFAULT_TTL, normalize_ttl};

pub use xml::{XmlNode, decode};

pub use providers::{NamecheapProvider, NamecheapProviderBuilder};
