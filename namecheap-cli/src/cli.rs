//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Minimal Namecheap DNS and Domain Privacy helper.
#[derive(Debug, Parser)]
#[command(name = "namecheap-manager")]
#[command(version)]
#[command(about = "Minimal Namecheap DNS and Domain Privacy helper")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON config file with `NC_*` keys (default: ./config.json, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List all domains in your Namecheap account
    #[command(name = "domains:list")]
    DomainsList {
        /// Page number
        #[arg(long, value_name = "N", default_value_t = 1)]
        page: u32,
        /// Page size 1-100
        #[arg(long, value_name = "N", default_value_t = 100)]
        size: u32,
    },

    /// List DNS records for a domain
    #[command(name = "dns:list")]
    DnsList { domain: String },

    /// Add a new DNS record
    #[command(name = "dns:add")]
    DnsAdd {
        domain: String,
        name: String,
        #[arg(value_name = "TYPE")]
        record_type: String,
        value: String,
        /// TTL: auto | 1m | 5m | 20m | 30m | 60m | <seconds>
        #[arg(long, default_value = "30m")]
        ttl: String,
        /// MX preference
        #[arg(long, value_name = "PREF")]
        mx: Option<u16>,
    },

    /// Delete DNS record(s) by HostID
    #[command(name = "dns:delete")]
    DnsDelete {
        domain: String,
        #[arg(value_name = "HOST_ID", required = true, num_args = 1..)]
        host_ids: Vec<String>,
    },

    /// Show domain privacy status for a domain
    #[command(name = "privacy:status")]
    PrivacyStatus { domain: String },

    /// Enable domain privacy (WhoisGuard) for a domain
    #[command(name = "privacy:enable")]
    PrivacyEnable { domain: String },

    /// Disable domain privacy (WhoisGuard) for a domain
    #[command(name = "privacy:disable")]
    PrivacyDisable { domain: String },
}
