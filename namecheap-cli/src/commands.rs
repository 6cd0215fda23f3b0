//! Subcommand execution.
//!
//! Every failure is wrapped with the label the user sees in front of the
//! message, e.g. `Error listing domains: ...`.

use std::io::Write;

use anyhow::{Context, Result};
use namecheap_provider::{DnsRecord, PaginationParams, RegistrarProvider, normalize_ttl};

use crate::cli::Command;
use crate::output::{domains_table, hosts_table};

pub async fn run(
    provider: &dyn RegistrarProvider,
    command: &Command,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::DomainsList { page, size } => {
            let params = PaginationParams {
                page: *page,
                page_size: *size,
            };
            let domains = provider
                .list_domains(&params)
                .await
                .context("Error listing domains")?;
            domains_table(&domains).render(out)?;
        }

        Command::DnsList { domain } => {
            let records = provider
                .get_hosts(domain)
                .await
                .with_context(|| format!("Error fetching DNS records for {domain}"))?;
            hosts_table(&records).render(out)?;
        }

        Command::DnsAdd {
            domain,
            name,
            record_type,
            value,
            ttl,
            mx,
        } => {
            let label = || format!("Error adding DNS record for {domain}");

            let ttl = normalize_ttl(Some(ttl.as_str())).with_context(label)?;
            let mut record = DnsRecord::new(name, record_type, value).with_ttl(ttl);
            if let Some(mx) = mx {
                record = record.with_mx_pref(*mx);
            }

            provider
                .add_hosts(domain, &[record])
                .await
                .with_context(label)?;
            writeln!(out, "Record added.")?;
        }

        Command::DnsDelete { domain, host_ids } => {
            provider
                .delete_hosts(domain, host_ids)
                .await
                .with_context(|| format!("Error deleting DNS record(s) for {domain}"))?;
            writeln!(out, "Record(s) removed.")?;
        }

        Command::PrivacyStatus { domain } => {
            let status = provider
                .get_whois_status(domain)
                .await
                .with_context(|| format!("Error fetching privacy status for {domain}"))?;
            writeln!(out, "Privacy status for {domain}: {status}")?;
        }

        Command::PrivacyEnable { domain } => {
            provider
                .enable_privacy(domain)
                .await
                .with_context(|| format!("Error enabling privacy for {domain}"))?;
            writeln!(out, "Domain privacy enabled.")?;
        }

        Command::PrivacyDisable { domain } => {
            provider
                .disable_privacy(domain)
                .await
                .with_context(|| format!("Error disabling privacy for {domain}"))?;
            writeln!(out, "Domain privacy disabled.")?;
        }
    }

    Ok(())
}
