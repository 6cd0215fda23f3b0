//! Plain-text tables for list commands.

use std::io::{self, Write};

use namecheap_provider::{DnsRecord, DomainSummary};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Column-aligned table; widths follow the display width of each cell.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.width());
                }
            }
        }
        widths
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if self.rows.is_empty() {
            return writeln!(out, "(no rows)");
        }

        let widths = self.widths();
        write_line(out, &self.headers, &widths)?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(out, &rule, &widths)?;

        for row in &self.rows {
            write_line(out, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line(out: &mut impl Write, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    writeln!(out, "{}", line.trim_end())
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn domains_table(domains: &[DomainSummary]) -> Table {
    let mut table = Table::new(&[
        "id",
        "name",
        "created",
        "expires",
        "isExpired",
        "isLocked",
        "autoRenew",
        "whoisGuard",
        "isPremium",
        "isOurDNS",
    ]);

    for d in domains {
        table.push_row(vec![
            d.id.clone(),
            d.name.clone(),
            d.created.clone(),
            d.expires.clone(),
            d.is_expired.to_string(),
            d.is_locked.to_string(),
            d.auto_renew.to_string(),
            d.whois_guard.clone(),
            d.is_premium.to_string(),
            d.is_our_dns.to_string(),
        ]);
    }
    table
}

pub fn hosts_table(records: &[DnsRecord]) -> Table {
    let mut table = Table::new(&["hostId", "name", "type", "address", "mxPref", "ttl"]);

    for r in records {
        table.push_row(vec![
            optional(r.host_id.as_deref()),
            r.name.clone(),
            r.record_type.clone(),
            r.address.clone(),
            optional(r.mx_pref),
            optional(r.ttl),
        ]);
    }
    table
}
