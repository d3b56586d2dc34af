use std::collections::HashMap;

use crate::error::Error;
use crate::format::{self, OutputFormat};
use crate::records::DomainRecord;

/// Ordered container of canonical records of one kind. Merging across
/// profiles and browsers is plain concatenation; overlapping scans keep one
/// entry per source row, no deduplication.
#[derive(Debug)]
pub struct OutputCollection<R: DomainRecord> {
    entries: Vec<R>,
}

impl<R: DomainRecord> OutputCollection<R> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn append(&mut self, records: impl IntoIterator<Item = R>) {
        self.entries.extend(records);
    }

    pub fn extend(&mut self, other: OutputCollection<R>) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[R] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stable sort solely by timestamp; records with equal timestamps keep
    /// their original relative order.
    pub fn sort(&mut self, descending: bool) {
        if descending {
            self.entries.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        } else {
            self.entries.sort_by(|a, b| a.timestamp().cmp(&b.timestamp()));
        }
    }

    /// Group records by the URL's authority component. URLs without an
    /// authority (or that do not parse) land under the empty-string key.
    /// Collection order is preserved within each group.
    pub fn group_by_domain(&self) -> HashMap<String, Vec<&R>> {
        let mut groups: HashMap<String, Vec<&R>> = HashMap::new();
        for record in &self.entries {
            groups.entry(domain_of(record.url())).or_default().push(record);
        }
        groups
    }

    pub fn formatted(&self, format: OutputFormat) -> Result<String, Error> {
        format::render(self, format)
    }
}

impl<R: DomainRecord> Default for OutputCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn domain_of(url: &str) -> String {
    let Ok(parsed) = url::Url::parse(url) else {
        return String::new();
    };
    let Some(host) = parsed.host_str() else {
        return String::new();
    };
    match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
