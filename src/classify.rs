use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::decode::Certificate;

/// The classified hostnames for one lookup. Each list is duplicate-free and
/// keeps first-seen order across all input records. Field order here is also
/// the JSON output order.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedResult {
    pub wildcards: Vec<String>,
    pub subdomains: Vec<String>,
}

impl ClassifiedResult {
    pub fn is_empty(&self) -> bool {
        self.wildcards.is_empty() && self.subdomains.is_empty()
    }
}

/// Flatten the name fields of all records into the two hostname lists.
///
/// Names are split on newlines, trimmed, and dropped when blank. A `*.`
/// prefix routes a name to the wildcard list, everything else to the plain
/// list; deduplication is per-list via a membership set.
pub fn classify(certs: &[Certificate]) -> ClassifiedResult {
    let mut result = ClassifiedResult::default();
    let mut seen_wildcards: HashSet<String> = HashSet::new();
    let mut seen_subdomains: HashSet<String> = HashSet::new();

    for cert in certs {
        for name in cert.name_value.split('\n') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if name.starts_with("*.") {
                if seen_wildcards.insert(name.to_string()) {
                    result.wildcards.push(name.to_string());
                }
            } else if seen_subdomains.insert(name.to_string()) {
                result.subdomains.push(name.to_string());
            }
        }
    }

    result
}
