use crate::keywords::KeywordGroup;
use std::collections::BTreeMap;
use tracing::debug;

/// How often each keyword group matched, across events and offers.
/// Keyed by the group label, so iteration is in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTally {
    counts: BTreeMap<String, usize>,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, group: &KeywordGroup) {
        *self.counts.entry(group.label()).or_insert(0) += 1;
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Distinct labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        self.counts.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn log(&self) {
        for (label, count) in self.iter() {
            debug!("Tally: '{}' matched {} time(s)", label, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordSet;

    #[test]
    fn counts_and_sorts_labels() {
        let set = KeywordSet::parse("poweredge; dell precision; latitude").unwrap();
        let groups = set.groups();
        let (poweredge, precision, latitude) = (&groups[0], &groups[1], &groups[2]);

        let mut tally = MatchTally::new();
        tally.record(poweredge);
        tally.record(latitude);
        tally.record(precision);
        tally.record(latitude);

        assert_eq!(tally.labels(), vec!["dell precision", "latitude", "poweredge"]);
        assert_eq!(tally.count("latitude"), 2);
        assert_eq!(tally.count("poweredge"), 1);
        assert_eq!(tally.count("thinkpad"), 0);
    }
}
