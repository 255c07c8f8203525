// Keyword string parsing: "dell precision; latitude" -> [[dell, precision], [latitude]]
use crate::keywords::{KeywordError, KeywordGroup, KeywordPattern, KeywordSet};

pub const GROUP_DELIMITER: char = ';';

/// Parses a raw keyword string. Groups are separated by `;`, words inside a
/// group by whitespace. Empty groups and blank words are dropped.
pub fn parse_keyword_set(raw: &str) -> Result<KeywordSet, KeywordError> {
    let mut groups = Vec::new();

    for chunk in raw.split(GROUP_DELIMITER) {
        let patterns = chunk
            .split_whitespace()
            .map(KeywordPattern::new)
            .collect::<Result<Vec<_>, _>>()?;

        if !patterns.is_empty() {
            groups.push(KeywordGroup::new(patterns));
        }
    }

    if groups.is_empty() {
        return Err(KeywordError::Empty);
    }

    Ok(KeywordSet::new(groups))
}
