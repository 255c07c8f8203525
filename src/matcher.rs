use crate::keywords::{KeywordGroup, KeywordSet};

/// Returns the first group, in declaration order, whose keywords are all
/// found in `text`. Scanning stops at the first satisfied group.
pub fn find_match<'a>(keywords: &'a KeywordSet, text: &str) -> Option<&'a KeywordGroup> {
    keywords
        .groups()
        .iter()
        .find(|group| group_matches(group, text))
}

fn group_matches(group: &KeywordGroup, text: &str) -> bool {
    group.patterns().iter().all(|pattern| pattern.is_found_in(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(raw: &str) -> KeywordSet {
        KeywordSet::parse(raw).unwrap()
    }

    #[test]
    fn matches_first_group() {
        let keywords = set("dell precision; latitude");
        let group = find_match(&keywords, "Dell Precision 5550 Laptop").unwrap();
        assert_eq!(group.label(), "dell precision");
    }

    #[test]
    fn matches_second_group() {
        let keywords = set("dell precision; latitude");
        let group = find_match(&keywords, "Latitude 7420").unwrap();
        assert_eq!(group.label(), "latitude");
    }

    #[test]
    fn no_group_satisfied() {
        let keywords = set("dell precision; latitude");
        assert!(find_match(&keywords, "Inspiron 15").is_none());
        // one word of the group is not enough
        assert!(find_match(&keywords, "Dell XPS 13").is_none());
    }

    #[test]
    fn word_order_in_text_does_not_matter() {
        let keywords = set("precision dell");
        assert!(find_match(&keywords, "Refurbished DELL laptop, Precision line").is_some());
    }

    #[test]
    fn first_satisfied_group_wins() {
        let keywords = set("thinkpad; latitude; 7420");
        let group = find_match(&keywords, "Latitude 7420").unwrap();
        assert_eq!(group.label(), "latitude");
    }

    #[test]
    fn keywords_are_patterns() {
        let keywords = set("e74[0-9]0");
        assert!(find_match(&keywords, "Dell Latitude E7470").is_some());
        assert!(find_match(&keywords, "Dell Latitude E7270").is_none());
    }
}
