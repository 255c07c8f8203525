use crate::api::DealSource;
use crate::keywords::KeywordSet;
use crate::matcher::find_match;
use crate::model::Event;
use crate::pipeline::tally::MatchTally;
use tracing::{debug, warn};

/// Stage 1: fetches the event list and keeps events whose title matches.
/// Response order is preserved.
pub async fn collect_events(
    source: &dyn DealSource,
    keywords: &KeywordSet,
    tally: &mut MatchTally,
) -> Vec<Event> {
    debug!("Fetching events...");
    let events = match source.fetch_events().await {
        Ok(events) => events,
        Err(e) => {
            warn!("Event list fetch failed: {}", e);
            return Vec::new();
        }
    };
    debug!("Fetched {} events", events.len());

    let mut matched = Vec::new();
    for event in events {
        match find_match(keywords, &event.title) {
            Some(group) => {
                debug!("Event matched [{}]: {}", group.label(), event.title);
                tally.record(group);
                matched.push(event);
            }
            None => debug!("Event skipped: {}", event.title),
        }
    }

    matched
}
