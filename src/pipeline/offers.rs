use crate::api::DealSource;
use crate::keywords::KeywordSet;
use crate::matcher::find_match;
use crate::model::{Event, Offer};
use crate::pipeline::tally::MatchTally;
use tracing::{debug, warn};

/// Stage 2: fetches the offers of each matched event, one event at a time.
/// Sold-out offers are dropped before keyword matching. A failed fetch
/// contributes no offers.
pub async fn collect_offers(
    source: &dyn DealSource,
    events: &[Event],
    keywords: &KeywordSet,
    tally: &mut MatchTally,
) -> Vec<Offer> {
    let mut matched = Vec::new();

    for event in events {
        debug!("Fetching offers for event {} ({})", event.id, event.title);
        let offers = match source.fetch_event_offers(&event.id).await {
            Ok(offers) => offers,
            Err(e) => {
                warn!("Offer fetch for event {} failed: {}", event.id, e);
                continue;
            }
        };

        for offer in offers {
            if offer.sold_out {
                debug!("Offer sold out: {}", offer.title);
                continue;
            }
            match find_match(keywords, &offer.title) {
                Some(group) => {
                    debug!("Offer matched [{}]: {}", group.label(), offer.title);
                    tally.record(group);
                    matched.push(offer);
                }
                None => debug!("Offer skipped: {}", offer.title),
            }
        }
    }

    matched
}
