// Pipeline: events -> offers -> offer details, strictly sequential.

pub mod details;
pub mod events;
pub mod offers;
pub mod tally;

pub use tally::MatchTally;

use crate::api::DealSource;
use crate::keywords::SearchKeywords;

/// What survived the cascade.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub fragments: Vec<String>,
    pub matched_events: usize,
    pub tally: MatchTally,
}

impl PipelineOutcome {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

pub async fn run_pipeline(source: &dyn DealSource, keywords: &SearchKeywords) -> PipelineOutcome {
    let mut tally = MatchTally::new();

    let events = events::collect_events(source, &keywords.events, &mut tally).await;
    let offers = offers::collect_offers(source, &events, &keywords.offers, &mut tally).await;
    let fragments = details::render_details(source, &offers).await;

    tally.log();

    PipelineOutcome {
        fragments,
        matched_events: events.len(),
        tally,
    }
}
