use crate::model::{Event, FetchError, Offer, OfferDetail};

/// Read-only access to the deals catalog. Every call is a single best-effort
/// request; callers decide what a failure means for their item.
#[async_trait::async_trait]
pub trait DealSource: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError>;
    async fn fetch_event_offers(&self, event_id: &str) -> Result<Vec<Offer>, FetchError>;
    async fn fetch_offer_detail(&self, offer_id: &str) -> Result<OfferDetail, FetchError>;
}
