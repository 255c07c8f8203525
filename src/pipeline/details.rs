use crate::api::DealSource;
use crate::model::Offer;
use crate::report::render_offer;
use tracing::{debug, warn};

/// Stage 3: fetches each offer's detail and renders it. Offers that sold out
/// since the offer list was fetched are dropped.
pub async fn render_details(source: &dyn DealSource, offers: &[Offer]) -> Vec<String> {
    let mut fragments = Vec::new();

    for offer in offers {
        debug!("Fetching detail for offer {} ({})", offer.id, offer.title);
        let detail = match source.fetch_offer_detail(&offer.id).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Detail fetch for offer {} failed: {}", offer.id, e);
                continue;
            }
        };

        if detail.sold_out {
            debug!("Offer sold out since listing: {}", detail.title);
            continue;
        }

        match render_offer(&detail) {
            Ok(fragment) => fragments.push(fragment),
            Err(e) => warn!("Cannot render offer {}: {}", offer.id, e),
        }
    }

    fragments
}
