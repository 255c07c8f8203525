// One batch run: cascade, report, optional notification.
use crate::api::DealSource;
use crate::keywords::SearchKeywords;
use crate::notifier::Notifier;
use crate::pipeline::run_pipeline;
use crate::report::{build_document, build_summary};
use chrono::Local;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No offer survived the cascade; nothing was written or sent.
    NothingToReport,
    Reported { offers: usize, events: usize },
}

pub async fn run(
    keywords: &SearchKeywords,
    source: &dyn DealSource,
    notifier: Option<&dyn Notifier>,
    out: &mut dyn Write,
) -> Result<RunOutcome, AppError> {
    debug!("Event keywords: {}", keywords.events);
    debug!("Offer keywords: {}", keywords.offers);

    let outcome = run_pipeline(source, keywords).await;
    if outcome.is_empty() {
        info!("No matching offers, nothing to report.");
        return Ok(RunOutcome::NothingToReport);
    }

    let summary = build_summary(outcome.fragments.len(), outcome.matched_events, &outcome.tally);
    debug!("{}", summary);
    let document = build_document(&summary, &outcome.fragments, Local::now());

    out.write_all(document.as_bytes())?;
    out.flush()?;

    if let Some(notifier) = notifier {
        if let Err(e) = notifier.send_report(&document).await {
            warn!("Notification failed: {}", e);
        }
    }

    Ok(RunOutcome::Reported {
        offers: outcome.fragments.len(),
        events: outcome.matched_events,
    })
}
