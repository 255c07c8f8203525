pub mod email;

pub use email::EmailNotifier;

use crate::model::NotifyError;

/// Delivers a rendered report. Delivery is best-effort; callers log failures.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send_report(&self, html: &str) -> Result<(), NotifyError>;
}
