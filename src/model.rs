// Core structs: Event, Offer, OfferDetail and the error types shared across stages
use serde::Deserialize;
use thiserror::Error;

/// A promotional event as returned by the event list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Single-event response; only the nested offers are selected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventOffers {
    #[serde(default)]
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub percentage_remaining: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub url: String,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub specs: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub sale_price: f64,
    #[serde(default)]
    pub list_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Photo {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("redirected to {0}")]
    Redirect(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("offer {0} has no photo")]
    MissingPhoto(String),
    #[error("offer {0} has no item")]
    MissingItem(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid address {0}")]
    Address(String),
    #[error("no recipients configured")]
    NoRecipients,
    #[error("failed to build message: {0}")]
    Message(String),
    #[error("SMTP error: {0}")]
    Smtp(String),
}
