use crate::api::traits::DealSource;
use crate::config::ApiConfig;
use crate::model::{Event, EventOffers, FetchError, Offer, OfferDetail};
use reqwest::{Client, redirect};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const EVENT_FIELDS: &str = "Id,Title,SubTitle,Site,StartDate,EndDate";
const OFFER_FIELDS: &str = "Offers.Id,Offers.Title,Offers.SoldOut,Offers.PercentageRemaining";
const DETAIL_FIELDS: &str = "Id,Features,Items,Url,SoldOut,Specs,Subtitle,Title,Photos";

pub struct WootClient {
    client: Client,
    base_url: String,
    api_key: String,
    site: String,
    event_type: String,
}

impl WootClient {
    pub fn new(api: &ApiConfig, api_key: &str) -> Result<Self, FetchError> {
        // Redirects are reported, not followed.
        let mut builder = Client::builder()
            .user_agent(concat!("WootSniper/", env!("CARGO_PKG_VERSION")))
            .redirect(redirect::Policy::none());
        if let Some(secs) = api.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            site: api.site.clone(),
            event_type: api.event_type.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_redirection() {
            let location = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("<no location>")
                .to_string();
            warn!("{} redirected [{}] to {}", url, status, location);
            return Err(FetchError::Redirect(location));
        }
        if !status.is_success() {
            warn!("{} responded [{}]", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn map_transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Http(e.to_string())
    }
}

#[async_trait::async_trait]
impl DealSource for WootClient {
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError> {
        self.get_json(
            "events.json",
            &[
                ("site", self.site.as_str()),
                ("eventType", self.event_type.as_str()),
                ("select", EVENT_FIELDS),
            ],
        )
        .await
    }

    async fn fetch_event_offers(&self, event_id: &str) -> Result<Vec<Offer>, FetchError> {
        let event: EventOffers = self
            .get_json(&format!("events/{}.json", event_id), &[("select", OFFER_FIELDS)])
            .await?;
        Ok(event.offers)
    }

    async fn fetch_offer_detail(&self, offer_id: &str) -> Result<OfferDetail, FetchError> {
        self.get_json(&format!("offers/{}.json", offer_id), &[("select", DETAIL_FIELDS)])
            .await
    }
}
