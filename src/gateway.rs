//! Content Gateway: typed reads and the one write against the CMS.
//!
//! Every read is a single attempt with no retry and no cache; the
//! revalidation window in [`CmsConfig`] tells the embedding layer when to
//! re-fetch. Read failures of any kind (connection, non-2xx, bad body)
//! collapse into `None` with a logged diagnostic and never propagate.
//! The subscription write keeps the CMS error envelope intact so the UI
//! can show a specific message.

use anyhow::{bail, Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::CmsConfig;
use crate::error::SubscribeError;
use crate::locale::Locale;
use crate::media;
use crate::models::{
    ApiResponse, Client, ErrorEnvelope, HeroSlide, HomePage, ImageTier, MediaAsset, Service,
    SubscriptionReceipt, SubscriptionRequest, TeamMember,
};

pub struct ContentGateway {
    client: reqwest::Client,
    base: Url,
    config: CmsConfig,
}

impl ContentGateway {
    pub fn new(config: CmsConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .with_context(|| format!("invalid CMS base URL: {}", config.base_url))?;
        if base.cannot_be_a_base() {
            bail!("CMS base URL must be an http(s) origin: {}", config.base_url);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base,
            config,
        })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// Resolve an asset's URL at the requested tier against this CMS origin.
    pub fn image_url(&self, asset: &MediaAsset, tier: ImageTier) -> String {
        media::best_image_url(asset, tier, &self.config.base_url)
    }

    /// `GET /api/home-page?populate=*` — landing-page background and logo.
    pub async fn home_page(&self) -> Option<HomePage> {
        let url = self.endpoint(&["api", "home-page"], &[("populate", "*")]);
        self.fetch("home page", url).await
    }

    /// `GET /api/heroes?locale=&populate=*` — hero carousel slides.
    pub async fn heroes(&self, locale: Locale) -> Option<Vec<HeroSlide>> {
        let url = self.endpoint(
            &["api", "heroes"],
            &[("locale", locale.as_str()), ("populate", "*")],
        );
        self.fetch("hero slides", url).await
    }

    /// `GET /api/team-members?locale=&populate=*`
    pub async fn team_members(&self, locale: Locale) -> Option<Vec<TeamMember>> {
        let url = self.endpoint(
            &["api", "team-members"],
            &[("locale", locale.as_str()), ("populate", "*")],
        );
        self.fetch("team members", url).await
    }

    /// `GET /api/clients?locale=&populate=*` — client testimonials.
    pub async fn clients(&self, locale: Locale) -> Option<Vec<Client>> {
        let url = self.endpoint(
            &["api", "clients"],
            &[("locale", locale.as_str()), ("populate", "*")],
        );
        self.fetch("clients", url).await
    }

    /// `GET /api/services?populate=*&locale=` — practice areas, shallow.
    pub async fn services(&self, locale: Locale) -> Option<Vec<Service>> {
        let url = self.endpoint(
            &["api", "services"],
            &[("populate", "*"), ("locale", locale.as_str())],
        );
        self.fetch("services", url).await
    }

    /// `GET /api/services/{documentId}?populate[services][populate]=*&locale=`
    /// — one practice area with its sections' bullet items populated.
    pub async fn service_detail(&self, document_id: &str, locale: Locale) -> Option<Service> {
        let url = self.endpoint(
            &["api", "services", document_id],
            &[
                ("populate[services][populate]", "*"),
                ("locale", locale.as_str()),
            ],
        );
        self.fetch("service detail", url).await
    }

    /// `POST /api/subscribers/` with `{"data":{"email":...}}`.
    ///
    /// Unlike the reads, failures here stay structured: the CMS error
    /// envelope becomes [`SubscribeError::Upstream`] so callers can tell
    /// a duplicate email apart from a validation failure.
    pub async fn subscribe(&self, email: &str) -> Result<SubscriptionReceipt, SubscribeError> {
        let url = self.endpoint(&["api", "subscribers", ""], &[]);

        let response = self
            .client
            .post(url)
            .json(&SubscriptionRequest::new(email))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The CMS reports its own status/name/message; fall back to the
            // raw transport status when the body is not its error envelope.
            return Err(match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => SubscribeError::Upstream {
                    status: envelope.error.status,
                    name: envelope.error.name,
                    message: envelope.error.message,
                },
                Err(_) => SubscribeError::Upstream {
                    status: status.as_u16(),
                    name: "HttpError".to_string(),
                    message: body,
                },
            });
        }

        let envelope: ApiResponse<SubscriptionReceipt> = serde_json::from_str(&body)?;
        debug!(
            "subscribed {} (documentId {})",
            envelope.data.email, envelope.data.document_id
        );
        Ok(envelope.data)
    }

    /// Read-path boundary: any failure becomes `None` plus a diagnostic.
    async fn fetch<T: DeserializeOwned>(&self, what: &str, url: Url) -> Option<T> {
        match self.request(url).await {
            Ok(envelope) => {
                if let Some(pagination) = &envelope.meta.pagination {
                    debug!("fetched {} ({} total)", what, pagination.total);
                }
                Some(envelope.data)
            }
            Err(err) => {
                error!("failed to fetch {}: {:#}", what, err);
                None
            }
        }
    }

    async fn request<T: DeserializeOwned>(&self, url: Url) -> Result<ApiResponse<T>> {
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .context("failed to send request to the CMS")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("CMS error ({}): {}", status, body);
        }

        response.json().await.context("failed to parse CMS response")
    }

    /// Join path segments onto the configured origin. Segments are
    /// percent-encoded, so opaque documentIds are safe to splice in.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}
