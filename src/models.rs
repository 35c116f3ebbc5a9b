//! Typed shapes for the CMS REST payloads.
//!
//! The CMS (Strapi v5) wraps every response in a `{data, meta}` envelope
//! and names fields in camelCase on the wire. `documentId` is the stable
//! identity shared by all locale variants of a record; `id` is per-variant
//! and may differ between the English and Arabic rows of the same content.
//! Unknown fields are ignored so editor-side schema additions never break
//! deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// The `{data, meta}` envelope every endpoint returns.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: ResponseMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMeta {
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// Named image-size variant the CMS pre-renders for each upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTier {
    Thumbnail,
    Small,
    Medium,
    Large,
}

impl ImageTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageTier::Thumbnail => "thumbnail",
            ImageTier::Small => "small",
            ImageTier::Medium => "medium",
            ImageTier::Large => "large",
        }
    }
}

/// One pre-rendered size of a media asset.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageFormat {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// The per-tier renditions, any of which may be absent for small uploads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageFormats {
    pub thumbnail: Option<ImageFormat>,
    pub small: Option<ImageFormat>,
    pub medium: Option<ImageFormat>,
    pub large: Option<ImageFormat>,
}

impl ImageFormats {
    pub fn get(&self, tier: ImageTier) -> Option<&ImageFormat> {
        match tier {
            ImageTier::Thumbnail => self.thumbnail.as_ref(),
            ImageTier::Small => self.small.as_ref(),
            ImageTier::Medium => self.medium.as_ref(),
            ImageTier::Large => self.large.as_ref(),
        }
    }
}

/// An uploaded image. `url` is the canonical rendition and always present;
/// tier lookup falls back to it, so URL resolution never fails.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// `null` in the API when no renditions were generated.
    #[serde(default)]
    pub formats: Option<ImageFormats>,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Content records
// ---------------------------------------------------------------------------

/// Single-type record holding the landing page's background and logo.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub id: i64,
    pub document_id: String,
    pub background: MediaAsset,
    pub logo: MediaAsset,
    pub published_at: DateTime<Utc>,
}

/// One slide of the landing-page hero carousel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: i64,
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub locale: Locale,
    #[serde(rename = "image", default)]
    pub images: Vec<MediaAsset>,
    #[serde(default)]
    pub localizations: Vec<HeroLocalization>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroLocalization {
    pub id: i64,
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub locale: Locale,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub locale: Locale,
    #[serde(default)]
    pub image: Option<MediaAsset>,
    #[serde(default)]
    pub localizations: Vec<TeamMemberLocalization>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberLocalization {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub locale: Locale,
}

/// A client testimonial.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub description: String,
    pub locale: Locale,
    #[serde(rename = "image", default)]
    pub images: Vec<MediaAsset>,
    #[serde(default)]
    pub localizations: Vec<ClientLocalization>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientLocalization {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub description: String,
    pub locale: Locale,
}

/// A practice area. The list endpoint returns `sections` shallow; the
/// detail endpoint populates each section's bullet items.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub locale: Locale,
    #[serde(rename = "services", default)]
    pub sections: Vec<ServiceSection>,
    #[serde(default)]
    pub localizations: Vec<ServiceLocalization>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSection {
    pub id: i64,
    pub heading: String,
    #[serde(default)]
    pub items: Vec<ServiceItem>,
}

impl ServiceSection {
    /// The section's bullet strings in CMS order.
    pub fn bullet_points(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.item.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceItem {
    pub id: i64,
    pub item: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocalization {
    pub id: i64,
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub locale: Locale,
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// Body of `POST /api/subscribers/`, nested under `data` as the CMS expects.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionRequest<'a> {
    pub data: SubscriptionPayload<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionPayload<'a> {
    pub email: &'a str,
}

impl<'a> SubscriptionRequest<'a> {
    pub fn new(email: &'a str) -> Self {
        Self {
            data: SubscriptionPayload { email },
        }
    }
}

/// What the CMS returns for a successful subscription.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionReceipt {
    pub id: i64,
    pub document_id: String,
    pub email: String,
}

/// The CMS error envelope on a rejected write.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: UpstreamError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamError {
    pub status: u16,
    pub name: String,
    pub message: String,
}
