//! Content and state layer for a bilingual (English/Arabic) law-firm site.
//!
//! Two collaborating pieces, both consumed by a UI layer that stays out
//! of this crate:
//!
//! - [`gateway::ContentGateway`]: typed, single-attempt reads against a
//!   headless CMS (hero slides, team members, testimonials, services)
//!   plus the one newsletter-subscription write. Read failures collapse
//!   into `None` at the boundary; the write keeps a structured error.
//! - [`store::SiteStore`]: the per-session state container — navigation
//!   toggles and the subscription lifecycle — mutated only through its
//!   action methods.
//!
//! ```rust,ignore
//! let config = CmsConfig::from_env()?;
//! let gateway = ContentGateway::new(config)?;
//! let (home, heroes) = tokio::join!(gateway.home_page(), gateway.heroes(Locale::Ar));
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod locale;
pub mod media;
pub mod models;
pub mod store;

pub use config::CmsConfig;
pub use error::SubscribeError;
pub use gateway::ContentGateway;
pub use locale::Locale;
pub use store::SiteStore;
