use anyhow::Result;
use tracing::{info, warn};

use lawsite_cms::{CmsConfig, ContentGateway, Locale};

/// Smoke-run against the configured CMS: fetch the landing-page content
/// for one locale and report what came back. Lets operators verify CMS
/// connectivity and content shape without a browser.
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lawsite_cms=info".parse()?),
        )
        .init();

    let locale = std::env::var("CMS_LOCALE")
        .ok()
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or_default();

    let config = CmsConfig::from_env()?;
    info!(
        "Checking CMS at {} (locale {}, revalidate {}s)",
        config.base_url, locale, config.revalidate_secs
    );

    let gateway = ContentGateway::new(config)?;

    // The landing page issues these concurrently and waits for all to
    // settle before rendering; mirror that here.
    let (home, heroes, team, clients, services) = tokio::join!(
        gateway.home_page(),
        gateway.heroes(locale),
        gateway.team_members(locale),
        gateway.clients(locale),
        gateway.services(locale),
    );

    match home {
        Some(home) => info!("home page ok (background {})", home.background.name),
        None => warn!("home page unavailable, UI would render the fallback"),
    }

    report("hero slides", heroes.map(|v| v.len()));
    report("team members", team.map(|v| v.len()));
    report("client testimonials", clients.map(|v| v.len()));

    if let Some(services) = &services {
        report("services", Some(services.len()));
        if let Some(first) = services.first() {
            match gateway.service_detail(&first.document_id, locale).await {
                Some(detail) => info!(
                    "service detail ok: {} ({} sections)",
                    detail.title,
                    detail.sections.len()
                ),
                None => warn!("service detail unavailable for {}", first.document_id),
            }
        }
    } else {
        report("services", None);
    }

    Ok(())
}

fn report(what: &str, count: Option<usize>) {
    match count {
        Some(count) => info!("{} ok ({} records)", what, count),
        None => warn!("{} unavailable, UI would render the fallback", what),
    }
}
