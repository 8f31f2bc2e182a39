//! Walks the picker flow against a live back-office API
//!
//! Expands the first catalog product, selects it, confirms the selection,
//! and submits the association delta for one promotion.
//!
//! Usage:
//! ```text
//! API_URL=http://localhost:8080 API_TOKEN=... PROMOTION_ID=1 \
//!     cargo run --example picker_flow
//! ```

use std::sync::Arc;

use promo_console::{ClientConfig, EditSession, PromotionApi};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let base_url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let promotion_id: i64 = std::env::var("PROMOTION_ID")
        .unwrap_or_else(|_| "1".to_string())
        .parse()?;

    let mut config = ClientConfig::new(base_url);
    if let Ok(token) = std::env::var("API_TOKEN") {
        config = config.with_token(token);
    }
    let client = Arc::new(config.build_http_client());

    let promotion = client.get_promotion(promotion_id).await?;
    tracing::info!(name = %promotion.display_name, "editing promotion");

    let visible = client.fetch_product_page(0, 20, None).await?;
    let mut session = EditSession::edit(client.clone(), promotion_id).await?;

    if let Some(first) = visible.first() {
        if let Err(e) = session.toggle_expanded(&first.id).await {
            // Recoverable: the row renders as "no variants"
            tracing::warn!(product_id = %first.id, error = %e, "variant load failed");
        }
        session.toggle_product(&first.id);
    }

    let confirmed = session.confirm_selection(&visible);
    tracing::info!(rows = confirmed.len(), "selection confirmed");

    match session.submit(promotion_id).await {
        Ok(()) => tracing::info!("associations submitted"),
        Err(e) => tracing::warn!(error = %e, "submit failed"),
    }

    Ok(())
}
