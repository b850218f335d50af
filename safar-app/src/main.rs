use anyhow::{bail, Context};
use safar_dispatch::mock::MockPlatform;
use safar_dispatch::{PipelineSettings, SubmissionPipeline};
use safar_shared::models::submission::{BookingSubmission, EnquirySubmission};
use safar_store::app_config::Config;
use safar_store::JsonFileStore;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: safar-app <booking|enquiry> <submission.json>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safar=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    let mut args = std::env::args().skip(1);
    let kind = args.next().context(USAGE)?;
    let path = args.next().context(USAGE)?;
    let payload = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read submission file {}", path))?;

    let platform = Arc::new(platform_profile(&config.dispatch.platform)?);
    let store = Arc::new(JsonFileStore::new(&config.storage.path)?);
    let pipeline = SubmissionPipeline::new(
        platform.clone(),
        store,
        PipelineSettings::from(&config),
    );

    tracing::info!(
        "Dispatching {} submission on the {} profile",
        kind,
        config.dispatch.platform
    );

    let receipt = match kind.as_str() {
        "booking" => {
            let submission: BookingSubmission = serde_json::from_str(&payload)?;
            pipeline.submit_booking(&submission).await?
        }
        "enquiry" => {
            let submission: EnquirySubmission = serde_json::from_str(&payload)?;
            pipeline.submit_enquiry(&submission).await?
        }
        other => bail!("unknown submission kind: {} ({})", other, USAGE),
    };

    println!(
        "record {} stored, sent={}",
        receipt.record_id, receipt.sent
    );
    for call in platform.calls() {
        println!("platform: {:?}", call);
    }

    Ok(())
}

fn platform_profile(name: &str) -> anyhow::Result<MockPlatform> {
    Ok(match name {
        "desktop" => MockPlatform::desktop(),
        "mobile" => MockPlatform::mobile_without_app(),
        "mobile-app" => MockPlatform::mobile_with_app(),
        other => bail!("unknown platform profile: {}", other),
    })
}
