use tracing_subscriber::EnvFilter;

use fitlog_tracking::pipeline::train_and_track;
use fitlog_tracking::{TrackingClient, TrackingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = TrackingConfig::from_env();
    let client = TrackingClient::connect(&config)?;

    let report = train_and_track(&client).await?;

    println!(
        "{} {:?}",
        report.logged_model.model_id, report.logged_model.params
    );
    println!(
        "{} {:?}",
        report.updated_model.model_id, report.updated_model.metrics
    );

    Ok(())
}
