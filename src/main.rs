use anyhow::Result;
use dogwalk::Application;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Dogwalk application");

    let app = Application::new().await?;
    app.run().await?;

    Ok(())
}
