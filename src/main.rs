use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;

use listing_browser::app::App;
use listing_browser::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("listing_browser=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Listing Browser");

    // Load configuration
    let config = Config::load()?;
    info!("Rendering {} into {}", config.data_source, config.output_path);

    let mut app = App::from_config(&config)?;
    app.bootstrap().await?;

    // Each stdin line is one input event: search <term>, sort <value>, reload, quit
    app.run(BufReader::new(tokio::io::stdin())).await?;

    info!("Listing Browser stopped");
    Ok(())
}
