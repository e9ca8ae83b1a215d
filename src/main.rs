use anyhow::Result;
use clap::Parser;

use company_employees::app;
use company_employees::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();
    app::init_logging(&settings.log_level)?;
    app::serve(settings).await
}
