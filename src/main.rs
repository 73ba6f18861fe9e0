use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use reel::core::config;
use reel::tui;

#[derive(Parser)]
#[command(name = "reel", about = "Terminal movie catalog browser for the OMDb API")]
struct Args {
    /// OMDb API key (overrides the config file and OMDB_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the TUI owns the terminal, so never stdout
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("reel.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        config::ReelConfig::default()
    });
    let resolved = config::resolve(&file_config, args.api_key.as_deref());

    log::info!("Reel starting up (base url: {})", resolved.base_url);

    tui::run(resolved)
}
