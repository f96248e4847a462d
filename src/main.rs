use clap::Parser;
use ridex::core::config::{self, CliOverrides, EnvOverrides, RidexConfig};
use ridex::core::theme::ThemeKind;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "ridex", about = "Browse and rent vehicles from the terminal")]
struct Args {
    /// Vehicle feed URL (overrides config and RIDEX_FEED_URL)
    #[arg(long)]
    feed_url: Option<String>,

    /// Color theme: light or dark
    #[arg(long, value_parser = parse_theme)]
    theme: Option<ThemeKind>,
}

fn parse_theme(s: &str) -> Result<ThemeKind, String> {
    ThemeKind::parse(s).ok_or_else(|| format!("unknown theme '{s}' (expected light or dark)"))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to ridex.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("ridex.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        RidexConfig::default()
    });
    let cli = CliOverrides {
        feed_url: args.feed_url,
        theme: args.theme,
    };
    let resolved = config::resolve(&file_config, &EnvOverrides::from_env(), &cli);

    log::info!(
        "RideX starting up (feed: {}, theme: {})",
        resolved.feed_url,
        resolved.theme
    );

    ridex::tui::run(resolved)
}
