use anyhow::Context;
use clap::Parser;
use hac_scraper::logging::{init_logging, LoggerConfig};
use hac_scraper::{log_info, utils};
use hac_scraper::{Client, Config, Credentials, Scraper};
use options::{Command, Options};

mod options;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Options::parse();

    let config = if args.config.exists() {
        Config::from_file(&args.config)
            .with_context(|| format!("loading {}", args.config.display()))?
    } else {
        Config::default()
    };
    init_logging(LoggerConfig::from_config(&config.logging)?)?;

    let base_url = args
        .url
        .or_else(|| config.portal.base_url.clone())
        .context("no portal URL: pass --url or set portal.base_url")?;
    let username = std::env::var("HAC_USERNAME").context("HAC_USERNAME is not set")?;
    let password = std::env::var("HAC_PASSWORD").context("HAC_PASSWORD is not set")?;
    let credentials = Credentials::new(base_url, username, password)?;

    let client = Client::builder()
        .portal(&config.portal)?
        .header("accept", "text/html,application/xhtml+xml")?
        .chrome_impersonation(true)
        .build()?;
    let scraper = Scraper::new(&client, config.portal.clone(), credentials);

    log_info!("[main] Running against {}", scraper.credentials().base_url());

    let result = match args.command {
        Command::Name => serde_json::to_value(scraper.fetch_identity().await)?,
        Command::Classes => serde_json::to_value(scraper.fetch_course_summaries().await)?,
        Command::Detail {
            class_name,
            marking_period: Some(marking_period),
        } => serde_json::to_value(
            scraper
                .fetch_course_detail(&class_name, marking_period)
                .await,
        )?,
        Command::Detail {
            class_name,
            marking_period: None,
        } => serde_json::to_value(scraper.fetch_current_course_detail(&class_name).await)?,
    };

    match &args.out {
        Some(path) => utils::save_json(&result, path)?,
        None => utils::write_json(&result, std::io::stdout().lock())?,
    }

    Ok(())
}
