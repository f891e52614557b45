use clap::arg;
use clap::command;
use clap::Parser;
use reqwest::Client;
use token_client::config::loader;
use token_client::config::settings::ClientSettings;
use token_client::utils::logging;
use token_client::utils::logging::LogLevel;
use token_client::{ClientOption, TokenClient};
use anyhow::{Context, Result};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// optional YAML settings file
    #[arg(short, long, env = "CONFIG")]
    config: Option<String>,
    /// bearer token, overrides the one from settings
    #[arg(short, long, env = "API_TOKEN", hide_env_values = true)]
    token: Option<String>,
    #[arg(long, env = "LOG_LEVEL" , value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load settings and init logging
    // -------------------------------

    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => loader::load_settings(path)?,
        None => ClientSettings::default(),
    };
    logging::run(&settings, args.log_level);

    let token = args
        .token
        .or_else(|| settings.token.clone())
        .context("no token given: pass --token, set API_TOKEN or add `token` to settings")?;

    // -------------------------------
    // 2. Create request client
    // -------------------------------

    let transport = Client::builder().timeout(settings.timeout()).build()?;
    let mut options = settings.client_options();
    options.push(ClientOption::transport(transport));
    let client = TokenClient::new(token, options);

    // -------------------------------
    // 3. Fetch
    // -------------------------------

    info!("fetching text from {}", client.endpoint());
    let body = client.fetch_text().await?;
    println!("{}", body.text);

    Ok(())
}
