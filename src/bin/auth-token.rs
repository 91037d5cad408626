use std::path::PathBuf;

use anyhow::{Context, Result};
use auth_token_client::auth::{SignInRequest, TokenClient};
use auth_token_client::config::loader;
use auth_token_client::config::settings::ClientConfig;
use auth_token_client::utils::logging::{self, LogLevel};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config file; client settings come from the environment when absent
    #[arg(short, long, env = "AUTH_TOKEN_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "AUTH_TOKEN_EMAIL")]
    email: String,
    #[arg(long, env = "AUTH_TOKEN_PASSWORD", hide_env_values = true)]
    password: String,
    /// do not ask the endpoint for a refresh token
    #[arg(long)]
    no_secure_token: bool,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // -------------------------------
    // 1. Load config
    // -------------------------------

    let (client_config, logging_config) = match &args.config {
        Some(path) => {
            let service_config = loader::file_to_config(path).await?;
            (service_config.auth, service_config.logging)
        }
        None => (ClientConfig::from_env(), None),
    };
    logging::init_logging(&logging::resolve_logging_config(
        logging_config.as_ref(),
        args.log_level,
    ));

    // -------------------------------
    // 2. Exchange credentials
    // -------------------------------

    let client = TokenClient::create(&client_config).context("failed to create token client")?;
    info!(endpoint_host = %client.endpoint().authority(), "token client ready");

    let request = SignInRequest::new(args.email, args.password, !args.no_secure_token);
    let token = client.token(Some(&request)).await.inspect_err(|err| {
        error!(
            upstream = err.upstream_message().unwrap_or_default(),
            "token exchange failed: {err}"
        );
    })?;

    println!("{token}");
    Ok(())
}
