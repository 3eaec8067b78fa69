mod store;
mod transport;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lab_web::config::ApiConfig;
use lab_web::net::{ApiClient, ApiError, AuthService};
use reqwest::cookie::Jar;
use serde_json::Value;

use crate::store::FileCredentials;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "lab", about = "Lab requisition API auth CLI")]
struct Cli {
    /// API base URL; falls back to http://localhost:8000 when unset or empty.
    #[arg(long, env = "LAB_API_URL")]
    base_url: Option<String>,

    #[arg(long, env = "LAB_TOKEN_FILE", default_value = ".lab-token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "LAB_PASSWORD")]
        password: String,
    },
    Logout,
    Whoami,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let auth = build_auth(cli.base_url.as_deref(), cli.token_file)?;

    match cli.command {
        Command::Login { username, password } => {
            let body = auth.login(&username, &password).await?;
            print_json(&body)
        }
        Command::Logout => {
            auth.logout().await?;
            println!("ok");
            Ok(())
        }
        Command::Whoami => print_json(&auth.get_current_user().await?),
    }
}

fn build_auth(base_url: Option<&str>, token_file: PathBuf) -> Result<AuthService, CliError> {
    let config = ApiConfig::resolve(base_url);
    let url = reqwest::Url::parse(&config.base_url)
        .map_err(|e| CliError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
    tracing::debug!(base_url = %config.base_url, "api client configured");

    let jar = Arc::new(Jar::default());
    let transport = ReqwestTransport::new(jar.clone())?;
    let credentials = FileCredentials::new(token_file, jar, url);
    credentials.restore_cookies();
    let client = ApiClient::new(config, Arc::new(transport), Arc::new(credentials));
    Ok(AuthService::new(client))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
