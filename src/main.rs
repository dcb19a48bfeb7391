mod args;
mod auth;
mod config;
mod error;
mod exporter;
mod formatter;
mod gist_client;
mod logging;
mod models;
mod source;

use auth::{EnvTokenProvider, TokenProvider};
use clap::Parser;
use config::GistConfig;
use exporter::GistExporter;
use gist_client::{GistClient, GITHUB_API_BASE};
use source::FileConversationSource;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, Level};

/// Post a conversation to https://gist.github.com
///
/// Examples:
///   gist-export                              use the defaults
///   gist-export secret                       a secret gist
///   gist-export public yaml My custom title  custom everything
#[derive(Parser, Debug)]
#[command(name = "gist-export")]
#[command(verbatim_doc_comment)]
struct Args {
    /// [visibility [extension [title...]]]: visibility is public or secret,
    /// extension defaults to md, title defaults to the conversation title
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Conversation JSON file, `-` reads stdin
    #[arg(long, default_value = "-")]
    conversation: String,

    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Also print the raw content URL
    #[arg(long)]
    include_raw_link: bool,

    /// Leave system messages out of the gist
    #[arg(long)]
    exclude_system_messages: bool,

    #[arg(long, default_value = GITHUB_API_BASE)]
    api_base: String,

    /// trace, debug, info, warn, error
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[arg(long)]
    log_file: Option<String>,

    /// socks and http proxy, example: socks5://192.168.0.2:10080
    #[arg(long)]
    proxy: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let log_level = Level::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using INFO level.", args.log_level);
        Level::INFO
    });
    logging::init_logging(log_level, args.log_file.as_deref())?;

    let mut config = match &args.config {
        Some(path) => {
            let config = GistConfig::from_file(path)?;
            info!("Configuration loaded successfully from: {}", path);
            config
        }
        None => GistConfig::default(),
    };
    config.include_raw_link |= args.include_raw_link;
    config.exclude_system_messages |= args.exclude_system_messages;

    let client_builder = reqwest::Client::builder();
    let client_builder = if let Some(proxy) = &args.proxy {
        client_builder.proxy(reqwest::Proxy::all(proxy)?)
    } else {
        client_builder
    };
    let http_client = Arc::new(client_builder.build()?);

    let token = EnvTokenProvider::default().token();
    let client = GistClient::with_api_base(http_client, token, args.api_base);
    let exporter = GistExporter::new(config, client, FileConversationSource::new(args.conversation));

    let result = exporter.command_gist(&args.args.join(" ")).await;
    if result.success {
        println!("{}", result.message);
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{}", result.message);
        Ok(ExitCode::FAILURE)
    }
}
