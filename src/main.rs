use assistant_relay::chat::{self, ChatContext};
use assistant_relay::cli::{Args, ChatArgs, Command, ServeArgs};
use assistant_relay::config::{ChatConfig, ServerConfig};
use assistant_relay::error::Result;
use assistant_relay::logging::{init_logger, log_startup};
use assistant_relay::panel::{ConversationPanel, RelayClient};
use assistant_relay::relay::Relay;
use assistant_relay::server::start_server;
use clap::Parser;
use colored::*;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let result = match args.command {
        Command::Serve(serve_args) => serve(serve_args).await,
        Command::Chat(chat_args) => run_chat(chat_args).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::from_env_and_args(&args)?;

    init_logger(&config.log_level);
    log_startup(&config);

    let relay = Arc::new(Relay::new(
        config.assistant.clone(),
        config.fallback_text,
    )?);

    if args.ping {
        relay.ping().await;
    }

    start_server(&config, relay).await
}

async fn run_chat(args: ChatArgs) -> Result<()> {
    let config = ChatConfig::from_env_and_args(&args)?;

    // --vss is shorthand for a one-parameter query
    let query = match (&args.query, &args.vss) {
        (Some(query), _) => query.clone(),
        (None, Some(vss)) => format!("?vss={}", vss),
        (None, None) => String::new(),
    };

    let client = RelayClient::new(&config.relay_url)?;
    let panel = ConversationPanel::from_query(&query);

    chat::run(ChatContext {
        config,
        panel,
        client,
    })
    .await
}
