use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "assistant-relay")]
#[command(about = "Chat relay and terminal client for the Watson Assistant message API", long_about = None)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP relay exposing POST /api/message
    Serve(ServeArgs),
    /// Chat with the assistant through a running relay
    Chat(ChatArgs),
}

#[derive(ClapArgs, Debug, Default, Clone)]
pub struct ServeArgs {
    #[arg(short = 'p', long = "port", help = "Port to bind the HTTP server to")]
    pub port: Option<u16>,

    #[arg(long = "bind", help = "Address to bind the HTTP server to")]
    pub bind_address: Option<String>,

    #[arg(long = "workspace-id", help = "Assistant workspace to address")]
    pub workspace_id: Option<String>,

    #[arg(
        long = "assistant-url",
        help = "Assistant service base URL (e.g., https://gateway.watsonplatform.net/assistant/api)"
    )]
    pub assistant_url: Option<String>,

    #[arg(long = "insecure", help = "Skip TLS certificate verification upstream")]
    pub insecure: bool,

    #[arg(
        long = "no-fallback",
        help = "Return upstream responses without deriving a fallback output.text"
    )]
    pub no_fallback: bool,

    #[arg(long = "ping", help = "Send a test message upstream before serving")]
    pub ping: bool,
}

#[derive(ClapArgs, Debug, Default, Clone)]
pub struct ChatArgs {
    #[arg(
        long = "relay-url",
        help = "Relay message endpoint (e.g., http://localhost:3000/api/message)"
    )]
    pub relay_url: Option<String>,

    #[arg(
        long = "query",
        help = "Page query string to seed client state from (e.g., '?vss=inspect')"
    )]
    pub query: Option<String>,

    #[arg(long = "vss", help = "Initial vehicle service status")]
    pub vss: Option<String>,

    #[arg(long = "no-open", help = "Print URLs instead of opening them in a browser")]
    pub no_open: bool,

    #[arg(short = 'v', long = "verbose", help = "Show client diagnostics")]
    pub verbose: bool,
}
