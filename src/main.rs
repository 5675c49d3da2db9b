use clap::Parser;
use connect_four::{init_logging, MatchDirector, DEFAULT_BIND};
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: String,

    /// Treat a peer that sends nothing for this many seconds as
    /// disconnected. Off by default, like the reference server.
    #[arg(long)]
    idle_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let director =
        MatchDirector::bind(&cli.bind, cli.idle_timeout.map(Duration::from_secs)).await?;
    println!("Connect Four Server is Running");
    director.run().await
}
