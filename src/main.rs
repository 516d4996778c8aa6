use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use lexdeck::server;
use lexdeck::words::{JsonFileStore, ReviewService};

#[derive(Parser)]
#[command(name = "lexdeck", about = "Weighted flashcard practice server", version)]
struct Cli {
    /// JSON file holding the word list
    #[arg(long, default_value = "words.json")]
    data_file: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("serving words from {}", cli.data_file.display());

    let store = JsonFileStore::new(cli.data_file);
    let service = Arc::new(ReviewService::new(store));

    server::serve(cli.bind, service).await?;
    Ok(())
}
