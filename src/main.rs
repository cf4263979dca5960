use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use trivia::{db::Db, models::SeedData, names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL.
    #[clap(env, default_value = names::DEFAULT_DATABASE_URL)]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// JSON file with categories and questions, imported when the database has no categories.
    #[arg(short, long, env)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| names::DEFAULT_LOG_FILTER.to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(args.database_url).await?;

    if let Some(path) = args.seed {
        let contents = tokio::fs::read(&path)
            .await
            .wrap_err_with(|| format!("could not read seed file {}", path.display()))?;
        let data: SeedData =
            serde_json::from_slice(&contents).wrap_err("could not decode seed file")?;
        db.seed(data).await?;
    }

    let routes = trivia::router(AppState::new(db));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, routes).await?;

    Ok(())
}
