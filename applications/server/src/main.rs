/// Cadence Server - playlist service over HTTP
use anyhow::Context;
use cadence_core::AlbumTrack;
use cadence_server::{api, config::ServerConfig, state::AppState};
use cadence_storage::SqliteStore;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence-server")]
#[command(about = "Cadence playlist service", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Add one track to the catalog
    AddTrack {
        /// Album identifier
        #[arg(long)]
        asin: String,
        /// Track number on the album
        #[arg(long, allow_hyphen_values = true)]
        track_number: i32,
        /// Album name
        #[arg(long)]
        album_name: Option<String>,
        /// Song title
        #[arg(long)]
        song_title: Option<String>,
    },
    /// Add every track in a JSON array file to the catalog
    ImportCatalog {
        /// Path to a JSON file holding `[{asin, trackNumber, albumName, songTitle}]`
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence_server=info,cadence_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddTrack {
            asin,
            track_number,
            album_name,
            song_title,
        } => {
            let track = AlbumTrack {
                asin,
                track_number,
                album_name,
                song_title,
            };
            add_track(config, track).await?;
        }
        Commands::ImportCatalog { path } => {
            import_catalog(config, &path).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteStore> {
    let store = SqliteStore::connect(&config.storage.database_url)
        .await
        .with_context(|| format!("Failed to open {}", config.storage.database_url))?;
    tracing::info!("Database connected");
    Ok(store)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Cadence Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = Arc::new(open_store(&config).await?);

    // One SQLite pool backs both stores
    let app_state = AppState::new(store.clone(), store);
    let app = api::router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_track(config: ServerConfig, track: AlbumTrack) -> anyhow::Result<()> {
    let store = open_store(&config).await?;

    if store.add_album_track(&track).await? {
        println!("Added {} #{}", track.asin, track.track_number);
    } else {
        println!(
            "{} #{} is already in the catalog; left unchanged",
            track.asin, track.track_number
        );
    }

    Ok(())
}

async fn import_catalog(config: ServerConfig, path: &std::path::Path) -> anyhow::Result<()> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let tracks: Vec<CatalogEntry> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let tracks: Vec<AlbumTrack> = tracks.into_iter().map(AlbumTrack::from).collect();

    let store = open_store(&config).await?;
    let inserted = store.import_album_tracks(&tracks).await?;

    tracing::info!(total = tracks.len(), inserted, "Catalog import finished");
    println!(
        "Imported {} new tracks ({} already present)",
        inserted,
        tracks.len() as u64 - inserted
    );

    Ok(())
}

/// Catalog file entry, camelCase like the HTTP API
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    asin: String,
    track_number: i32,
    #[serde(default)]
    album_name: Option<String>,
    #[serde(default)]
    song_title: Option<String>,
}

impl From<CatalogEntry> for AlbumTrack {
    fn from(entry: CatalogEntry) -> Self {
        AlbumTrack {
            asin: entry.asin,
            track_number: entry.track_number,
            album_name: entry.album_name,
            song_title: entry.song_title,
        }
    }
}
