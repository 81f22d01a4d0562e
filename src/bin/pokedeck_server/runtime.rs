use super::*;

#[derive(Parser)]
#[command(name = "pokedeck-server")]
#[command(about = "In-memory collection backend (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Bearer token granted to the seeded admin user
    #[arg(long, default_value = "dev")]
    dev_token: String,
}

pub(super) async fn run() -> Result<()> {
    pokedeck::logging::init_stderr("info");
    let args = Args::parse();

    let dataset = dataset();
    let db = seed_db(&dataset, &args.dev_token);
    tracing::info!(
        users = db.users.len(),
        cards = db.cards.len(),
        catalog = db.loaded.len(),
        "seeded in-memory database"
    );
    let state = Arc::new(AppState {
        dataset,
        db: RwLock::new(db),
    });

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(%local_addr, "pokedeck-server listening (base url http://{}/api)", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
