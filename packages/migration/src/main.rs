use tracing::Level;

#[tokio::main]
async fn main() {
    // run_cli installs its own subscriber with -v, so don't panic if one
    // is already registered.
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .try_init();

    sea_orm_migration::cli::run_cli(migration::Migrator).await;
}
