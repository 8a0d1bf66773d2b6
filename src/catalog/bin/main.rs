use std::net::SocketAddr;
use bookshelf::catalog::controller::router;
use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::utils::logging::setup_tracing;

// Serves the catalog over HTTP. Set BOOKSHELF_DATA_FILE, BOOKSHELF_ADDR and
// BOOKSHELF_STORE to override the defaults.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::from_env();
    let catalog_service = create_catalog_service(&config, config.store).await?;
    let addr: SocketAddr = config.bind_addr.parse()?;
    let app = router(AppState::new(catalog_service));

    tracing::info!(%addr, "bookshelf listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
