use std::path::Path;
use std::sync::Arc;

use comprec::catalog::load_catalog;
use comprec::server::create_router;
use comprec::types::CompContext;

#[tokio::main]
async fn main() {
    let port = comprec::env_config::server_port();
    let catalog_path = comprec::env_config::catalog_path();
    println!("Starting comprec API server...");

    comprec::env_config::init_rayon_threads();

    let Some(catalog) = load_catalog(Path::new(&catalog_path)) else {
        eprintln!("Cannot start without a catalog (set COMPREC_CATALOG)");
        std::process::exit(1);
    };
    println!(
        "Set {}: {} units, {} traits",
        catalog.set_key,
        catalog.units.len(),
        catalog.synergies.len()
    );

    let ctx = Arc::new(CompContext::with_default_origins(catalog));
    let app = create_router(ctx);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    println!("Server is running on port {}. Press Ctrl+C to stop.", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("\nStopping server...");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
