//! Shared environment configuration for the binaries.
//!
//! Consolidates `COMPREC_CATALOG`, `RAYON_NUM_THREADS`, and `COMPREC_PORT`
//! reads shared by both binaries.

/// Read `COMPREC_CATALOG` (default `"data/en_us.json"`).
pub fn catalog_path() -> String {
    std::env::var("COMPREC_CATALOG").unwrap_or_else(|_| "data/en_us.json".to_string())
}

/// Read `RAYON_NUM_THREADS` (default: rayon's own core-count heuristic).
/// Builds the global thread pool; tolerates an already-initialized pool.
/// Returns the configured count, if any.
pub fn init_rayon_threads() -> Option<usize> {
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| s.parse().ok());
    if let Some(n) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .ok(); // May fail if already initialized
        println!("Rayon threads: {}", n);
    }
    num_threads
}

/// Read `COMPREC_PORT` (default 9000).
pub fn server_port() -> u16 {
    std::env::var("COMPREC_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9000)
}
