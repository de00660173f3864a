#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    if let Err(e) = hali_landing::server::run().await {
        if e.precedes_tracing() {
            eprintln!("error: {e}");
        } else {
            tracing::error!("server failed: {}", e);
        }
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
