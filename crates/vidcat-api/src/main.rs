use vidcat_api::setup;

// Use mimalloc as the global allocator for lower fragmentation under large uploads,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize the application (telemetry, configuration, storage root, routes)
    let (state, router) = setup::initialize_app().await?;

    // Start the server
    setup::server::start_server(&state.config, router).await?;

    Ok(())
}
