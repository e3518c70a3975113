//! Command line entry point for rartwork

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Progress lines are part of the output, so they go to stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format_target(false)
        .init();

    cli::run().await?;

    Ok(())
}
