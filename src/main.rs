use std::env;

use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;

use distro_image_resolver::{SelectionQuery, providers, resolve_image};

/// Render the final resolution cleanly for the terminal.
fn print_resolution(provider: &str, distribution: &str, image: &distro_image_resolver::ResolvedImage) {
    println!("=== Resolved image ===");
    println!("Provider: {provider}");
    println!("Distro:   {distribution}");
    println!("Name:     {}", image.name());
    println!("Id:       {}", image.id());
    println!("Image id: {}", image.image_id());
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);

    let Some(provider) = args.next().or_else(providers::provider_from_env) else {
        bail!("no cloud provider given: pass it as the first argument or set CLOUD_PROVIDER");
    };
    let distribution = args
        .next()
        .unwrap_or_else(providers::distribution_from_env);

    let query = SelectionQuery::from_env();
    let image = resolve_image(&provider, &distribution, &query).await?;

    print_resolution(&provider, &distribution, &image);
    Ok(())
}
