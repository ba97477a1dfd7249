#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = aptiquiz::run().await {
        eprintln!("aptiquiz fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
