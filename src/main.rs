#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sketchmate_lib::run().await?;
    Ok(())
}
