use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    promptwizard::run().await
}
