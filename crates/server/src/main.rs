#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ayni_server::start().await
}
