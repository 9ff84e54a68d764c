#[tokio::main]
async fn main() -> anyhow::Result<()> {
    modtrans_lib::main().await
}
