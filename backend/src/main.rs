#[tokio::main]
async fn main() {
    site_server::start_server().await;
}
