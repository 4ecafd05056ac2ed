#[tokio::main]
async fn main() {
    carpool_auth::run().await;
}
