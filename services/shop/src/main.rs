use sea_orm::Database;
use tracing::info;

use pasar_shop::config::ShopConfig;
use pasar_shop::router::build_router;
use pasar_shop::state::AppState;

#[tokio::main]
async fn main() {
    pasar_core::tracing::init_tracing();

    let config = ShopConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.shop_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("shop service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
