/// Shop service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ShopConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3311). Env var: `SHOP_PORT`.
    pub shop_port: u16,
}

impl ShopConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            shop_port: std::env::var("SHOP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3311),
        }
    }
}
