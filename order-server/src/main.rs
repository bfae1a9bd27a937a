use order_server::core::{Config, Server};
use order_server::utils::logger;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger_with_file(Some(&config.log_level), None);

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Starting order server"
    );

    if let Err(e) = Server::new(config).run().await {
        tracing::error!("Server exited with error: {e}");
        std::process::exit(1);
    }
}
