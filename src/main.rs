use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use factcheck::adapters::http::{
    app_router, AppState, ChatAppState, FactCheckAppState, ForwardAppState,
};
use factcheck::adapters::{PerplexityGateway, RandomReplyGenerator};
use factcheck::application::ChatService;
use factcheck::config::AppConfig;
use factcheck::domain::chat::ChatState;
use factcheck::ports::{ReplyGenerator, UpstreamGateway};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level);
    config.validate()?;

    let gateway: Arc<dyn UpstreamGateway> =
        Arc::new(PerplexityGateway::new(config.upstream.gateway_config())?);

    let replies: Arc<dyn ReplyGenerator> = Arc::new(RandomReplyGenerator::new(
        config.chat.reply_delay_min(),
        config.chat.reply_delay_max(),
    ));
    let chat_state = if config.chat.seed_examples {
        ChatState::with_examples(config.chat.prefers_dark)
    } else {
        ChatState::new(config.chat.prefers_dark)
    };

    let state = AppState {
        forward: ForwardAppState::new(gateway.clone()),
        fact_check: FactCheckAppState::new(gateway, config.upstream.fact_check_settings()),
        chat: ChatAppState::new(ChatService::new(chat_state, replies)),
    };
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        model = %config.upstream.model,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
