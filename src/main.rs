use course_search::config::ServiceConfig;
use course_search::server::{AppContext, router};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let level = if std::env::var_os("COURSE_SEARCH_DEBUG").is_some() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let args: Vec<String> = std::env::args().collect();
    let config = ServiceConfig::from_env_and_args(&args)?;

    tracing::info!("Slides dataset: {}", config.datasets.slides.display());
    tracing::info!("Videos dataset: {}", config.datasets.videos.display());
    tracing::info!("Questions dataset: {}", config.datasets.questions.display());
    tracing::info!(
        "Lecture keys dataset: {}",
        config.datasets.lecture_keys.display()
    );
    tracing::info!(
        "Load mode: {:?}, cache: {}, video limit: {}",
        config.load_mode,
        config.cache_datasets,
        config.video_limit
    );

    let bind_addr = config.bind_addr;
    let ctx = Arc::new(AppContext::new(config));
    let app = router(ctx);

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
