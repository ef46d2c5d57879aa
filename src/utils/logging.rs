//! Tracing initialization for the application shell

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "comment_scraper_pro=info".into());

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
