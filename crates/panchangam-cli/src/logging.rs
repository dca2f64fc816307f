//! Process-wide tracing initialization. Owned here, never by the library
//! crates: the core computes under whatever subscriber the caller installed,
//! or under none at all.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false).with_line_number(true).with_file(false).pretty())
        .init();
}

pub fn init_tracing_json(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false).with_line_number(true).with_file(false).json())
        .init();
}
