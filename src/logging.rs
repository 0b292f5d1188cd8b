use tracing::Level;

/// Installs the global `fmt` subscriber. Call once, before serving.
pub fn init(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
