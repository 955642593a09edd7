pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // plain output so the lines stay readable when piped into a log collector.
        .with_ansi(false)
        .json()
        .init();
}
