pub mod tests {
    pub mod logging {
        use tracing_subscriber::EnvFilter;

        pub fn init() {
            let filter = if std::env::var_os("RUST_LOG").is_some() {
                // This is controlled by the env variable RUST_LOG
                EnvFilter::from_default_env()
            } else {
                // If RUST_LOG is not set
                EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))
            };

            // Fails if a subscriber is already set, which is fine for tests
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(filter)
                .with_target(false)
                .try_init();
        }
    }
}
