//! Structured logging setup.

/// Initialize tracing for the embedding application. Hosts can install their
/// own subscriber instead; this helper only installs an env-filtered default
/// when none has been set yet.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
