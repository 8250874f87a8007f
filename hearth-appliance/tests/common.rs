use std::sync::Once;
use tracing::Level;

static INIT_TRACING: Once = Once::new();

/// Make cache debug output visible when running with `--nocapture`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
