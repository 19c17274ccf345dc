
pub use helpers::*;

/// Installs a logger once per test binary; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
