//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled, [`profile_function!`] and
//! [`profile_scope!`] expand to nothing and the init functions are no-ops.

#[cfg(feature = "profiling")]
mod enabled {
    use std::sync::OnceLock;

    pub use puffin::{profile_function, profile_scope};

    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Enable puffin scopes and serve them to `puffin_viewer` on `addr`.
    ///
    /// ```no_run
    /// ferrodrop_core::profiling::init_profiling("0.0.0.0:8585");
    /// ```
    pub fn init_profiling(addr: &str) {
        puffin::set_scopes_on(true);

        match puffin_http::Server::new(addr) {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://{}", addr);
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        }
    }

    /// Mark the start of a new profiling frame.
    #[inline]
    pub fn new_frame() {
        puffin::GlobalProfiler::lock().new_frame();
    }
}

#[cfg(feature = "profiling")]
pub use enabled::*;

#[cfg(not(feature = "profiling"))]
mod disabled {
    #[macro_export]
    macro_rules! profile_function {
        () => {};
        ($data:expr) => {};
    }

    #[macro_export]
    macro_rules! profile_scope {
        ($name:expr) => {};
        ($name:expr, $data:expr) => {};
    }

    pub use crate::{profile_function, profile_scope};

    pub fn init_profiling(_addr: &str) {}

    #[inline]
    pub fn new_frame() {}
}

#[cfg(not(feature = "profiling"))]
pub use disabled::*;
