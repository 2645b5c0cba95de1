//! Logging for the `ifx` binary.

use std::sync::Once;

/// Environment variable holding the `EnvFilter` directive, e.g.
/// `IFX_LOG=ifx_eval=debug`.
pub const LOG_ENV_VAR: &str = "IFX_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical subscriber on stderr if `IFX_LOG` is set.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var_os(LOG_ENV_VAR).is_none() {
            return;
        }
        let filter = EnvFilter::from_env(LOG_ENV_VAR);
        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .with(filter)
            .init();
    });
}
