//! `EnvironmentBuilder` for creating root environments with various
//! configurations.

use crate::{builtins, stderr_handler, Environment, EvalConfig, SharedPrintHandler};

/// Builder for a root [`Environment`].
///
/// Defaults match [`Environment::new`]: builtins registered, `dbg` output on
/// stderr, [`EvalConfig::default`].
pub struct EnvironmentBuilder {
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
    builtins: bool,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        EnvironmentBuilder {
            config: EvalConfig::default(),
            print_handler: None,
            builtins: true,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit nested dispatch to `depth` levels.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }

    /// Fractional digits kept by `divide`, clamped to
    /// [`MAX_DIVISION_SCALE`](crate::MAX_DIVISION_SCALE).
    #[must_use]
    pub fn division_scale(mut self, scale: u64) -> Self {
        self.config = self.config.with_division_scale(scale);
        self
    }

    /// Where `dbg` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Start with an empty register table.
    #[must_use]
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }

    pub fn build(self) -> Environment<'static> {
        let print = self.print_handler.unwrap_or_else(stderr_handler);
        let mut env = Environment::root(self.config, print);
        if self.builtins {
            builtins::register(&mut env);
        }
        env
    }
}

impl Default for EnvironmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
