//! Evaluation limits and numeric policy.

/// Fractional digits kept by `divide` unless configured otherwise.
pub const DEFAULT_DIVISION_SCALE: u64 = 20;

/// Largest accepted `division_scale`. Larger settings are clamped.
pub const MAX_DIVISION_SCALE: u64 = 1000;

/// Dispatch depth limit on targets where the native stack cannot grow.
#[cfg(target_arch = "wasm32")]
pub const WASM_MAX_DEPTH: usize = 200;

/// Settings shared by every environment in one scope tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum nesting of symbol dispatches. `None` means unlimited; the
    /// native stack is grown on demand instead.
    pub max_depth: Option<usize>,
    /// Fractional digits kept by `divide`, rounding half-up. Read through
    /// [`EvalConfig::effective_division_scale`].
    pub division_scale: u64,
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set the division scale, clamped to [`MAX_DIVISION_SCALE`].
    #[must_use]
    pub fn with_division_scale(mut self, scale: u64) -> Self {
        self.division_scale = scale.min(MAX_DIVISION_SCALE);
        self
    }

    /// `division_scale`, clamped to [`MAX_DIVISION_SCALE`].
    pub fn effective_division_scale(&self) -> u32 {
        u32::try_from(self.division_scale.min(MAX_DIVISION_SCALE)).unwrap_or(u32::MAX)
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            #[cfg(not(target_arch = "wasm32"))]
            max_depth: None,
            #[cfg(target_arch = "wasm32")]
            max_depth: Some(WASM_MAX_DEPTH),
            division_scale: DEFAULT_DIVISION_SCALE,
        }
    }
}
