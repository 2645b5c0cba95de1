//! State shared by every environment in one scope tree.
//!
//! The root environment creates the [`Runtime`]; children hold a clone of the
//! same `Rc`. It owns the `do` counter, the dispatch depth, the configuration
//! and the `dbg` print handler.

use std::cell::Cell;
use std::rc::Rc;

use crate::errors::{recursion_limit, EvalResult};
use crate::{EvalConfig, SharedPrintHandler};

pub(crate) struct Runtime {
    pub(crate) config: EvalConfig,
    pub(crate) print: SharedPrintHandler,
    next_do: Cell<u64>,
    depth: Cell<usize>,
}

impl Runtime {
    pub(crate) fn new(config: EvalConfig, print: SharedPrintHandler) -> Rc<Self> {
        Rc::new(Runtime {
            config,
            print,
            next_do: Cell::new(0),
            depth: Cell::new(0),
        })
    }

    /// Next `__do<N>` handle. Never repeats within one tree.
    pub(crate) fn next_do_symbol(&self) -> String {
        let n = self.next_do.get();
        self.next_do.set(n + 1);
        format!("__do{n}")
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Enter one dispatch level. The level is left when the guard drops,
    /// including on error return.
    pub(crate) fn enter(self: &Rc<Self>) -> EvalResult<DepthGuard> {
        let depth = self.depth.get() + 1;
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(recursion_limit(limit));
            }
        }
        self.depth.set(depth);
        Ok(DepthGuard {
            runtime: Rc::clone(self),
        })
    }
}

/// RAII guard for one dispatch level.
pub(crate) struct DepthGuard {
    runtime: Rc<Runtime>,
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        let depth = self.runtime.depth.get();
        self.runtime.depth.set(depth.saturating_sub(1));
    }
}
