//! Immutable, reference-counted value sequences.

use std::fmt;
use std::iter::Rev;
use std::rc::Rc;
use std::slice;

use crate::Value;

/// A quoted sequence of values, stored in stack order (top last).
///
/// Cloning is O(1). A block never changes after construction; evaluation
/// builds new blocks instead of editing old ones.
#[derive(Clone, PartialEq, Eq)]
pub struct Block(Rc<[Value]>);

/// Top-down iterator over a block's elements.
pub type Operands<'a> = Rev<slice::Iter<'a, Value>>;

impl Block {
    /// Wrap a sequence that is already in stack order (top last).
    ///
    /// This is what the parser hands over after reversing each level.
    pub fn from_stack(values: Vec<Value>) -> Self {
        Block(values.into())
    }

    /// Build a block from values listed top-down, i.e. in written order.
    pub fn from_operands<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut values: Vec<Value> = operands.into_iter().collect();
        values.reverse();
        Block(values.into())
    }

    /// A block holding exactly one value.
    pub fn single(value: Value) -> Self {
        Block(vec![value].into())
    }

    /// Raw storage, bottom first.
    #[inline]
    pub fn as_stack(&self) -> &[Value] {
        &self.0
    }

    /// Elements top-down (written order).
    #[inline]
    pub fn operands(&self) -> Operands<'_> {
        self.0.iter().rev()
    }

    /// The `index`-th element counted from the top.
    pub fn operand(&self, index: usize) -> Option<&Value> {
        let len = self.0.len();
        if index >= len {
            return None;
        }
        self.0.get(len - 1 - index)
    }

    /// The top element.
    #[inline]
    pub fn top(&self) -> Option<&Value> {
        self.0.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Block {
    fn default() -> Self {
        Block(Vec::new().into())
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.operands()).finish()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.operands().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl FromIterator<Value> for Block {
    /// Collects in written order, same as [`Block::from_operands`].
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Block::from_operands(iter)
    }
}
