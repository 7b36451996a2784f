use crate::domain::model::Slot;
use crate::utils::error::Result;

/// Positional access over an immutable sequence.
pub trait Accessor<T> {
    /// Bounds-checked; `None` when `index` is out of range.
    fn get(&self, index: i64) -> Option<&T>;
    /// Bounds-checked; out of range is a `DemoError::IndexOutOfRange` fault.
    fn get_exn(&self, index: i64) -> Result<&T>;
    /// Unchecked; out of range yields `Slot::Undefined`.
    fn direct(&self, index: i64) -> Slot<&T>;
}

pub trait DemoSettings {
    fn elements(&self) -> &[String];
    fn expected(&self) -> &str;
    fn safe_index(&self) -> i64;
    fn unsafe_index(&self) -> i64;
    fn direct_index(&self) -> i64;
    fn direct_equal_index(&self) -> i64;
}
