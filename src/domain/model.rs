use serde::Serialize;
use std::fmt;

/// 固定長度、建立後不可變的有序序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Box<[T]>,
}

impl<T> Sequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl Sequence<String> {
    pub fn letters() -> Self {
        Self::new(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// Result of direct indexing: a value, or nothing when the position is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<T> {
    Value(T),
    Undefined,
}

impl<T> Slot<T> {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Slot::Undefined)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Slot::Value(v) => Some(v),
            Slot::Undefined => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Slot<T> {
    // 值以引號輸出，避免和 undefined 混淆
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Value(v) => write!(f, "{:?}", v),
            Slot::Undefined => f.write_str("undefined"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    SafeGet,
    SafeGetRepeat,
    UnsafeGet,
    DirectIndex,
    LiteralFalse,
    DirectEqual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub step: Step,
    pub output: String,
}

impl Line {
    pub fn new(step: Step, output: impl Into<String>) -> Self {
        Self {
            step,
            output: output.into(),
        }
    }
}
