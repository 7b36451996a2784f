pub mod access;
pub mod demo;

pub use crate::domain::model::{Line, Sequence, Slot, Step};
pub use crate::domain::ports::{Accessor, DemoSettings};
pub use crate::utils::error::Result;
