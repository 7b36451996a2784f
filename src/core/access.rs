use crate::core::{Accessor, Sequence, Slot};
use crate::utils::error::{DemoError, Result};

fn position(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

/// 安全存取：越界回傳 None
pub fn get<T>(sequence: &Sequence<T>, index: i64) -> Option<&T> {
    position(index, sequence.len()).map(|i| &sequence.as_slice()[i])
}

/// 斷言式存取：越界回傳 IndexOutOfRange
pub fn get_exn<T>(sequence: &Sequence<T>, index: i64) -> Result<&T> {
    get(sequence, index).ok_or(DemoError::IndexOutOfRange {
        index,
        len: sequence.len(),
    })
}

/// 直接索引：越界得到 Undefined，不會觸發錯誤
pub fn direct<T>(sequence: &Sequence<T>, index: i64) -> Slot<&T> {
    match get(sequence, index) {
        Some(v) => Slot::Value(v),
        None => Slot::Undefined,
    }
}

impl<T> Accessor<T> for Sequence<T> {
    fn get(&self, index: i64) -> Option<&T> {
        get(self, index)
    }

    fn get_exn(&self, index: i64) -> Result<&T> {
        get_exn(self, index)
    }

    fn direct(&self, index: i64) -> Slot<&T> {
        direct(self, index)
    }
}
