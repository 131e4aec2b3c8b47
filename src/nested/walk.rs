// src/nested/walk.rs
use super::{children, scan, CarvedRecord};
use bytes::Bytes;

/// Depth-first iterator over every carved record, driven by an explicit
/// stack instead of call recursion.
pub struct NestedWalk {
    stack: Vec<CarvedRecord>,
}

impl NestedWalk {
    pub fn new(data: &Bytes) -> Self {
        let mut stack = scan(data);
        stack.reverse();
        NestedWalk { stack }
    }

    /// Records still waiting to be visited
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for NestedWalk {
    type Item = CarvedRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.stack.pop()?;
        let mut nested = children(&record);
        nested.reverse();
        self.stack.extend(nested);
        Some(record)
    }
}
