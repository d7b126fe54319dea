//! Variable store
//!
//! Insertion-ordered mapping from variable name to numeric value, scoped to
//! one document pass. Only variables assigned on earlier lines are visible;
//! reassignment overwrites the value but keeps the original position so the
//! variables pane lists bindings in the order they first appeared.

use crate::calculator::value::Num;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct VarStore {
    map: FxHashMap<String, Num>,
    order: Vec<String>,
}

impl VarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Num> {
        self.map.get(name).copied()
    }

    /// Bind `name`, overwriting any earlier value (last write wins).
    pub fn set(&mut self, name: &str, value: Num) {
        if self.map.insert(name.to_string(), value).is_none() {
            self.order.push(name.to_string());
        }
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Num)> {
        self.order
            .iter()
            .filter_map(|name| Some((name.as_str(), *self.map.get(name)?)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }
}
