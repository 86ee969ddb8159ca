//! Runtime variable storage.
//!
//! A stack of frames. The bottom (global) frame always exists; loops push one
//! frame per iteration. Writing a name updates the innermost frame that
//! already binds it, otherwise the top frame, so variables first assigned
//! inside a loop body vanish when the iteration ends.

use std::collections::HashMap;

use super::value::Value;

#[derive(Debug, Default)]
pub struct Memory {
    variables: HashMap<String, Value>,
}

impl Memory {
    pub fn new() -> Self {
        Memory::default()
    }

    pub fn has(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn put(&mut self, name: &str, value: Value) {
        self.variables.insert(String::from(name), value);
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[derive(Debug)]
pub struct MemoryStack {
    frames: Vec<Memory>,
}

impl Default for MemoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStack {
    pub fn new() -> Self {
        MemoryStack {
            frames: vec![Memory::new()],
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Updates the innermost binding of `name`, or binds it in the top frame.
    pub fn set(&mut self, name: &str, value: Value) {
        let index = self
            .frames
            .iter()
            .rposition(|frame| frame.has(name))
            .unwrap_or(self.frames.len() - 1);

        self.frames[index].put(name, value);
    }

    pub fn push(&mut self) {
        self.frames.push(Memory::new());
        tracing::trace!(depth = self.frames.len(), "push memory frame");
    }

    /// Drops the top frame. The global frame is never removed.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            if let Some(frame) = self.frames.pop() {
                tracing::trace!(depth = self.frames.len(), bindings = frame.len(), "pop memory frame");
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
