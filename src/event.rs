// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! This event module provides a global event center.
//! Model and Render share no references to each other, the model emits a
//! named event (e.g. "Strings.Reroll") and the render checks it on its next
//! update. Every registered callback name sees an emitted event exactly once.
//!
//! Input events read by the render adapters are converted to the unified
//! Event type in input.rs.

use std::{cell::RefCell, collections::HashMap};

thread_local! {
    static EVENT_CENTER: RefCell<HashMap<String, HashMap<String, bool>>> =
        RefCell::new(HashMap::new());
}

/// A global HashMap is used to save callbacks of events
pub fn event_register(event: &str, func: &str) {
    EVENT_CENTER.with(|ec| {
        ec.borrow_mut()
            .entry(event.to_string())
            .or_default()
            .entry(func.to_string())
            .or_insert(false);
    });
}

pub fn event_check(event: &str, func: &str) -> bool {
    EVENT_CENTER.with(|ec| {
        let mut ec_ref = ec.borrow_mut();
        if let Some(flag) = ec_ref.get_mut(event).and_then(|ht| ht.get_mut(func)) {
            if *flag {
                *flag = false;
                return true;
            }
        }
        false
    })
}

pub fn event_emit(event: &str) {
    EVENT_CENTER.with(|ec| {
        if let Some(ht) = ec.borrow_mut().get_mut(event) {
            for value in ht.values_mut() {
                *value = true;
            }
        }
    });
}

mod input;
pub use input::*;
