//! Utility helpers shared across client UI code.

pub mod dom;
pub mod form;
