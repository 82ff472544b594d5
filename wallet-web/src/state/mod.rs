//! Reactive state

pub mod swap;
