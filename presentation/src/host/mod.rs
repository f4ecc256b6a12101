//! Host implementations

pub mod console;
