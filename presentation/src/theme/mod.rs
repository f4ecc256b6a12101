//! Theme implementations

pub mod ansi;
