//! Window, event loop and input mapping for the interactive viewer.

pub mod app;
pub mod keys;
pub mod pointer;
