//! Quote Types - Pure type definitions shared by the server and any client
//!
//! This crate contains only plain data types and their validation, with no
//! async runtime or storage dependencies.

pub mod quote;

pub use quote::*;
