//! CLI library components for the catalog tools.

#![allow(missing_docs)]

pub mod decode;
pub mod logging;
