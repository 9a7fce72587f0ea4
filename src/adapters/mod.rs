//! Infrastructure adapters. Implement outbound ports.

pub mod logging;
