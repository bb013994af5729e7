//! HTTP host for the flow graph engine.
//!
//! The engine itself is synchronous and single-writer; this crate adapts
//! it to a multi-threaded host by guarding the whole service with one
//! async mutex around each operation. No finer-grained locking is needed
//! for the small, bursty mutation pattern of an editing session.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
