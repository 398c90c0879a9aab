//! Platform abstraction layer
//!
//! Handles the parts of the host platform the game logic depends on:
//! - Input events (touches to per-player movement)
//! - Storage (saved game records)

pub mod input;
pub mod storage;

pub use input::{Touch, TouchTracker};
pub use storage::{JsonFileStore, MemoryStore, PrefStore, StoreError};
