//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: field positions and constant tables (source of truth)
//! - `reader`: tokenizing and checked, typed field access
//! - `parser`: domain-level decoding (no direct field indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; sources and the replay layer handle
//! file access and aggregation.

pub mod mr231_3;
