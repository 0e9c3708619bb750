//! Taskbudget: catalog outline to task-budget JSON conversion
//!
//! This crate converts the hand-maintained state function catalog (a numbered
//! outline, one category per line, e.g. `1.1.1.1. Opracuj plan`) into the flat
//! JSON array the budget frontend loads as its task dictionary. Only the
//! deepest outline entries are kept: a line whose code has exactly four
//! dot-separated segments is a concrete budget task; anything shallower is a
//! section header and anything else is prose.
//!
//! The conversion is a single forward pass:
//!
//! 1. **Load** -- Read the whole outline into memory as UTF-8
//! 2. **Classify** -- Match each trimmed line against the
//!    `<digits>(.<digits>)*[.]? <name>` shape and split it into code and name
//! 3. **Filter & project** -- Keep four-segment codes, derive the parent code
//!    by dropping the last segment
//! 4. **Serialize** -- Write the entries as pretty-printed JSON, preserving
//!    source order and non-ASCII text
//!
//! # Key Modules
//!
//! - [`classify`] -- Line shape matching, code/name extraction
//! - [`models`] -- The `TaskEntry` record and leaf projection
//! - [`convert`] -- The full load-to-write pass
//! - [`config`] -- Fixed source/destination paths and the leaf level
//!
//! The tool takes no arguments; the paths in [`config`] are fixed at build
//! time and the destination file is overwritten on every run.

pub mod classify;
pub mod config;
pub mod convert;
pub mod models;
