//! # oppdb Architecture
//!
//! oppdb keeps a small local table of **opportunity listings**: competitions, OJT
//! placements, job openings and anything else worth posting on a board. It is a
//! library that happens to ship a CLI client, not a CLI with some library code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Admin editor vs public board entry points                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + summary.rs                 │
//! │  - Business logic and export formatting                     │
//! │  - No I/O assumptions beyond the export file                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records
//!
//! An [`model::Opportunity`] is either a **draft** (`id == None`, held only by the
//! caller) or **persisted** (has a stable id). A draft becomes persisted exactly once,
//! through `save`. Persisted records change only by a full-record `save` with their
//! id, and are never deleted. Callers always hold copies; re-read after saving.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//! 2. **Store** (`store/sqlite.rs`): schema, migration and save semantics against
//!    real SQLite databases (in memory and in temp dirs).
//! 3. **CLI** (`tests/`): the binary driven end to end with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Opportunity`, `OpportunityType`, `OpportunityPatch`)
//! - [`summary`]: TLDR and digest text
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and store opening
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod summary;
