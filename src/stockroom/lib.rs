//! # Stockroom Architecture
//!
//! Stockroom keeps a small product catalog (id, name, description, price,
//! quantity) in a CSV file and edits it through a text menu. The library holds
//! everything except the terminal; the `stockroom` binary is a thin client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, config, logging, the interactive session loop     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses raw user text into ids, prices, quantities, fields│
//! │  - Owns the Inventory and its store                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Inventory (inventory.rs)   │
//! │  - add / view / update / delete / list                      │
//! │  - next_id, dense renumbering on delete                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProductStore trait                                       │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ids
//!
//! Product ids are kept dense: after any delete the remaining products are
//! renumbered `1..=N` in list order. An id names a row in the current table,
//! not a product for all time.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`inventory`]: The ordered product list and its invariants
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product`, `ProductField`, renderings and input parsing
//! - [`config`]: `stockroom.json` handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
