//! # Storage Layer
//!
//! Items live in memory in an [`ItemStore`], which is the source of truth while
//! billz runs. A copy is kept on disk as a single JSON document and rewritten in
//! full after every change.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: the "how" of persistence (read the document,
//!   write the document atomically, set a broken document aside).
//! - [`item_store::ItemStore`]: the "what" (the ordered sequence, add/remove/update,
//!   sorting, totals, and the policy for storage failures).
//!
//! ## Failure Policy
//!
//! - **Load**: a missing document is an empty store. A malformed one is moved to
//!   `items.json.corrupt` and the store starts empty. Read errors start empty too.
//!   Inside a well-formed document, a record that cannot be read is skipped with a
//!   warning and the other records load.
//!   None of these reach the caller; they are logged.
//! - **Save**: errors are logged and swallowed. The in-memory sequence keeps the
//!   change and stays authoritative for the session.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production backend, one JSON file in the data directory.
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── items.json           # Ordered array of items
//! ├── items.json.corrupt   # Malformed document kept aside (only after a failed load)
//! └── config.json          # Settings
//! ```

pub mod backend;
pub mod fs_backend;
pub mod item_store;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use item_store::{ItemStore, SortKey, SortOrder};
