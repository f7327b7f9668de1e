//! Materializes a directory skeleton from a tree diagram such as
//!
//! ```text
//! proj/
//! ├── src/
//! │   └── main.rs
//! └── README.md
//! ```
//!
//! Labels ending in `/` become directories, everything else an empty file.

pub mod api;
pub mod config;
pub mod errors;
pub mod materialize;
pub mod parser;
pub mod preview;
pub mod prompt;
pub mod source;
pub mod stack;
pub mod vfs;

pub use materialize::{materialize, materialize_with, plan, MaterializeError};
pub use vfs::{DiskFS, Filesystem, VirtualFS};
