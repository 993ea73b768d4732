//! aconfig-gen: build-time feature-flag resolution and accessor generation
//!
//! Parses local `.aconfig` declaration files, fetches variant-scoped
//! textproto override files from a remote repository, merges them with a
//! fixed precedence order, and emits one `Flags.java` accessor class per
//! declared package.

pub mod cli;
pub mod config;
pub mod declarations;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod overrides;
pub mod policy;
pub mod render;
pub mod resolve;
pub mod utils;
pub mod variants;
