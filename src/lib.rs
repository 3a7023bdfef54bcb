//! tripguide: travel guide outline editor.
//!
//! The outline is a forest of [`domain::OutlineNode`]s edited through
//! [`domain::OutlineStore`]; every edit returns a new forest and leaves its
//! input untouched.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;
