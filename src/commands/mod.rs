//! Command implementations for the packgraph CLI

pub mod add;
pub mod clear;
pub mod completions;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod redundant;
pub mod remove;
pub mod rename;
pub mod scan;
pub mod show;
pub mod tree;
pub mod version;
