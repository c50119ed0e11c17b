pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod rewrite;
pub mod scan;
pub mod self_test;
pub mod ui;

pub use error::{DocsBumpError, Result};
pub use rewrite::{rewrite, Rewriter};
