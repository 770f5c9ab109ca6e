#![deny(clippy::all)]

pub mod config;
pub mod fragment;
pub mod frontmatter;
pub mod markdown_ast;
pub mod render;
pub mod yaml;

pub use render::{RenderOptions, RenderOutcome, render};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
