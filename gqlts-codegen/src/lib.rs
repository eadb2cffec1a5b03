//! Shared code generation utilities for gqlts.
//!
//! This crate provides language-agnostic building blocks used by the
//! TypeScript declaration generator (`gqlts-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output bookkeeping (ImportCollector)
//! - [`format`] - Formatter seam and the dprint-backed TypeScript formatter

pub mod builder;
pub mod format;
pub mod generation;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use format::{FormatError, Formatter, TypeScriptFormatter};
pub use generation::ImportCollector;
