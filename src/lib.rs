//! Extracts a language-neutral reference-documentation model from a C++
//! AST and renders it to XML or Doxygen-tagfile format.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod server;
