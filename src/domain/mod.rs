//! The extraction domain: symbol identity, the polymorphic metadata
//! model, the Corpus, and the multi-pass extractor.

pub mod config;
pub mod corpus;
pub mod doc;
pub mod error;
pub mod extraction_mode;
pub mod extractor;
pub mod filters;
pub mod info;
pub mod legible_names;
pub mod location;
pub mod names;
pub mod ports;
pub mod symbol_id;
pub mod template;
pub mod types;
