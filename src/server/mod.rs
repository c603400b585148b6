//! A slim `axum` introspection server, matching the teacher's own use of
//! `axum` + `tower-http`. Scoped down relative to the teacher's MCP
//! surface since spec.md names no query-language or tool-calling
//! interface — this just serves a finished Corpus's summary as JSON.

pub mod http;
