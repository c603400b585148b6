//! `Frontend`/`Decl` implementations. `fake` is always available and
//! drives the whole test suite without linking libclang; `clang_frontend`
//! is the real binding, gated behind the `clang-frontend` feature
//! (default on).

pub mod fake;

#[cfg(feature = "clang-frontend")]
pub mod clang_frontend;
