//! Rendering backends satisfying the `Renderer` port. Both implementations
//! are deliberately minimal relative to the full upstream template
//! engines (Asciidoc/HTML/Handlebars authoring is a spec Non-goal); they
//! emit the pinned tag/element contract only.

pub mod tagfile;
pub mod xml;
