//! The Doxygen-style tagfile renderer, fixing the shape observed in
//! `examples/original_source/`'s `TagfileWriter.cpp`: a `<tagfile>` root,
//! one `<compound kind="...">` per top-level symbol with a `<name>` and
//! an `<anchorfile>`/`<anchor>` pair for cross-tool linking.

use crate::domain::config::Config;
use crate::domain::corpus::Corpus;
use crate::domain::error::CoreError;
use crate::domain::info::Info;
use crate::domain::ports::Renderer;
use crate::domain::symbol_id::SymbolId;
use std::io::Write;

pub struct TagfileRenderer;

fn compound_kind(info: &Info) -> &'static str {
    match info.kind_name() {
        "namespace" => "namespace",
        "class" => "class",
        "struct" => "struct",
        "union" => "union",
        "enum" => "enum",
        "function" => "function",
        "variable" => "variable",
        _ => "file",
    }
}

impl Renderer for TagfileRenderer {
    fn render(
        &self,
        corpus: &Corpus,
        _config: &Config,
        out: &mut dyn Write,
    ) -> Result<(), CoreError> {
        let write_err = |e: std::io::Error| CoreError::Internal(format!("tagfile write failed: {e}"));
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>").map_err(write_err)?;
        writeln!(out, "<tagfile>").map_err(write_err)?;
        for info in corpus.iter_declaration_order() {
            // Top-level only: a symbol whose parent is the global scope.
            if info.core().parent != SymbolId::GLOBAL {
                continue;
            }
            writeln!(
                out,
                "  <compound kind=\"{kind}\">",
                kind = compound_kind(info)
            )
            .map_err(write_err)?;
            writeln!(out, "    <name>{}</name>", corpus.qualified_name(info.id()))
                .map_err(write_err)?;
            writeln!(
                out,
                "    <filename>{}.xml</filename>",
                info.core().id.to_hex()
            )
            .map_err(write_err)?;
            if let Some(function) = info.as_function() {
                let arglist: Vec<&str> = function.params.iter().map(|p| p.name.as_str()).collect();
                writeln!(out, "    <arglist>({})</arglist>", arglist.join(", "))
                    .map_err(write_err)?;
            }
            writeln!(out, "  </compound>").map_err(write_err)?;
        }
        writeln!(out, "</tagfile>").map_err(write_err)?;
        Ok(())
    }
}
