//! The XML renderer, fixing the element/attribute names observed in
//! `examples/original_source/`'s `XMLWriter.cpp`/`CXXTags.hpp`: one
//! top-level `<mrdocs>` document, one element per symbol kind
//! (`<namespace>`, `<record>`, `<function>`, ...), `id` and `name`
//! attributes on every element, nested `<doc>` for the brief/returns
//! text.

use crate::domain::config::Config;
use crate::domain::corpus::Corpus;
use crate::domain::error::CoreError;
use crate::domain::info::Info;
use crate::domain::ports::Renderer;
use std::io::Write;

pub struct XmlRenderer;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn tag_for(info: &Info) -> &'static str {
    match info.kind_name() {
        "namespace" => "namespace",
        "class" | "struct" | "union" => "record",
        "enum" => "enum",
        "enumerator" => "enumerator",
        "function" => "function",
        "variable" => "variable",
        "field" => "field",
        "typealias" => "typealias",
        "friend" => "friend",
        "concept" => "concept",
        "guide" => "guide",
        "namespace-alias" => "namespacealias",
        "using" => "using",
        "overloads" => "overloads",
        "specialization" => "specialization",
        _ => "unknown",
    }
}

impl Renderer for XmlRenderer {
    fn render(
        &self,
        corpus: &Corpus,
        _config: &Config,
        out: &mut dyn Write,
    ) -> Result<(), CoreError> {
        let write_err = |e: std::io::Error| CoreError::Internal(format!("xml write failed: {e}"));
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>").map_err(write_err)?;
        writeln!(out, "<mrdocs>").map_err(write_err)?;
        for info in corpus.iter_declaration_order() {
            let core = info.core();
            writeln!(
                out,
                "  <{tag} id=\"{id}\" name=\"{name}\">",
                tag = tag_for(info),
                id = core.id.to_hex(),
                name = escape(&core.name),
            )
            .map_err(write_err)?;
            if let Some(brief) = core.doc.brief() {
                let text: String = brief
                    .iter()
                    .map(|i| match i {
                        crate::domain::doc::Inline::Text(t) => t.clone(),
                        crate::domain::doc::Inline::Code(t) => t.clone(),
                        crate::domain::doc::Inline::Reference(t, _) => t.clone(),
                    })
                    .collect();
                writeln!(out, "    <doc>{}</doc>", escape(&text)).map_err(write_err)?;
            }
            if let Some(function) = info.as_function() {
                for param in &function.params {
                    writeln!(
                        out,
                        "    <param name=\"{}\"/>",
                        escape(&param.name),
                    )
                    .map_err(write_err)?;
                }
            }
            writeln!(out, "  </{}>", tag_for(info)).map_err(write_err)?;
        }
        writeln!(out, "</mrdocs>").map_err(write_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::doc::{Block, DocComment, Inline};
    use crate::domain::extraction_mode::ExtractionMode;
    use crate::domain::info::{Access, Core, FunctionClass, FunctionInfo};
    use crate::domain::symbol_id::SymbolId;
    use crate::domain::types::Type;

    #[test]
    fn renders_one_element_per_symbol_with_id_and_name() {
        let mut corpus = Corpus::new();
        let mut core = Core::new(SymbolId::from_fingerprint("foo", 0), "foo", SymbolId::GLOBAL);
        core.access = Access::Public;
        core.mode = ExtractionMode::Regular;
        core.doc = DocComment {
            blocks: vec![Block::Brief(vec![Inline::Text("does a thing".into())])],
            relates: vec![],
            related: vec![],
        };
        corpus.insert(Info::Function(FunctionInfo {
            core,
            class: FunctionClass::Free,
            return_type: Type::Builtin {
                name: "void".into(),
                qual: Default::default(),
            },
            params: vec![],
            is_virtual: false,
            is_override: false,
            is_const: false,
            is_noexcept: false,
            is_deleted: false,
            is_defaulted: false,
            template: None,
            lifted_constraint: None,
        }));
        let renderer = XmlRenderer;
        let mut buf = Vec::new();
        renderer.render(&corpus, &Config::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("<function id="));
        assert!(text.contains("name=\"foo\""));
        assert!(text.contains("does a thing"));
    }
}
