//! The visit protocol, implemented literally after
//! `examples/original_source/src/lib/AST/ASTVisitor.cpp`'s
//! `traverse<InfoTy, DeclTy>`: upsert, populate common fields, populate
//! derived fields (only if new), traverse members, traverse parent.

use super::{builders, merge, CorpusFragment, TraversalContext};
use crate::domain::extraction_mode::ExtractionMode;
use crate::domain::filters::{DeclContext, FilterDecision, FilterPipeline};
use crate::domain::ports::Decl;
use crate::domain::symbol_id::SymbolId;

/// Per-TU visitor state: the enclosing-scope chain accumulated as the
/// visitor descends, mirroring the teacher's use of a mutable context
/// object threaded through a recursive builder pass.
pub struct VisitContext<'a> {
    filters: &'a FilterPipeline,
    /// IDs of every enclosing container (namespace, record, enum, ...)
    /// currently being descended into, innermost last.
    scope_stack: Vec<SymbolId>,
    name_stack: Vec<String>,
}

impl<'a> VisitContext<'a> {
    pub fn new(filters: &'a FilterPipeline) -> Self {
        VisitContext {
            filters,
            scope_stack: Vec::new(),
            name_stack: Vec::new(),
        }
    }

    fn qualified_name(&self, decl: &dyn Decl) -> String {
        let mut parts = self.name_stack.clone();
        parts.push(decl.name().to_string());
        parts.join("::")
    }
}

/// Kinds whose members get a parent link and a qualified-name scope
/// pushed onto the visitor's stack while their children are traversed.
fn is_scope_kind(kind: &str) -> bool {
    matches!(kind, "namespace" | "class" | "struct" | "union" | "enum")
}

/// A compiler-synthesized, unnamed, or file-local declaration contributes
/// nothing documentable and is never worth recursing into: an implicit
/// special member has no children worth surfacing, and an anonymous
/// namespace/union's members are reached through its enclosing scope
/// instead (spec.md §4.2.2's member-traversal skip rules).
fn skip_traversal(decl: &dyn Decl) -> bool {
    decl.is_implicit() || (decl.is_anonymous() && decl.kind_name() != "namespace")
}

/// Recursively visits `decl` and its children, inserting/merging into
/// `fragment.corpus` as it goes.
pub fn traverse(
    decl: &dyn Decl,
    ctx: &mut VisitContext,
    fragment: &mut CorpusFragment,
    traversal: TraversalContext,
) {
    if skip_traversal(decl) {
        return;
    }

    let id = SymbolId::from_fingerprint(&decl.fingerprint(), 0);
    let parent = ctx.scope_stack.last().copied().unwrap_or(SymbolId::GLOBAL);

    let qualified = ctx.qualified_name(decl);
    let decl_ctx = DeclContext {
        qualified_name: qualified,
        namespace_path: ctx.name_stack.clone(),
        file: decl.file(),
        file_in_scope: traversal == TraversalContext::Regular,
        access: decl.access(),
        is_implicit: decl.is_implicit(),
        is_anonymous: decl.is_anonymous(),
        is_file_static: decl.is_file_static(),
        // Only an explicitly-forced parent mode cascades down; a parent
        // sitting at the pipeline's plain default isn't "inherited", it's
        // just what every undecided symbol falls back to anyway.
        parent_mode: fragment
            .corpus
            .get(parent)
            .map(|p| p.core().mode)
            .filter(|m| *m != ctx.filters.default_mode),
    };
    let decision = ctx.filters.decide(&decl_ctx);
    let mode = match decision {
        FilterDecision::Excluded => return,
        FilterDecision::Mode(m) => resolve_mode(traversal, m),
    };

    // --- upsert ---
    let is_new = !fragment.corpus.contains(id);
    if is_new {
        // --- populate common + derived (only meaningful for a new symbol) ---
        match builders::build_info(decl, parent, mode) {
            Some(mut info) => {
                info.core_mut().namespace = ctx.scope_stack.clone();
                fragment.corpus.insert(info);
            }
            None => return,
        }
    } else {
        // Redeclaration: merge common fields (doc comment, locations,
        // mode) without rebuilding the kind-specific payload.
        if let Some(existing) = fragment.corpus.get_mut(id) {
            merge::merge_redeclaration(existing, decl, mode, &mut fragment.warnings);
        }
    }

    // --- traverse parent: link this symbol into its parent's member list ---
    if let Some(parent_info) = fragment.corpus.get_mut(parent) {
        parent_info.add_member(id, decl.access());
    }

    // --- traverse members ---
    let child_traversal = match traversal {
        TraversalContext::Regular => TraversalContext::Regular,
        other => other,
    };

    if is_scope_kind(decl.kind_name()) {
        ctx.scope_stack.push(id);
        ctx.name_stack.push(decl.name().to_string());
        for child in decl.children() {
            traverse(child.as_ref(), ctx, fragment, child_traversal);
        }
        ctx.name_stack.pop();
        ctx.scope_stack.pop();
    } else {
        for child in decl.children() {
            traverse(child.as_ref(), ctx, fragment, child_traversal);
        }
    }
}

fn resolve_mode(traversal: TraversalContext, decided: ExtractionMode) -> ExtractionMode {
    match traversal {
        TraversalContext::Regular => decided,
        TraversalContext::Dependency => decided.join(ExtractionMode::Dependency),
        TraversalContext::BaseClass => decided,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::frontend::fake::FakeDecl;
    use crate::domain::extractor::CorpusFragment;
    use crate::domain::info::Access;
    use crate::domain::corpus::Corpus;

    fn filters() -> FilterPipeline {
        FilterPipeline {
            exclude_rules: vec![],
            pattern_rules: vec![],
            in_scope_files: vec![],
            default_mode: ExtractionMode::Regular,
            extract_private: false,
        }
    }

    #[test]
    fn traversing_function_inserts_one_symbol() {
        let filters = filters();
        let mut ctx = VisitContext::new(&filters);
        let mut fragment = CorpusFragment {
            corpus: Corpus::new(),
            warnings: Vec::new(),
        };
        let decl = FakeDecl::function("foo", Access::Public);
        traverse(&decl, &mut ctx, &mut fragment, TraversalContext::Regular);
        assert_eq!(fragment.corpus.len(), 2);
    }

    #[test]
    fn namespace_children_get_linked_to_parent() {
        let filters = filters();
        let mut ctx = VisitContext::new(&filters);
        let mut fragment = CorpusFragment {
            corpus: Corpus::new(),
            warnings: Vec::new(),
        };
        let mut ns = FakeDecl::namespace("ns");
        ns.add_child(FakeDecl::function("foo", Access::Public));
        traverse(&ns, &mut ctx, &mut fragment, TraversalContext::Regular);
        assert_eq!(fragment.corpus.len(), 3);
    }

    #[test]
    fn implicit_declaration_is_not_traversed() {
        let filters = filters();
        let mut ctx = VisitContext::new(&filters);
        let mut fragment = CorpusFragment {
            corpus: Corpus::new(),
            warnings: Vec::new(),
        };
        let mut decl = FakeDecl::function("Widget", Access::Public);
        decl.set_implicit(true);
        traverse(&decl, &mut ctx, &mut fragment, TraversalContext::Regular);
        assert_eq!(fragment.corpus.len(), 1);
    }
}
