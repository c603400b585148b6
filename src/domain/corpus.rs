//! The Corpus: the canonical `SymbolId -> Info` store.
//!
//! Grounded on the teacher's `TypeRegistry` (`domain/type_registry.rs`) —
//! a flat map rather than a graph, since a symbol table is tree-shaped
//! (parent/child links plus a namespace chain), not a multigraph of typed
//! edges. `IndexMap` replaces the teacher's `HashMap` so insertion order
//! (declaration order, spec.md §4.1) is preserved for free.

use crate::domain::error::CoreError;
use crate::domain::info::{Core, Info, NamespaceInfo};
use crate::domain::symbol_id::SymbolId;
use indexmap::IndexMap;

/// Fixed kind-group order `ordered_traverse` sorts by; within a group,
/// symbols are ordered case-insensitive lexically by name with the
/// `SymbolId` as a final tie-break (spec.md §4.1).
const KIND_ORDER: &[&str] = &[
    "namespace",
    "namespace-alias",
    "using",
    "concept",
    "typealias",
    "enum",
    "enumerator",
    "variable",
    "field",
    "function",
    "overloads",
    "record",
    "specialization",
    "guide",
    "friend",
];

fn kind_rank(info: &Info) -> usize {
    KIND_ORDER
        .iter()
        .position(|k| *k == info.traversal_group())
        .unwrap_or(KIND_ORDER.len())
}

/// The finalized symbol table produced by merging every translation
/// unit's extraction fragment. Once constructed by [`crate::app::engine`],
/// it is read-only and safe to share across renderer threads.
#[derive(Debug)]
pub struct Corpus {
    symbols: IndexMap<SymbolId, Info>,
}

impl Corpus {
    /// A fresh Corpus always contains exactly one symbol: the global
    /// namespace, keyed by `SymbolId::GLOBAL`. Every translation unit's
    /// declarations ultimately nest under it, and an empty translation
    /// unit still produces a Corpus of size one (spec.md §4.1/§8).
    pub fn new() -> Self {
        let mut symbols = IndexMap::new();
        symbols.insert(
            SymbolId::GLOBAL,
            Info::Namespace(NamespaceInfo {
                core: Core::new(SymbolId::GLOBAL, "", SymbolId::INVALID),
                members: Vec::new(),
                is_inline: false,
            }),
        );
        Corpus { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn insert(&mut self, info: Info) {
        self.symbols.insert(info.id(), info);
    }

    pub fn get(&self, id: SymbolId) -> Option<&Info> {
        self.symbols.get(&id)
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Info> {
        self.symbols.get_mut(&id)
    }

    pub fn contains(&self, id: SymbolId) -> bool {
        self.symbols.contains_key(&id)
    }

    /// The global namespace, always present.
    pub fn global_namespace(&self) -> &Info {
        self.get(SymbolId::GLOBAL)
            .expect("the global namespace is bootstrapped in Corpus::new")
    }

    /// Narrow to a specific kind, returning a typed reference or an
    /// `Internal` error if `id` names a symbol of a different kind — the
    /// kind-mismatch case named in spec.md §7's Internal error kind.
    pub fn get_as<'a, T>(
        &'a self,
        id: SymbolId,
        narrow: impl FnOnce(&'a Info) -> Option<&'a T>,
    ) -> Result<&'a T, CoreError> {
        let info = self
            .symbols
            .get(&id)
            .ok_or_else(|| CoreError::Internal(format!("no such symbol: {id}")))?;
        narrow(info).ok_or_else(|| CoreError::Internal(format!("kind mismatch for symbol {id}")))
    }

    /// All symbols in declaration order (insertion order), matching
    /// spec.md §4.1's ordered-traversal requirement.
    pub fn iter_declaration_order(&self) -> impl Iterator<Item = &Info> {
        self.symbols.values()
    }

    /// All symbols of one kind, in declaration order — used by renderers
    /// that group output by kind (e.g. "all functions" sections).
    pub fn iter_kind<'a>(&'a self, kind_name: &'a str) -> impl Iterator<Item = &'a Info> + 'a {
        self.symbols
            .values()
            .filter(move |info| info.kind_name() == kind_name)
    }

    pub fn children(&self, parent: SymbolId) -> impl Iterator<Item = &Info> {
        self.symbols.values().filter(move |info| info.core().parent == parent)
    }

    /// `parent`'s members, in the order spec.md §4.1's `traverse`
    /// requires: tranche order (Public, Protected, Private) for a record,
    /// declaration order for every other container kind.
    pub fn traverse(&self, parent: SymbolId) -> Vec<&Info> {
        match self.get(parent) {
            Some(info) => info
                .member_ids()
                .iter()
                .filter_map(|id| self.get(*id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every symbol in the Corpus, grouped by kind in `KIND_ORDER` and
    /// sorted case-insensitive lexically by name within each group, with
    /// the `SymbolId` as a final tie-break for stability (spec.md §4.1).
    pub fn ordered_traverse(&self) -> Vec<&Info> {
        let mut items: Vec<&Info> = self.symbols.values().collect();
        items.sort_by(|a, b| {
            kind_rank(a)
                .cmp(&kind_rank(b))
                .then_with(|| a.core().name.to_lowercase().cmp(&b.core().name.to_lowercase()))
                .then_with(|| a.core().id.cmp(&b.core().id))
        });
        items
    }

    /// The fully qualified `::`-joined name, walking the namespace chain
    /// recorded on the symbol's `Core`. Anonymous namespaces (empty name)
    /// and the global root contribute no segment of their own, matching
    /// spec.md §4.1.
    pub fn qualified_name(&self, id: SymbolId) -> String {
        let Some(info) = self.get(id) else {
            return String::new();
        };
        let mut parts: Vec<&str> = Vec::new();
        for ns_id in &info.core().namespace {
            if ns_id.is_global() {
                continue;
            }
            if let Some(ns) = self.get(*ns_id) {
                if !ns.core().name.is_empty() {
                    parts.push(&ns.core().name);
                }
            }
        }
        if !info.core().name.is_empty() {
            parts.push(&info.core().name);
        }
        parts.join("::")
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction_mode::ExtractionMode;
    use crate::domain::info::{Access, FunctionClass, FunctionInfo};
    use crate::domain::types::Type;

    fn make_function(name: &str, parent: SymbolId) -> Info {
        let id = SymbolId::from_fingerprint(name, 0);
        let mut core = Core::new(id, name, parent);
        core.access = Access::Public;
        core.mode = ExtractionMode::Regular;
        Info::Function(FunctionInfo {
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
        })
    }

    #[test]
    fn new_corpus_contains_exactly_the_global_namespace() {
        let corpus = Corpus::new();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.global_namespace().kind_name(), "namespace");
        assert_eq!(corpus.global_namespace().id(), SymbolId::GLOBAL);
    }

    #[test]
    fn insert_and_get_round_trip() {
        let mut corpus = Corpus::new();
        let info = make_function("foo", SymbolId::GLOBAL);
        let id = info.id();
        corpus.insert(info);
        assert!(corpus.contains(id));
        assert_eq!(corpus.get(id).unwrap().kind_name(), "function");
    }

    #[test]
    fn declaration_order_matches_insertion_order_after_global() {
        let mut corpus = Corpus::new();
        let a = make_function("a", SymbolId::GLOBAL);
        let b = make_function("b", SymbolId::GLOBAL);
        let (a_id, b_id) = (a.id(), b.id());
        corpus.insert(a);
        corpus.insert(b);
        let ids: Vec<SymbolId> = corpus.iter_declaration_order().map(|i| i.id()).collect();
        assert_eq!(ids, vec![SymbolId::GLOBAL, a_id, b_id]);
    }

    #[test]
    fn children_filters_by_parent() {
        let mut corpus = Corpus::new();
        let ns_id = SymbolId::from_fingerprint("ns", 0);
        let ns = Info::Namespace(NamespaceInfo {
            core: Core::new(ns_id, "ns", SymbolId::GLOBAL),
            members: vec![],
            is_inline: false,
        });
        corpus.insert(ns);
        corpus.insert(make_function("foo", ns_id));
        corpus.insert(make_function("bar", SymbolId::GLOBAL));
        let children: Vec<&Info> = corpus.children(ns_id).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].core().name, "foo");
    }

    #[test]
    fn traverse_yields_record_members_in_tranche_order() {
        use crate::domain::info::{MemberTranches, RecordInfo, RecordKind};
        let mut corpus = Corpus::new();
        let rec_id = SymbolId::from_fingerprint("Rec", 0);
        let mut rec = Info::Record(RecordInfo {
            core: Core::new(rec_id, "Rec", SymbolId::GLOBAL),
            kind: RecordKind::Class,
            bases: vec![],
            members: MemberTranches::default(),
            template: None,
            is_final: false,
        });
        let priv_fn = make_function("priv", rec_id);
        let pub_fn = make_function("pub_fn", rec_id);
        rec.add_member(priv_fn.id(), Access::Private);
        rec.add_member(pub_fn.id(), Access::Public);
        corpus.insert(rec);
        corpus.insert(priv_fn.clone());
        corpus.insert(pub_fn.clone());
        let ordered: Vec<SymbolId> = corpus.traverse(rec_id).iter().map(|i| i.id()).collect();
        assert_eq!(ordered, vec![pub_fn.id(), priv_fn.id()]);
    }

    #[test]
    fn get_as_reports_kind_mismatch_as_internal_error() {
        let mut corpus = Corpus::new();
        let info = make_function("foo", SymbolId::GLOBAL);
        let id = info.id();
        corpus.insert(info);
        let result = corpus.get_as(id, Info::as_variable);
        assert!(result.is_err());
    }

    #[test]
    fn qualified_name_joins_namespace_chain() {
        let mut corpus = Corpus::new();
        let ns_id = SymbolId::from_fingerprint("ns", 0);
        corpus.insert(Info::Namespace(NamespaceInfo {
            core: Core::new(ns_id, "ns", SymbolId::GLOBAL),
            members: vec![],
            is_inline: false,
        }));
        let mut fn_info = make_function("foo", ns_id);
        fn_info.core_mut().namespace = vec![ns_id];
        let fn_id = fn_info.id();
        corpus.insert(fn_info);
        assert_eq!(corpus.qualified_name(fn_id), "ns::foo");
    }

    #[test]
    fn qualified_name_skips_anonymous_namespace_and_global_root() {
        let mut corpus = Corpus::new();
        let anon_id = SymbolId::from_fingerprint("anon", 0);
        corpus.insert(Info::Namespace(NamespaceInfo {
            core: Core::new(anon_id, "", SymbolId::GLOBAL),
            members: vec![],
            is_inline: false,
        }));
        let mut fn_info = make_function("foo", anon_id);
        fn_info.core_mut().namespace = vec![SymbolId::GLOBAL, anon_id];
        let fn_id = fn_info.id();
        corpus.insert(fn_info);
        assert_eq!(corpus.qualified_name(fn_id), "foo");
    }
}
