//! Collision-free, URL-safe human-readable identifiers built once over a
//! finalized Corpus. Grounded on `original_source/`'s `SafeNames.cpp`:
//! operator names are textually substituted (`operator+` -> `operator-plus`)
//! and colliding names are disambiguated with a numeric suffix.

use crate::domain::corpus::Corpus;
use crate::domain::symbol_id::SymbolId;
use indexmap::IndexMap;
use std::collections::HashMap;

fn substitute_operator(name: &str) -> String {
    const TABLE: &[(&str, &str)] = &[
        ("operator+", "operator-plus"),
        ("operator-", "operator-minus"),
        ("operator*", "operator-star"),
        ("operator/", "operator-slash"),
        ("operator==", "operator-eq"),
        ("operator!=", "operator-ne"),
        ("operator<", "operator-lt"),
        ("operator>", "operator-gt"),
        ("operator<<", "operator-shl"),
        ("operator>>", "operator-shr"),
        ("operator[]", "operator-index"),
        ("operator()", "operator-call"),
        ("operator->", "operator-arrow"),
    ];
    for (op, replacement) in TABLE {
        if name == *op {
            return replacement.to_string();
        }
    }
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' })
        .collect()
}

/// Maps every symbol in a Corpus to a unique, URL-safe slug. Built once
/// after extraction completes; renderers consult it for link anchors.
#[derive(Debug, Default)]
pub struct LegibleNames {
    names: IndexMap<SymbolId, String>,
}

impl LegibleNames {
    pub fn build(corpus: &Corpus) -> Self {
        let mut names: IndexMap<SymbolId, String> = IndexMap::new();
        let mut seen: HashMap<String, u32> = HashMap::new();
        for info in corpus.iter_declaration_order() {
            let base = substitute_operator(&info.core().name).to_lowercase();
            let slug = match seen.get_mut(&base) {
                None => {
                    seen.insert(base.clone(), 1);
                    base
                }
                Some(count) => {
                    let suffixed = format!("{base}-{count}");
                    *count += 1;
                    suffixed
                }
            };
            names.insert(info.id(), slug);
        }
        LegibleNames { names }
    }

    pub fn get(&self, id: SymbolId) -> Option<&str> {
        self.names.get(&id).map(|s| s.as_str())
    }
}
