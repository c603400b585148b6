//! The [`Name`] tagged sum: how a declared entity's name is spelled,
//! including qualification and template arguments.

use crate::domain::symbol_id::SymbolId;
use crate::domain::template::TArg;

/// A (possibly qualified, possibly templated) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    /// An ordinary identifier, optionally naming the symbol it resolves to.
    Identifier { name: String, symbol: Option<SymbolId> },
    /// A name instantiated from a template, e.g. `std::vector<int>`.
    Specialization {
        name: String,
        symbol: Option<SymbolId>,
        args: Vec<TArg>,
    },
}

impl Name {
    pub fn identifier(name: impl Into<String>) -> Self {
        Name::Identifier {
            name: name.into(),
            symbol: None,
        }
    }

    pub fn as_identifier(&self) -> Option<(&str, Option<SymbolId>)> {
        match self {
            Name::Identifier { name, symbol } => Some((name.as_str(), *symbol)),
            _ => None,
        }
    }

    pub fn as_specialization(&self) -> Option<(&str, Option<SymbolId>, &[TArg])> {
        match self {
            Name::Specialization { name, symbol, args } => {
                Some((name.as_str(), *symbol, args.as_slice()))
            }
            _ => None,
        }
    }

    /// The bare identifier text regardless of variant, used for sorting
    /// and legible-name generation.
    pub fn text(&self) -> &str {
        match self {
            Name::Identifier { name, .. } => name,
            Name::Specialization { name, .. } => name,
        }
    }

    pub fn symbol(&self) -> Option<SymbolId> {
        match self {
            Name::Identifier { symbol, .. } => *symbol,
            Name::Specialization { symbol, .. } => *symbol,
        }
    }
}
