//! Template parameter/argument metadata and the tagged-sum `TParam`/`TArg`
//! leaves, plus [`TemplateInfo`] attached to a primary template and its
//! specializations.

use crate::domain::symbol_id::SymbolId;
use crate::domain::types::Type;

/// A template parameter as declared on the primary template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TParam {
    /// `template <typename T>` (or `class T`), with an optional default.
    Type {
        name: String,
        is_pack: bool,
        default: Option<Type>,
    },
    /// `template <int N>` (non-type template parameter).
    NonType {
        name: String,
        is_pack: bool,
        param_type: Type,
        default: Option<String>,
    },
    /// `template <template <typename> class TT>`.
    Template {
        name: String,
        is_pack: bool,
        params: Vec<TParam>,
        default: Option<String>,
    },
}

impl TParam {
    pub fn as_type(&self) -> Option<(&str, bool, Option<&Type>)> {
        match self {
            TParam::Type { name, is_pack, default } => {
                Some((name.as_str(), *is_pack, default.as_ref()))
            }
            _ => None,
        }
    }

    pub fn as_non_type(&self) -> Option<(&str, bool, &Type)> {
        match self {
            TParam::NonType { name, is_pack, param_type, .. } => {
                Some((name.as_str(), *is_pack, param_type))
            }
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TParam::Type { name, .. } => name,
            TParam::NonType { name, .. } => name,
            TParam::Template { name, .. } => name,
        }
    }
}

/// An argument supplied at a template specialization or instantiation site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TArg {
    Type(Type),
    NonType(String),
    Template(SymbolId),
}

impl TArg {
    pub fn as_type(&self) -> Option<&Type> {
        match self {
            TArg::Type(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_non_type(&self) -> Option<&str> {
        match self {
            TArg::NonType(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Which kind of template declaration a symbol is, and its relationship to
/// a primary template (if it is a specialization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub params: Vec<TParam>,
    /// Set only on explicit/partial specializations; points back at the
    /// primary template's id.
    pub primary: Option<SymbolId>,
    /// Arguments this declaration specializes the primary template with;
    /// empty for the primary template itself.
    pub args: Vec<TArg>,
    pub is_partial: bool,
}

impl TemplateInfo {
    pub fn primary(params: Vec<TParam>) -> Self {
        TemplateInfo {
            params,
            primary: None,
            args: Vec::new(),
            is_partial: false,
        }
    }

    pub fn is_specialization(&self) -> bool {
        self.primary.is_some()
    }
}
