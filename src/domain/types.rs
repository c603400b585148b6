//! The [`Type`] tagged sum describing a C++ type expression, with
//! accessor methods mirroring the teacher's `SymbolDetails::as_*()` pattern
//! so call sites narrow a type without a nested `match`.

use crate::domain::names::Name;
use crate::domain::symbol_id::SymbolId;

/// cv-ref qualifiers applied to a type at one nesting level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CvQualifiers {
    pub is_const: bool,
    pub is_volatile: bool,
}

/// A C++ type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A fundamental type (`int`, `bool`, `void`, ...).
    Builtin { name: String, qual: CvQualifiers },
    /// A reference to a named, possibly templated, user type.
    Named { name: Name, qual: CvQualifiers },
    /// `T*`.
    Pointer { pointee: Box<Type>, qual: CvQualifiers },
    /// `T&` or `T&&`.
    Reference { pointee: Box<Type>, is_rvalue: bool },
    /// `T[N]` or `T[]`.
    Array { element: Box<Type>, size: Option<u64> },
    /// A function type, e.g. as named in a function pointer or `auto`
    /// trailing-return-type position.
    Function {
        return_type: Box<Type>,
        params: Vec<Type>,
        is_variadic: bool,
        is_noexcept: bool,
    },
    /// `auto` / `decltype(auto)` left unresolved because the declaration
    /// that would resolve it was outside the extraction scope.
    Auto { constraint: Option<Name> },
}

impl Type {
    pub fn as_builtin(&self) -> Option<(&str, CvQualifiers)> {
        match self {
            Type::Builtin { name, qual } => Some((name.as_str(), *qual)),
            _ => None,
        }
    }

    pub fn as_named(&self) -> Option<(&Name, CvQualifiers)> {
        match self {
            Type::Named { name, qual } => Some((name, *qual)),
            _ => None,
        }
    }

    pub fn as_pointer(&self) -> Option<&Type> {
        match self {
            Type::Pointer { pointee, .. } => Some(pointee),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<(&Type, bool)> {
        match self {
            Type::Reference { pointee, is_rvalue } => Some((pointee, *is_rvalue)),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<(&Type, &[Type], bool, bool)> {
        match self {
            Type::Function {
                return_type,
                params,
                is_variadic,
                is_noexcept,
            } => Some((return_type, params.as_slice(), *is_variadic, *is_noexcept)),
            _ => None,
        }
    }

    /// The named symbol this type ultimately refers to, if any — used by
    /// the extractor to discover dependency edges that must also be
    /// extracted (spec.md §4.2's dependency traversal mode).
    pub fn referenced_symbol(&self) -> Option<SymbolId> {
        match self {
            Type::Named { name, .. } => name.symbol(),
            Type::Pointer { pointee, .. } => pointee.referenced_symbol(),
            Type::Reference { pointee, .. } => pointee.referenced_symbol(),
            Type::Array { element, .. } => element.referenced_symbol(),
            _ => None,
        }
    }

    /// Strip top-level cv-qualifiers only, leaving any nested pointee's
    /// qualifiers untouched. Used for `constexpr`/`consteval` function
    /// return and parameter types (see the Open Question decision in
    /// DESIGN.md): only the outermost qualifier is implied away, a nested
    /// `const` inside a pointee still means something to a caller.
    pub fn strip_top_level_cv(&self) -> Type {
        match self {
            Type::Builtin { name, .. } => Type::Builtin {
                name: name.clone(),
                qual: CvQualifiers::default(),
            },
            Type::Named { name, .. } => Type::Named {
                name: name.clone(),
                qual: CvQualifiers::default(),
            },
            Type::Pointer { pointee, .. } => Type::Pointer {
                pointee: pointee.clone(),
                qual: CvQualifiers::default(),
            },
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_narrow_to_matching_variant_only() {
        let t = Type::Builtin {
            name: "int".into(),
            qual: CvQualifiers::default(),
        };
        assert!(t.as_builtin().is_some());
        assert!(t.as_named().is_none());
        assert!(t.as_pointer().is_none());
    }

    #[test]
    fn referenced_symbol_descends_through_pointer_and_array() {
        let id = SymbolId::from_fingerprint("Foo", 0);
        let named = Type::Named {
            name: Name::Identifier {
                name: "Foo".into(),
                symbol: Some(id),
            },
            qual: CvQualifiers::default(),
        };
        let ptr = Type::Pointer {
            pointee: Box::new(named.clone()),
            qual: CvQualifiers::default(),
        };
        let arr = Type::Array {
            element: Box::new(ptr.clone()),
            size: Some(4),
        };
        assert_eq!(ptr.referenced_symbol(), Some(id));
        assert_eq!(arr.referenced_symbol(), Some(id));
    }

    #[test]
    fn strip_top_level_cv_only_touches_outer_level() {
        let mut qual = CvQualifiers::default();
        qual.is_const = true;
        let t = Type::Builtin {
            name: "int".into(),
            qual,
        };
        let stripped = t.strip_top_level_cv();
        assert!(!stripped.as_builtin().unwrap().1.is_const);
    }
}
