//! The [`Info`] sum type: one variant per C++ declaration kind, all
//! sharing a common [`Core`] of fields. Mirrors the teacher's
//! `NodeCore` + `enum Node { Function(..), Variable(..) }` shape
//! (`examples/AiricDev-context-footprint/src/domain/node.rs`), generalized
//! from two variants to the full declaration-kind sum named in spec.md §3.

use crate::domain::doc::DocComment;
use crate::domain::extraction_mode::ExtractionMode;
use crate::domain::location::Location;
use crate::domain::symbol_id::SymbolId;
use crate::domain::template::{TArg, TemplateInfo};
use crate::domain::types::Type;

/// C++ access specifier, relative to the declaration's parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
    Private,
    /// Top-level namespace-scope declarations have no access specifier.
    None,
}

/// Fields every `Info` variant carries, regardless of declaration kind.
/// Mirrors the teacher's `NodeCore`.
#[derive(Debug, Clone)]
pub struct Core {
    pub id: SymbolId,
    pub name: String,
    pub parent: SymbolId,
    /// Enclosing namespace chain, outermost first, empty at global scope.
    pub namespace: Vec<SymbolId>,
    pub access: Access,
    pub mode: ExtractionMode,
    pub locations: Vec<Location>,
    pub def_loc: Option<Location>,
    pub doc: DocComment,
    pub attributes: Vec<String>,
}

impl Core {
    pub fn new(id: SymbolId, name: impl Into<String>, parent: SymbolId) -> Self {
        Core {
            id,
            name: name.into(),
            parent,
            namespace: Vec::new(),
            access: Access::None,
            mode: ExtractionMode::Regular,
            locations: Vec::new(),
            def_loc: None,
            doc: DocComment::default(),
            attributes: Vec::new(),
        }
    }
}

/// Access-partitioned member list for a [`RecordInfo`]: each member
/// appears in exactly one tranche, and tranches are always emitted in
/// (Public, Protected, Private) order.
#[derive(Debug, Clone, Default)]
pub struct MemberTranches {
    pub public: Vec<SymbolId>,
    pub protected: Vec<SymbolId>,
    pub private: Vec<SymbolId>,
}

impl MemberTranches {
    /// Links `id` into the tranche matching `access`; a bare namespace-
    /// scope access (`Access::None`) is treated as public, matching a
    /// struct's default member access when no specifier is given.
    pub fn push(&mut self, id: SymbolId, access: Access) {
        let tranche = match access {
            Access::Protected => &mut self.protected,
            Access::Private => &mut self.private,
            Access::Public | Access::None => &mut self.public,
        };
        if !tranche.contains(&id) {
            tranche.push(id);
        }
    }

    /// Public, then protected, then private — the tranche order spec.md
    /// §4.1's `traverse` must honor.
    pub fn ids(&self) -> Vec<SymbolId> {
        self.public
            .iter()
            .chain(self.protected.iter())
            .chain(self.private.iter())
            .copied()
            .collect()
    }

    pub fn merge_from(&mut self, other: &MemberTranches) {
        for id in &other.public {
            self.push(*id, Access::Public);
        }
        for id in &other.protected {
            self.push(*id, Access::Protected);
        }
        for id in &other.private {
            self.push(*id, Access::Private);
        }
    }
}

#[derive(Debug, Clone)]
pub struct NamespaceInfo {
    pub core: Core,
    pub members: Vec<SymbolId>,
    pub is_inline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Class,
    Struct,
    Union,
}

#[derive(Debug, Clone)]
pub struct BaseInfo {
    pub base_type: Type,
    pub access: Access,
    pub is_virtual: bool,
}

#[derive(Debug, Clone)]
pub struct RecordInfo {
    pub core: Core,
    pub kind: RecordKind,
    pub bases: Vec<BaseInfo>,
    pub members: MemberTranches,
    pub template: Option<TemplateInfo>,
    pub is_final: bool,
}

#[derive(Debug, Clone)]
pub struct EnumInfo {
    pub core: Core,
    pub underlying_type: Option<Type>,
    pub is_scoped: bool,
    pub enumerators: Vec<SymbolId>,
}

#[derive(Debug, Clone)]
pub struct EnumeratorInfo {
    pub core: Core,
    pub initializer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionClass {
    Free,
    Method,
    Constructor,
    Destructor,
    ConversionOperator,
}

#[derive(Debug, Clone)]
pub struct ParamInfo {
    pub name: String,
    pub param_type: Type,
    pub default: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FunctionInfo {
    pub core: Core,
    pub class: FunctionClass,
    pub return_type: Type,
    pub params: Vec<ParamInfo>,
    pub is_virtual: bool,
    pub is_override: bool,
    pub is_const: bool,
    pub is_noexcept: bool,
    pub is_deleted: bool,
    pub is_defaulted: bool,
    pub template: Option<TemplateInfo>,
    /// Non-empty when this overload required a constraint lifted out of a
    /// SFINAE pattern (spec.md §4.2's SFINAE-constraint lifting rule).
    pub lifted_constraint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct VariableInfo {
    pub core: Core,
    pub var_type: Type,
    pub is_static: bool,
    pub is_constexpr: bool,
    pub initializer: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FieldInfo {
    pub core: Core,
    pub field_type: Type,
    pub is_mutable: bool,
    pub bitfield_width: Option<u32>,
    pub default_member_initializer: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TypeAliasInfo {
    pub core: Core,
    pub aliased_type: Type,
    pub template: Option<TemplateInfo>,
}

#[derive(Debug, Clone)]
pub struct FriendInfo {
    pub core: Core,
    /// The befriended symbol, if it resolved to one already in the Corpus.
    pub befriended: Option<SymbolId>,
}

#[derive(Debug, Clone)]
pub struct ConceptInfo {
    pub core: Core,
    /// The constraint expression's textual form, e.g. `std::integral<T>`.
    pub constraint: String,
}

#[derive(Debug, Clone)]
pub struct GuideInfo {
    pub core: Core,
    /// The type the deduction guide deduces for its synthesized return.
    pub deduced: Type,
}

#[derive(Debug, Clone)]
pub struct NamespaceAliasInfo {
    pub core: Core,
    pub aliased: SymbolId,
}

/// Which using-declaration form this `UsingInfo` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsingClass {
    /// `using Base::name;`
    Normal,
    /// `using enum E;`
    Enum,
}

#[derive(Debug, Clone)]
pub struct UsingInfo {
    pub core: Core,
    pub class: UsingClass,
    pub introduced_name: String,
    /// The symbols this declaration brings into scope, shadowing any
    /// same-named member already visible.
    pub shadow_decls: Vec<SymbolId>,
}

/// Groups every overload of one function name under a single symbol, so
/// renderers can emit one combined section instead of N near-duplicates.
#[derive(Debug, Clone)]
pub struct OverloadsInfo {
    pub core: Core,
    pub members: Vec<SymbolId>,
}

#[derive(Debug, Clone)]
pub struct SpecializationInfo {
    pub core: Core,
    pub primary: SymbolId,
    pub args: Vec<TArg>,
    /// The record or function this specialization specializes.
    pub specialized: SymbolId,
}

/// One documented C++ declaration, tagged by kind. Every variant embeds a
/// [`Core`]; use [`Info::core`]/[`Info::core_mut`] for kind-agnostic access
/// and the `as_*` accessors for kind-specific fields, mirroring the
/// teacher's `SymbolDetails::as_function()`-style narrowing.
#[derive(Debug, Clone)]
pub enum Info {
    Namespace(NamespaceInfo),
    Record(RecordInfo),
    Enum(EnumInfo),
    Enumerator(EnumeratorInfo),
    Function(FunctionInfo),
    Variable(VariableInfo),
    Field(FieldInfo),
    TypeAlias(TypeAliasInfo),
    Friend(FriendInfo),
    Concept(ConceptInfo),
    Guide(GuideInfo),
    NamespaceAlias(NamespaceAliasInfo),
    Using(UsingInfo),
    Overloads(OverloadsInfo),
    Specialization(SpecializationInfo),
}

macro_rules! core_accessor {
    ($($variant:ident),* $(,)?) => {
        /// Shared fields, regardless of declaration kind.
        pub fn core(&self) -> &Core {
            match self {
                $(Info::$variant(v) => &v.core,)*
            }
        }

        /// Shared fields, regardless of declaration kind.
        pub fn core_mut(&mut self) -> &mut Core {
            match self {
                $(Info::$variant(v) => &mut v.core,)*
            }
        }
    };
}

impl Info {
    core_accessor!(
        Namespace,
        Record,
        Enum,
        Enumerator,
        Function,
        Variable,
        Field,
        TypeAlias,
        Friend,
        Concept,
        Guide,
        NamespaceAlias,
        Using,
        Overloads,
        Specialization,
    );

    pub fn id(&self) -> SymbolId {
        self.core().id
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Info::Namespace(_) => "namespace",
            Info::Record(r) => match r.kind {
                RecordKind::Class => "class",
                RecordKind::Struct => "struct",
                RecordKind::Union => "union",
            },
            Info::Enum(_) => "enum",
            Info::Enumerator(_) => "enumerator",
            Info::Function(_) => "function",
            Info::Variable(_) => "variable",
            Info::Field(_) => "field",
            Info::TypeAlias(_) => "typealias",
            Info::Friend(_) => "friend",
            Info::Concept(_) => "concept",
            Info::Guide(_) => "guide",
            Info::NamespaceAlias(_) => "namespace-alias",
            Info::Using(_) => "using",
            Info::Overloads(_) => "overloads",
            Info::Specialization(_) => "specialization",
        }
    }

    /// The group `Corpus::ordered_traverse` sorts by, collapsing
    /// class/struct/union into one "record" bucket (unlike `kind_name`,
    /// which keeps them distinct for tag naming).
    pub fn traversal_group(&self) -> &'static str {
        match self {
            Info::Record(_) => "record",
            other => other.kind_name(),
        }
    }

    pub fn as_namespace(&self) -> Option<&NamespaceInfo> {
        match self {
            Info::Namespace(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordInfo> {
        match self {
            Info::Record(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut RecordInfo> {
        match self {
            Info::Record(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionInfo> {
        match self {
            Info::Function(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_function_mut(&mut self) -> Option<&mut FunctionInfo> {
        match self {
            Info::Function(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableInfo> {
        match self {
            Info::Variable(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumInfo> {
        match self {
            Info::Enum(v) => Some(v),
            _ => None,
        }
    }

    /// Links `id` into this symbol's member list, where this kind has one.
    /// A no-op for leaf kinds. Records partition by `access`; every other
    /// container kind keeps a flat declaration-order list.
    pub fn add_member(&mut self, id: SymbolId, access: Access) {
        match self {
            Info::Namespace(v) => {
                if !v.members.contains(&id) {
                    v.members.push(id);
                }
            }
            Info::Record(v) => v.members.push(id, access),
            Info::Enum(v) => {
                if !v.enumerators.contains(&id) {
                    v.enumerators.push(id);
                }
            }
            Info::Overloads(v) => {
                if !v.members.contains(&id) {
                    v.members.push(id);
                }
            }
            _ => {}
        }
    }

    /// Every member id, in the order `Corpus::traverse` must yield them:
    /// tranche order (Public, Protected, Private) for records, declaration
    /// order for everything else.
    pub fn member_ids(&self) -> Vec<SymbolId> {
        match self {
            Info::Namespace(v) => v.members.clone(),
            Info::Record(v) => v.members.ids(),
            Info::Enum(v) => v.enumerators.clone(),
            Info::Overloads(v) => v.members.clone(),
            _ => Vec::new(),
        }
    }

    /// Unions `other`'s member list into `self`'s, used when the same
    /// container symbol (most commonly the global namespace) is
    /// independently bootstrapped and populated in more than one
    /// translation unit fragment and the fragments are folded together.
    pub fn merge_members_from(&mut self, other: &Info) {
        match (self, other) {
            (Info::Namespace(a), Info::Namespace(b)) => {
                for id in &b.members {
                    if !a.members.contains(id) {
                        a.members.push(*id);
                    }
                }
            }
            (Info::Record(a), Info::Record(b)) => a.members.merge_from(&b.members),
            (Info::Enum(a), Info::Enum(b)) => {
                for id in &b.enumerators {
                    if !a.enumerators.contains(id) {
                        a.enumerators.push(*id);
                    }
                }
            }
            (Info::Overloads(a), Info::Overloads(b)) => {
                for id in &b.members {
                    if !a.members.contains(id) {
                        a.members.push(*id);
                    }
                }
            }
            _ => {}
        }
    }
}
