//! Type/Name sub-builders: turn a frontend [`Decl`] into an `Info`
//! variant. Mirrors spec.md §4.3's "small, composable sub-builders"
//! description — one function per declaration kind, sharing the common
//! `Core` construction helper.

use crate::domain::extraction_mode::ExtractionMode;
use crate::domain::extractor::doc_assembler;
use crate::domain::info::{
    Core, EnumInfo, EnumeratorInfo, FieldInfo, FriendInfo, FunctionClass, FunctionInfo, Info,
    MemberTranches, NamespaceInfo, ParamInfo, RecordInfo, RecordKind, TypeAliasInfo, VariableInfo,
};
use crate::domain::location::{Location, SourcePoint};
use crate::domain::ports::{Decl, ParamDecl};
use crate::domain::symbol_id::SymbolId;
use crate::domain::types::{CvQualifiers, Type};

fn core_for(decl: &dyn Decl, parent: SymbolId, mode: ExtractionMode) -> Core {
    let mut core = Core::new(
        SymbolId::from_fingerprint(&decl.fingerprint(), 0),
        decl.name(),
        parent,
    );
    core.access = decl.access();
    core.mode = mode;
    let point = SourcePoint {
        line: decl.line(),
        column: decl.column(),
    };
    let loc = Location::new(decl.file(), point, point);
    if decl.is_definition() {
        core.def_loc = Some(loc.clone());
    }
    core.locations.push(loc);
    if let Some(raw) = decl.raw_comment() {
        core.doc = doc_assembler::assemble(raw);
    }
    core
}

fn void_type() -> Type {
    Type::Builtin {
        name: "void".into(),
        qual: CvQualifiers::default(),
    }
}

fn param_from_decl(p: &ParamDecl) -> ParamInfo {
    ParamInfo {
        name: p.name.clone(),
        param_type: p.param_type.clone(),
        default: p.default.clone(),
    }
}

/// Builds the `Info` variant for one declaration, dispatching on
/// `decl.kind_name()`. Returns `None` for kinds this crate does not model
/// (spec.md names the supported kind set; anything else is skipped with
/// a debug-level trace rather than an error, since a best-effort AST
/// frontend will surface implementation-detail node kinds we don't care
/// about).
pub fn build_info(decl: &dyn Decl, parent: SymbolId, mode: ExtractionMode) -> Option<Info> {
    let core = core_for(decl, parent, mode);
    match decl.kind_name() {
        "namespace" => Some(Info::Namespace(NamespaceInfo {
            core,
            members: Vec::new(),
            is_inline: decl.is_inline_namespace(),
        })),
        "class" | "struct" | "union" => {
            let kind = match decl.kind_name() {
                "class" => RecordKind::Class,
                "struct" => RecordKind::Struct,
                _ => RecordKind::Union,
            };
            Some(Info::Record(RecordInfo {
                core,
                kind,
                bases: Vec::new(),
                members: MemberTranches::default(),
                template: decl.template_info(),
                is_final: decl.is_final(),
            }))
        }
        "enum" => Some(Info::Enum(EnumInfo {
            core,
            underlying_type: decl.declared_type(),
            is_scoped: decl.is_scoped_enum(),
            enumerators: Vec::new(),
        })),
        "enumerator" => Some(Info::Enumerator(EnumeratorInfo {
            core,
            initializer: decl.initializer(),
        })),
        "function" | "method" | "constructor" | "destructor" | "conversion" => {
            let class = match decl.kind_name() {
                "method" => FunctionClass::Method,
                "constructor" => FunctionClass::Constructor,
                "destructor" => FunctionClass::Destructor,
                "conversion" => FunctionClass::ConversionOperator,
                _ => FunctionClass::Free,
            };
            Some(Info::Function(FunctionInfo {
                core,
                class,
                return_type: decl.declared_type().unwrap_or_else(void_type),
                params: decl.parameters().iter().map(param_from_decl).collect(),
                is_virtual: false,
                is_override: false,
                is_const: false,
                is_noexcept: false,
                is_deleted: false,
                is_defaulted: false,
                template: decl.template_info(),
                lifted_constraint: None,
            }))
        }
        "variable" => Some(Info::Variable(VariableInfo {
            core,
            var_type: decl.declared_type().unwrap_or_else(void_type),
            is_static: decl.is_static(),
            is_constexpr: decl.is_constexpr(),
            initializer: decl.initializer(),
        })),
        "field" => Some(Info::Field(FieldInfo {
            core,
            field_type: decl.declared_type().unwrap_or_else(void_type),
            is_mutable: decl.is_mutable(),
            bitfield_width: decl.bitfield_width(),
            default_member_initializer: decl.initializer(),
        })),
        "typealias" | "typedef" => Some(Info::TypeAlias(TypeAliasInfo {
            core,
            aliased_type: decl.declared_type().unwrap_or_else(void_type),
            template: decl.template_info(),
        })),
        "friend" => Some(Info::Friend(FriendInfo {
            core,
            befriended: None,
        })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::frontend::fake::FakeDecl;
    use crate::domain::info::Access;

    #[test]
    fn unrecognized_kind_yields_none() {
        let decl = FakeDecl::new("weird-kind", "x", Access::Public);
        assert!(build_info(&decl, SymbolId::GLOBAL, ExtractionMode::Regular).is_none());
    }

    #[test]
    fn function_decl_builds_function_info() {
        let decl = FakeDecl::function("foo", Access::Public);
        let info = build_info(&decl, SymbolId::GLOBAL, ExtractionMode::Regular).unwrap();
        assert!(info.as_function().is_some());
    }

    #[test]
    fn doc_comment_is_assigned_on_first_sighting() {
        let mut decl = FakeDecl::function("foo", Access::Public);
        decl.set_raw_comment("/** @brief does a thing */");
        let info = build_info(&decl, SymbolId::GLOBAL, ExtractionMode::Regular).unwrap();
        assert!(!info.core().doc.is_empty());
        assert!(info.core().doc.brief().is_some());
    }

    #[test]
    fn function_parameters_are_extracted() {
        use crate::domain::ports::ParamDecl;
        use crate::domain::types::Type;
        let mut decl = FakeDecl::function("foo", Access::Public);
        decl.set_parameters(vec![ParamDecl {
            name: "x".into(),
            param_type: Type::Builtin { name: "int".into(), qual: Default::default() },
            default: None,
        }]);
        let info = build_info(&decl, SymbolId::GLOBAL, ExtractionMode::Regular).unwrap();
        assert_eq!(info.as_function().unwrap().params.len(), 1);
        assert_eq!(info.as_function().unwrap().params[0].name, "x");
    }

    #[test]
    fn kind_specific_scalars_are_read_from_the_decl() {
        let mut decl = FakeDecl::new("enum", "Color", Access::Public);
        decl.set_scoped_enum(true);
        let info = build_info(&decl, SymbolId::GLOBAL, ExtractionMode::Regular).unwrap();
        assert!(info.as_enum().unwrap().is_scoped);
    }
}
