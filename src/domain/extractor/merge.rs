//! Per-symbol merge-on-redeclaration rules (spec.md §4.4): when the same
//! `SymbolId` is reached a second time (a redeclaration, or the same
//! declaration reached via two traversal paths), combine the two
//! contributions rather than overwrite or duplicate.

use crate::domain::error::CoreError;
use crate::domain::extraction_mode::ExtractionMode;
use crate::domain::info::Info;
use crate::domain::ports::Decl;

/// Folds a newly-seen redeclaration's common fields into an
/// already-recorded `Info`: the extraction mode widens via the lattice
/// join, a new definition location replaces a prior declaration-only
/// location, and a second doc comment is kept only if none was recorded
/// yet — otherwise a warning is raised (the duplicate-doc-comment Open
/// Question resolved in DESIGN.md).
pub fn merge_redeclaration(
    existing: &mut Info,
    decl: &dyn Decl,
    mode: ExtractionMode,
    warnings: &mut Vec<CoreError>,
) {
    let core = existing.core_mut();
    core.mode = core.mode.join(mode);

    if decl.is_definition() {
        let point = crate::domain::location::SourcePoint {
            line: decl.line(),
            column: decl.column(),
        };
        core.def_loc = Some(crate::domain::location::Location::new(
            decl.file(),
            point,
            point,
        ));
    }

    if let Some(raw) = decl.raw_comment() {
        if core.doc.is_empty() {
            core.doc = crate::domain::extractor::doc_assembler::assemble(raw);
        } else {
            warnings.push(CoreError::Warning(format!(
                "duplicate doc comment discarded for symbol {}",
                core.name
            )));
        }
    }

    merge_function_params(existing, decl);
}

/// A forward declaration's parameters may be unnamed (`void f(int, int)`);
/// the first redeclaration that names them (or supplies defaults) wins,
/// since later declarations rarely add more than the first definition had.
fn merge_function_params(existing: &mut Info, decl: &dyn Decl) {
    let Info::Function(f) = existing else { return };
    let incoming = decl.parameters();
    if incoming.len() != f.params.len() {
        return;
    }
    for (slot, new_param) in f.params.iter_mut().zip(incoming.into_iter()) {
        if slot.name.is_empty() && !new_param.name.is_empty() {
            slot.name = new_param.name;
        }
        if slot.default.is_none() && new_param.default.is_some() {
            slot.default = new_param.default;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::frontend::fake::FakeDecl;
    use crate::domain::info::{Access, Core, FunctionClass, FunctionInfo};
    use crate::domain::symbol_id::SymbolId;
    use crate::domain::types::Type;

    fn function() -> Info {
        Info::Function(FunctionInfo {
            core: Core::new(SymbolId::from_fingerprint("foo", 0), "foo", SymbolId::GLOBAL),
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
    fn mode_widens_to_least_specific() {
        let mut info = function();
        let decl = FakeDecl::function("foo", Access::Public);
        let mut warnings = Vec::new();
        merge_redeclaration(&mut info, &decl, ExtractionMode::Dependency, &mut warnings);
        assert_eq!(info.core().mode, ExtractionMode::Dependency);
    }

    #[test]
    fn second_doc_comment_is_discarded_with_warning() {
        let mut info = function();
        info.core_mut().doc.blocks.push(crate::domain::doc::Block::Brief(vec![]));
        let mut decl = FakeDecl::function("foo", Access::Public);
        decl.set_raw_comment("/** another doc */");
        let mut warnings = Vec::new();
        merge_redeclaration(&mut info, &decl, ExtractionMode::Regular, &mut warnings);
        assert_eq!(warnings.len(), 1);
        assert_eq!(info.core().doc.blocks.len(), 1);
    }

    #[test]
    fn unnamed_forward_declared_param_is_filled_in_by_the_definition() {
        use crate::domain::info::ParamInfo;
        use crate::domain::ports::ParamDecl;

        let mut info = function();
        info.as_function_mut().unwrap().params = vec![ParamInfo {
            name: String::new(),
            param_type: Type::Builtin { name: "int".into(), qual: Default::default() },
            default: None,
        }];
        let mut decl = FakeDecl::function("foo", Access::Public);
        decl.set_parameters(vec![ParamDecl {
            name: "count".into(),
            param_type: Type::Builtin { name: "int".into(), qual: Default::default() },
            default: Some("0".into()),
        }]);
        let mut warnings = Vec::new();
        merge_redeclaration(&mut info, &decl, ExtractionMode::Regular, &mut warnings);
        let params = &info.as_function().unwrap().params;
        assert_eq!(params[0].name, "count");
        assert_eq!(params[0].default.as_deref(), Some("0"));
    }
}
