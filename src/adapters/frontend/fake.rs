//! An in-memory `Frontend`/`Decl` implementation used by unit and
//! integration tests, so the extractor's traversal/filter/merge logic is
//! exercised without linking libclang — mirroring how the teacher's own
//! `tests/` drive the domain through constructed fixtures rather than
//! real SCIP files.

use crate::domain::error::CoreError;
use crate::domain::extraction_mode::ExtractionMode;
use crate::domain::info::Access;
use crate::domain::ports::{CompileCommand, Decl, Frontend, ParamDecl};
use crate::domain::template::TemplateInfo;
use crate::domain::types::Type;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FakeDecl {
    kind: String,
    name: String,
    access: Access,
    file: PathBuf,
    line: u32,
    column: u32,
    is_definition: bool,
    raw_comment: Option<String>,
    template_info: Option<TemplateInfo>,
    declared_type: Option<Type>,
    children: Vec<FakeDecl>,
    default_mode: ExtractionMode,
    parameters: Vec<ParamDecl>,
    is_implicit: bool,
    is_anonymous: bool,
    is_file_static: bool,
    is_inline_namespace: bool,
    is_scoped_enum: bool,
    is_static: bool,
    is_constexpr: bool,
    initializer: Option<String>,
    is_mutable: bool,
    bitfield_width: Option<u32>,
    is_final: bool,
}

impl FakeDecl {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, access: Access) -> Self {
        FakeDecl {
            kind: kind.into(),
            name: name.into(),
            access,
            file: PathBuf::from("fake.cpp"),
            line: 1,
            column: 1,
            is_definition: true,
            raw_comment: None,
            template_info: None,
            declared_type: None,
            children: Vec::new(),
            default_mode: ExtractionMode::Regular,
            parameters: Vec::new(),
            is_implicit: false,
            is_anonymous: false,
            is_file_static: false,
            is_inline_namespace: false,
            is_scoped_enum: false,
            is_static: false,
            is_constexpr: false,
            initializer: None,
            is_mutable: false,
            bitfield_width: None,
            is_final: false,
        }
    }

    pub fn function(name: impl Into<String>, access: Access) -> Self {
        FakeDecl::new("function", name, access)
    }

    pub fn namespace(name: impl Into<String>) -> Self {
        FakeDecl::new("namespace", name, Access::None)
    }

    pub fn add_child(&mut self, child: FakeDecl) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn set_raw_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.raw_comment = Some(comment.into());
        self
    }

    pub fn set_file(&mut self, file: impl Into<PathBuf>) -> &mut Self {
        self.file = file.into();
        self
    }

    pub fn set_parameters(&mut self, params: Vec<ParamDecl>) -> &mut Self {
        self.parameters = params;
        self
    }

    pub fn set_implicit(&mut self, value: bool) -> &mut Self {
        self.is_implicit = value;
        self
    }

    pub fn set_anonymous(&mut self, value: bool) -> &mut Self {
        self.is_anonymous = value;
        self
    }

    pub fn set_file_static(&mut self, value: bool) -> &mut Self {
        self.is_file_static = value;
        self
    }

    pub fn set_inline_namespace(&mut self, value: bool) -> &mut Self {
        self.is_inline_namespace = value;
        self
    }

    pub fn set_scoped_enum(&mut self, value: bool) -> &mut Self {
        self.is_scoped_enum = value;
        self
    }

    pub fn set_static(&mut self, value: bool) -> &mut Self {
        self.is_static = value;
        self
    }

    pub fn set_constexpr(&mut self, value: bool) -> &mut Self {
        self.is_constexpr = value;
        self
    }

    pub fn set_initializer(&mut self, value: impl Into<String>) -> &mut Self {
        self.initializer = Some(value.into());
        self
    }

    pub fn set_mutable(&mut self, value: bool) -> &mut Self {
        self.is_mutable = value;
        self
    }

    pub fn set_bitfield_width(&mut self, value: u32) -> &mut Self {
        self.bitfield_width = Some(value);
        self
    }

    pub fn set_final(&mut self, value: bool) -> &mut Self {
        self.is_final = value;
        self
    }
}

impl Decl for FakeDecl {
    fn kind_name(&self) -> &str {
        &self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fingerprint(&self) -> String {
        format!("{}::{}", self.kind, self.name)
    }

    fn access(&self) -> Access {
        self.access
    }

    fn file(&self) -> &Path {
        &self.file
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn column(&self) -> u32 {
        self.column
    }

    fn is_definition(&self) -> bool {
        self.is_definition
    }

    fn raw_comment(&self) -> Option<&str> {
        self.raw_comment.as_deref()
    }

    fn template_info(&self) -> Option<TemplateInfo> {
        self.template_info.clone()
    }

    fn declared_type(&self) -> Option<Type> {
        self.declared_type.clone()
    }

    fn children(&self) -> Vec<Box<dyn Decl>> {
        self.children
            .iter()
            .cloned()
            .map(|c| Box::new(c) as Box<dyn Decl>)
            .collect()
    }

    fn default_mode(&self) -> ExtractionMode {
        self.default_mode
    }

    fn parameters(&self) -> Vec<ParamDecl> {
        self.parameters.clone()
    }

    fn is_implicit(&self) -> bool {
        self.is_implicit
    }

    fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    fn is_file_static(&self) -> bool {
        self.is_file_static
    }

    fn is_inline_namespace(&self) -> bool {
        self.is_inline_namespace
    }

    fn is_scoped_enum(&self) -> bool {
        self.is_scoped_enum
    }

    fn is_static(&self) -> bool {
        self.is_static
    }

    fn is_constexpr(&self) -> bool {
        self.is_constexpr
    }

    fn initializer(&self) -> Option<String> {
        self.initializer.clone()
    }

    fn is_mutable(&self) -> bool {
        self.is_mutable
    }

    fn bitfield_width(&self) -> Option<u32> {
        self.bitfield_width
    }

    fn is_final(&self) -> bool {
        self.is_final
    }
}

/// A `Frontend` that returns a fixed, caller-supplied list of root
/// declarations regardless of which compile command it's asked to parse.
pub struct FakeFrontend {
    roots: Vec<FakeDecl>,
}

impl FakeFrontend {
    pub fn new(roots: Vec<FakeDecl>) -> Self {
        FakeFrontend { roots }
    }
}

impl Frontend for FakeFrontend {
    fn parse_tu(&self, _command: &CompileCommand) -> Result<Vec<Box<dyn Decl>>, CoreError> {
        Ok(self
            .roots
            .iter()
            .cloned()
            .map(|d| Box::new(d) as Box<dyn Decl>)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_decl_reports_its_own_fields() {
        let decl = FakeDecl::function("foo", Access::Public);
        assert_eq!(decl.name(), "foo");
        assert_eq!(decl.kind_name(), "function");
        assert_eq!(decl.access(), Access::Public);
    }

    #[test]
    fn fake_frontend_returns_configured_roots() {
        let frontend = FakeFrontend::new(vec![FakeDecl::function("foo", Access::Public)]);
        let command = CompileCommand {
            file: "a.cpp".into(),
            directory: ".".into(),
            arguments: vec![],
        };
        let roots = frontend.parse_tu(&command).unwrap();
        assert_eq!(roots.len(), 1);
    }

    #[test]
    fn scalar_setters_round_trip() {
        let mut decl = FakeDecl::function("foo", Access::Public);
        decl.set_static(true).set_constexpr(true).set_initializer("42");
        assert!(decl.is_static());
        assert!(decl.is_constexpr());
        assert_eq!(decl.initializer(), Some("42".to_string()));
    }

    #[test]
    fn parameters_round_trip() {
        let mut decl = FakeDecl::function("foo", Access::Public);
        decl.set_parameters(vec![ParamDecl {
            name: "x".into(),
            param_type: Type::Builtin { name: "int".into(), qual: Default::default() },
            default: None,
        }]);
        assert_eq!(decl.parameters().len(), 1);
    }
}
