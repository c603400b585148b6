//! A thin `clang-sys` binding behind the `Frontend`/`Decl` ports. This
//! adapter's job is to forward libclang cursors into `Decl` values; it
//! does not reimplement any AST semantics — those live in
//! `domain::extractor`. Grounded on
//! `examples/other_examples/manifests/shuaimu-fragile/Cargo.toml`'s
//! `clang-sys` dependency and the cursor-kind enum shape in
//! `...fragile-clang-src-ast.rs.rs`.

use crate::domain::error::CoreError;
use crate::domain::extraction_mode::ExtractionMode;
use crate::domain::info::Access;
use crate::domain::ports::{CompileCommand, Decl, Frontend, ParamDecl};
use crate::domain::template::TemplateInfo;
use crate::domain::types::{CvQualifiers, Type};
use clang_sys::*;
use std::ffi::{CStr, CString};
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT_CLANG: Once = Once::new();

fn ensure_loaded() {
    INIT_CLANG.call_once(|| unsafe {
        load().expect("failed to load libclang shared library");
    });
}

/// Owns one libclang cursor, cloned out of the tree eagerly (libclang
/// cursors are only valid while their translation unit is alive, and the
/// `Decl` trait object must outlive a single `parse_tu` call's borrow).
pub struct ClangDecl {
    kind: String,
    name: String,
    fingerprint: String,
    access: Access,
    file: PathBuf,
    line: u32,
    column: u32,
    is_definition: bool,
    raw_comment: Option<String>,
    children: Vec<ClangDecl>,
    is_anonymous: bool,
    is_file_static: bool,
    is_static: bool,
    is_inline_namespace: bool,
    is_scoped_enum: bool,
    bitfield_width: Option<u32>,
    parameters: Vec<ParamDecl>,
}

impl Decl for ClangDecl {
    fn kind_name(&self) -> &str {
        &self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fingerprint(&self) -> String {
        self.fingerprint.clone()
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
        // Template-parameter extraction requires walking
        // CXCursor_TemplateTypeParameter children with libclang's
        // clang_Cursor_ children API; omitted from this boundary-only
        // adapter, mirrored by the fake frontend in tests instead.
        None
    }

    fn declared_type(&self) -> Option<Type> {
        None
    }

    fn children(&self) -> Vec<Box<dyn Decl>> {
        self.children
            .iter()
            .cloned()
            .map(|c| Box::new(c) as Box<dyn Decl>)
            .collect()
    }

    fn default_mode(&self) -> ExtractionMode {
        ExtractionMode::Regular
    }

    fn parameters(&self) -> Vec<ParamDecl> {
        self.parameters.clone()
    }

    fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    fn is_file_static(&self) -> bool {
        self.is_file_static
    }

    fn is_static(&self) -> bool {
        self.is_static
    }

    fn is_inline_namespace(&self) -> bool {
        self.is_inline_namespace
    }

    fn is_scoped_enum(&self) -> bool {
        self.is_scoped_enum
    }

    fn bitfield_width(&self) -> Option<u32> {
        self.bitfield_width
    }
}

impl Clone for ClangDecl {
    fn clone(&self) -> Self {
        ClangDecl {
            kind: self.kind.clone(),
            name: self.name.clone(),
            fingerprint: self.fingerprint.clone(),
            access: self.access,
            file: self.file.clone(),
            line: self.line,
            column: self.column,
            is_definition: self.is_definition,
            raw_comment: self.raw_comment.clone(),
            children: self.children.clone(),
            is_anonymous: self.is_anonymous,
            is_file_static: self.is_file_static,
            is_static: self.is_static,
            is_inline_namespace: self.is_inline_namespace,
            is_scoped_enum: self.is_scoped_enum,
            bitfield_width: self.bitfield_width,
            parameters: self.parameters.clone(),
        }
    }
}

fn kind_name(kind: CXCursorKind) -> &'static str {
    match kind {
        CXCursor_Namespace => "namespace",
        CXCursor_ClassDecl => "class",
        CXCursor_StructDecl => "struct",
        CXCursor_UnionDecl => "union",
        CXCursor_EnumDecl => "enum",
        CXCursor_EnumConstantDecl => "enumerator",
        CXCursor_FunctionDecl => "function",
        CXCursor_CXXMethod => "method",
        CXCursor_Constructor => "constructor",
        CXCursor_Destructor => "destructor",
        CXCursor_ConversionFunction => "conversion",
        CXCursor_VarDecl => "variable",
        CXCursor_FieldDecl => "field",
        CXCursor_TypedefDecl | CXCursor_TypeAliasDecl => "typealias",
        CXCursor_FriendDecl => "friend",
        _ => "unhandled",
    }
}

fn access_of(access: CX_CXXAccessSpecifier) -> Access {
    match access {
        CX_CXXPublic => Access::Public,
        CX_CXXProtected => Access::Protected,
        CX_CXXPrivate => Access::Private,
        _ => Access::None,
    }
}

unsafe fn cx_string_to_rust(s: CXString) -> String {
    let ptr = clang_getCString(s);
    let text = if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    };
    clang_disposeString(s);
    text
}

unsafe fn convert_cursor(cursor: CXCursor) -> Option<ClangDecl> {
    let kind = clang_getCursorKind(cursor);
    let name_str = cx_string_to_rust(clang_getCursorSpelling(cursor));
    let usr = cx_string_to_rust(clang_getCursorUSR(cursor));
    let location = clang_getCursorLocation(cursor);
    let mut file = std::ptr::null_mut();
    let mut line = 0u32;
    let mut column = 0u32;
    let mut offset = 0u32;
    clang_getSpellingLocation(location, &mut file, &mut line, &mut column, &mut offset);
    let file_name = if file.is_null() {
        String::new()
    } else {
        cx_string_to_rust(clang_getFileName(file))
    };
    let access = access_of(clang_getCXXAccessSpecifier(cursor));
    let is_definition = clang_isCursorDefinition(cursor) != 0;
    let comment = cx_string_to_rust(clang_getRawCommentText(cursor));
    let is_anonymous = clang_Cursor_isAnonymous(cursor) != 0;
    let storage = clang_Cursor_getStorageClass(cursor);
    let is_static = storage == CX_SC_Static;
    let is_file_static = is_static && kind != CXCursor_CXXMethod && kind != CXCursor_FieldDecl;
    let is_inline_namespace = kind == CXCursor_Namespace && clang_Cursor_isInlineNamespace(cursor) != 0;
    let is_scoped_enum = kind == CXCursor_EnumDecl && clang_EnumDecl_isScoped(cursor) != 0;
    let bitfield_width = if clang_Cursor_isBitField(cursor) != 0 {
        Some(clang_getFieldDeclBitWidth(cursor) as u32)
    } else {
        None
    };
    let parameters = if kind == CXCursor_FunctionDecl
        || kind == CXCursor_CXXMethod
        || kind == CXCursor_Constructor
        || kind == CXCursor_Destructor
        || kind == CXCursor_ConversionFunction
    {
        collect_parameters(cursor)
    } else {
        Vec::new()
    };

    let mut decl = ClangDecl {
        kind: kind_name(kind).to_string(),
        name: name_str,
        fingerprint: if usr.is_empty() {
            format!("{}:{}:{}", file_name, line, column)
        } else {
            usr
        },
        access,
        file: PathBuf::from(file_name),
        line,
        column,
        is_definition,
        raw_comment: if comment.is_empty() { None } else { Some(comment) },
        children: Vec::new(),
        is_anonymous,
        is_file_static,
        is_static,
        is_inline_namespace,
        is_scoped_enum,
        bitfield_width,
        parameters,
    };

    let children_box: Box<Vec<ClangDecl>> = Box::new(Vec::new());
    let raw = Box::into_raw(children_box);
    extern "C" fn visitor(
        cursor: CXCursor,
        _parent: CXCursor,
        data: CXClientData,
    ) -> CXChildVisitResult {
        unsafe {
            let children = &mut *(data as *mut Vec<ClangDecl>);
            if let Some(child) = convert_cursor(cursor) {
                children.push(child);
            }
        }
        CXChildVisit_Continue
    }
    clang_visitChildren(cursor, visitor, raw as CXClientData);
    let children = *Box::from_raw(raw);
    decl.children = children;

    if decl.kind == "unhandled" && decl.children.is_empty() {
        return None;
    }
    Some(decl)
}

/// Reads `cursor`'s formal parameters via `clang_Cursor_getNumArguments`/
/// `clang_Cursor_getArgument`. The parameter type is surfaced as an opaque
/// spelling string rather than resolved to a `Named` type's `SymbolId` —
/// full type resolution is out of scope for this boundary-only adapter,
/// same as `declared_type()` above.
unsafe fn collect_parameters(cursor: CXCursor) -> Vec<ParamDecl> {
    let count = clang_Cursor_getNumArguments(cursor);
    if count < 0 {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let arg = clang_Cursor_getArgument(cursor, i as u32);
            let name = cx_string_to_rust(clang_getCursorSpelling(arg));
            let type_spelling = cx_string_to_rust(clang_getTypeSpelling(clang_getCursorType(arg)));
            ParamDecl {
                name,
                param_type: Type::Builtin {
                    name: type_spelling,
                    qual: CvQualifiers::default(),
                },
                default: None,
            }
        })
        .collect()
}

pub struct ClangFrontend;

impl ClangFrontend {
    pub fn new() -> Self {
        ensure_loaded();
        ClangFrontend
    }
}

impl Default for ClangFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for ClangFrontend {
    fn parse_tu(&self, command: &CompileCommand) -> Result<Vec<Box<dyn Decl>>, CoreError> {
        unsafe {
            let index = clang_createIndex(0, 0);
            if index.is_null() {
                return Err(CoreError::FrontendTu {
                    file: command.file.clone(),
                    cause: "failed to create libclang index".into(),
                });
            }
            let file_c = CString::new(command.file.to_string_lossy().as_bytes())
                .map_err(|e| CoreError::Input {
                    path: command.file.clone(),
                    message: e.to_string(),
                })?;
            let arg_cstrings: Vec<CString> = command
                .arguments
                .iter()
                .map(|a| CString::new(a.as_str()).unwrap_or_default())
                .collect();
            let arg_ptrs: Vec<*const std::os::raw::c_char> =
                arg_cstrings.iter().map(|c| c.as_ptr()).collect();

            let mut tu = std::ptr::null_mut();
            let error = clang_parseTranslationUnit2(
                index,
                file_c.as_ptr(),
                arg_ptrs.as_ptr(),
                arg_ptrs.len() as i32,
                std::ptr::null_mut(),
                0,
                CXTranslationUnit_None,
                &mut tu,
            );
            if error != CXError_Success || tu.is_null() {
                clang_disposeIndex(index);
                return Err(CoreError::FrontendTu {
                    file: command.file.clone(),
                    cause: format!("libclang parse error code {error}"),
                });
            }

            let root = clang_getTranslationUnitCursor(tu);
            let result = convert_cursor(root)
                .map(|decl| decl.children.into_iter().map(|c| Box::new(c) as Box<dyn Decl>).collect())
                .unwrap_or_default();

            clang_disposeTranslationUnit(tu);
            clang_disposeIndex(index);
            Ok(result)
        }
    }
}
