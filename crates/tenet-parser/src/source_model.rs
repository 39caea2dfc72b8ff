use tenet_core::types::Span;

/// The parsed, structured representation of one input file.
///
/// Built once per file by [`crate::builder::ModelBuilder`], handed to the
/// checker, and discarded afterwards. All sequences preserve source order.
#[derive(Debug, Clone)]
pub struct SourceModel {
    /// Repo-relative or absolute file path, used verbatim in diagnostics.
    pub file_path: String,
    /// All import statements, in source order.
    pub imports: Vec<ImportRecord>,
    /// All named declarations, in source order (nested ones included).
    pub declarations: Vec<Declaration>,
    /// Positions of every `export default` site.
    pub default_exports: Vec<Span>,
    /// Every identifier occurrence, in source order.
    pub identifiers: Vec<IdentifierRef>,
    /// Total line count of the file.
    pub line_count: u32,
}

/// What kind of declaration a [`Declaration`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
    TypeAlias,
    Function,
    Variable,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::TypeAlias => "type alias",
            DeclKind::Function => "function",
            DeclKind::Variable => "variable",
        }
    }
}

/// Binding keyword of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Const,
    Let,
    Var,
}

/// A named declaration extracted from source.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Simple name of the declared symbol.
    pub name: String,
    pub kind: DeclKind,
    /// Position of the declaration statement.
    pub span: Span,
    /// Whether the declaration is exported.
    pub is_exported: bool,
    /// `const`/`let`/`var` for variables, `None` otherwise.
    pub binding: Option<BindingKind>,
    /// Explicit type annotation text, without the leading colon.
    pub annotation: Option<String>,
    /// Shape of the initializer expression, if any.
    pub initializer: Option<Initializer>,
    /// For type aliases whose right-hand side is a union: one entry per
    /// union member. Empty for everything else.
    pub union_members: Vec<UnionMember>,
}

/// Summary of a declaration's initializer expression.
#[derive(Debug, Clone)]
pub struct Initializer {
    pub kind: InitKind,
    /// Constructor expression text for `new` initializers (e.g. "Map").
    pub constructor: Option<String>,
    /// Whether the constructor carries explicit type arguments.
    pub has_type_arguments: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitKind {
    New,
    Call,
    Arrow,
    ArrayLiteral,
    ObjectLiteral,
    StringLiteral,
    NumberLiteral,
    BooleanLiteral,
    Other,
}

/// One member of a union type alias.
#[derive(Debug, Clone)]
pub struct UnionMember {
    pub span: Span,
    pub shape: UnionShape,
}

/// The shape of a union member, as far as rules need to see it.
#[derive(Debug, Clone)]
pub enum UnionShape {
    /// An inline object type. `discriminants` lists its literal-typed
    /// properties as (name, literal text) pairs.
    Object { discriminants: Vec<(String, String)> },
    /// A reference to a named type.
    Named(String),
    /// A literal type (e.g. `'circle'`, `42`).
    Literal(String),
    Other,
}

/// An import statement extracted from source.
#[derive(Debug, Clone)]
pub struct ImportRecord {
    /// The module specifier, without quotes.
    pub source: String,
    /// Names brought into scope (aliases win over original names).
    pub names: Vec<String>,
    pub span: Span,
    /// Whether the specifier is relative (`./foo`, `../bar`).
    pub is_relative: bool,
    /// `import type { ... }` imports.
    pub is_type_only: bool,
    /// Bare `import './x'` imports with no bindings.
    pub is_side_effect: bool,
}

/// A single identifier occurrence.
#[derive(Debug, Clone)]
pub struct IdentifierRef {
    pub name: String,
    pub span: Span,
}
