use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use crate::source_model::{
    BindingKind, DeclKind, Declaration, IdentifierRef, ImportRecord, InitKind, Initializer,
    SourceModel, UnionMember, UnionShape,
};
use tenet_core::types::Span;

/// Builds a [`SourceModel`] from file contents.
///
/// Pure function of the input text: the same source always produces the
/// same model. Syntactically invalid input fails with
/// [`ParseError::Syntax`] carrying the position of the first error.
pub struct ModelBuilder {
    parser: Parser,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn build(
        &mut self,
        lang_name: &str,
        path: &Path,
        source: &str,
    ) -> Result<SourceModel, ParseError> {
        let lang = language_for_name(lang_name)?;
        self.parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let tree = self
            .parser
            .parse(source.as_bytes(), None)
            .ok_or(ParseError::ParseFailed)?;
        let root = tree.root_node();

        if root.has_error() {
            return match first_error_node(root) {
                Some(err) => {
                    let pos = err.start_position();
                    Err(ParseError::Syntax {
                        line: pos.row as u32 + 1,
                        column: pos.column as u32 + 1,
                    })
                }
                None => Err(ParseError::Syntax { line: 1, column: 1 }),
            };
        }

        let mut model = SourceModel {
            file_path: path.to_string_lossy().to_string(),
            imports: vec![],
            declarations: vec![],
            default_exports: vec![],
            identifiers: vec![],
            line_count: source.lines().count().max(1) as u32,
        };
        collect(root, source.as_bytes(), false, &mut model);
        Ok(model)
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("language error: {0}")]
    Language(String),
    #[error("syntax error at {line}:{column}")]
    Syntax { line: u32, column: u32 },
    #[error("parse failed")]
    ParseFailed,
}

fn language_for_name(name: &str) -> Result<Language, ParseError> {
    match name {
        "typescript" | "javascript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        other => Err(ParseError::UnsupportedLanguage(other.to_string())),
    }
}

/// Map a file extension to the language name accepted by [`ModelBuilder::build`].
pub fn detect_language(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" | "jsx" => Some("tsx"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        _ => None,
    }
}

fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn span_of(node: Node<'_>) -> Span {
    let pos = node.start_position();
    Span::new(pos.row as u32 + 1, pos.column as u32 + 1)
}

fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    for i in 0..node.child_count() {
        if let Some(found) = node.child(i).and_then(first_error_node) {
            return Some(found);
        }
    }
    None
}

fn has_child_token(node: Node<'_>, kind: &str) -> bool {
    (0..node.child_count()).any(|i| node.child(i).is_some_and(|c| c.kind() == kind))
}

fn recurse(node: Node<'_>, source: &[u8], exported: bool, model: &mut SourceModel) {
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect(child, source, exported, model);
        }
    }
}

fn collect(node: Node<'_>, source: &[u8], exported: bool, model: &mut SourceModel) {
    match node.kind() {
        "import_statement" => {
            extract_import(node, source, model);
            // import-bound identifiers are recorded as import names, not
            // identifier occurrences
        }
        "export_statement" => {
            if has_child_token(node, "default") {
                model.default_exports.push(span_of(node));
            }
            recurse(node, source, true, model);
        }
        "lexical_declaration" | "variable_declaration" => {
            extract_variables(node, source, exported, model);
            recurse(node, source, false, model);
        }
        "function_declaration" | "generator_function_declaration" => {
            push_named_decl(node, source, DeclKind::Function, exported, model);
            recurse(node, source, false, model);
        }
        "class_declaration" | "abstract_class_declaration" => {
            push_named_decl(node, source, DeclKind::Class, exported, model);
            recurse(node, source, false, model);
        }
        "interface_declaration" => {
            push_named_decl(node, source, DeclKind::Interface, exported, model);
            recurse(node, source, false, model);
        }
        "enum_declaration" => {
            push_named_decl(node, source, DeclKind::Enum, exported, model);
            recurse(node, source, false, model);
        }
        "type_alias_declaration" => {
            let mut union_members = Vec::new();
            if let Some(value) = node.child_by_field_name("value") {
                collect_union_members(value, source, &mut union_members);
            }
            if let Some(name_node) = node.child_by_field_name("name") {
                model.declarations.push(Declaration {
                    name: node_text(name_node, source).to_string(),
                    kind: DeclKind::TypeAlias,
                    span: span_of(node),
                    is_exported: exported,
                    binding: None,
                    annotation: None,
                    initializer: None,
                    union_members,
                });
            }
            recurse(node, source, false, model);
        }
        "identifier" | "type_identifier" => {
            model.identifiers.push(IdentifierRef {
                name: node_text(node, source).to_string(),
                span: span_of(node),
            });
        }
        _ => recurse(node, source, exported, model),
    }
}

fn push_named_decl(
    node: Node<'_>,
    source: &[u8],
    kind: DeclKind,
    exported: bool,
    model: &mut SourceModel,
) {
    let Some(name_node) = node.child_by_field_name("name") else {
        return;
    };
    model.declarations.push(Declaration {
        name: node_text(name_node, source).to_string(),
        kind,
        span: span_of(node),
        is_exported: exported,
        binding: None,
        annotation: None,
        initializer: None,
        union_members: vec![],
    });
}

fn extract_variables(node: Node<'_>, source: &[u8], exported: bool, model: &mut SourceModel) {
    let binding = if node.kind() == "variable_declaration" {
        BindingKind::Var
    } else if node.child(0).is_some_and(|c| c.kind() == "let") {
        BindingKind::Let
    } else {
        BindingKind::Const
    };

    for i in 0..node.named_child_count() {
        let Some(declarator) = node.named_child(i) else {
            continue;
        };
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let Some(name_node) = declarator.child_by_field_name("name") else {
            continue;
        };
        // Destructuring patterns don't declare a single checkable name
        if name_node.kind() != "identifier" {
            continue;
        }
        let annotation = declarator
            .child_by_field_name("type")
            .and_then(|t| t.named_child(0))
            .map(|t| node_text(t, source).to_string());
        let initializer = declarator
            .child_by_field_name("value")
            .map(|v| classify_initializer(v, source));

        model.declarations.push(Declaration {
            name: node_text(name_node, source).to_string(),
            kind: DeclKind::Variable,
            span: span_of(node),
            is_exported: exported,
            binding: Some(binding),
            annotation,
            initializer,
            union_members: vec![],
        });
    }
}

fn classify_initializer(node: Node<'_>, source: &[u8]) -> Initializer {
    let kind = match node.kind() {
        "new_expression" => InitKind::New,
        "call_expression" => InitKind::Call,
        "arrow_function" => InitKind::Arrow,
        "array" => InitKind::ArrayLiteral,
        "object" => InitKind::ObjectLiteral,
        "string" | "template_string" => InitKind::StringLiteral,
        "number" => InitKind::NumberLiteral,
        "true" | "false" => InitKind::BooleanLiteral,
        _ => InitKind::Other,
    };
    let (constructor, has_type_arguments) = if kind == InitKind::New {
        (
            node.child_by_field_name("constructor")
                .map(|c| node_text(c, source).to_string()),
            node.child_by_field_name("type_arguments").is_some(),
        )
    } else {
        (None, false)
    };
    Initializer {
        kind,
        constructor,
        has_type_arguments,
    }
}

fn extract_import(node: Node<'_>, source: &[u8], model: &mut SourceModel) {
    let Some(source_node) = node.child_by_field_name("source") else {
        return;
    };
    let raw = node_text(source_node, source);
    let specifier = raw.trim_matches('"').trim_matches('\'').to_string();

    let mut is_type_only = false;
    let mut clause: Option<Node<'_>> = None;
    for i in 0..node.child_count() {
        let Some(child) = node.child(i) else { continue };
        match child.kind() {
            "type" => is_type_only = true,
            "import_clause" => clause = Some(child),
            _ => {}
        }
    }

    let mut names = Vec::new();
    if let Some(clause) = clause {
        collect_import_names(clause, source, &mut names);
    }

    model.imports.push(ImportRecord {
        is_relative: specifier.starts_with('.'),
        source: specifier,
        names,
        span: span_of(node),
        is_type_only,
        is_side_effect: clause.is_none(),
    });
}

fn collect_import_names(clause: Node<'_>, source: &[u8], names: &mut Vec<String>) {
    for i in 0..clause.named_child_count() {
        let Some(child) = clause.named_child(i) else {
            continue;
        };
        match child.kind() {
            // Default import: `import foo from 'x'`
            "identifier" => names.push(node_text(child, source).to_string()),
            // Namespace import: `import * as ns from 'x'`
            "namespace_import" => {
                for j in 0..child.named_child_count() {
                    if let Some(id) = child.named_child(j) {
                        if id.kind() == "identifier" {
                            names.push(node_text(id, source).to_string());
                        }
                    }
                }
            }
            "named_imports" => {
                for j in 0..child.named_child_count() {
                    let Some(spec) = child.named_child(j) else {
                        continue;
                    };
                    if spec.kind() != "import_specifier" {
                        continue;
                    }
                    let bound = spec
                        .child_by_field_name("alias")
                        .or_else(|| spec.child_by_field_name("name"));
                    if let Some(bound) = bound {
                        names.push(node_text(bound, source).to_string());
                    }
                }
            }
            _ => {}
        }
    }
}

fn collect_union_members(node: Node<'_>, source: &[u8], out: &mut Vec<UnionMember>) {
    match node.kind() {
        // `A | B | C` parses as nested binary unions; flatten them
        "union_type" => {
            for i in 0..node.named_child_count() {
                if let Some(child) = node.named_child(i) {
                    collect_union_members(child, source, out);
                }
            }
        }
        "parenthesized_type" => {
            if let Some(inner) = node.named_child(0) {
                collect_union_members(inner, source, out);
            }
        }
        "object_type" => out.push(UnionMember {
            span: span_of(node),
            shape: UnionShape::Object {
                discriminants: literal_properties(node, source),
            },
        }),
        "type_identifier" | "generic_type" | "predefined_type" => out.push(UnionMember {
            span: span_of(node),
            shape: UnionShape::Named(node_text(node, source).to_string()),
        }),
        "literal_type" => out.push(UnionMember {
            span: span_of(node),
            shape: UnionShape::Literal(node_text(node, source).to_string()),
        }),
        _ => out.push(UnionMember {
            span: span_of(node),
            shape: UnionShape::Other,
        }),
    }
}

/// Literal-typed properties of an inline object type, as (name, literal) pairs.
fn literal_properties(object_type: Node<'_>, source: &[u8]) -> Vec<(String, String)> {
    let mut props = Vec::new();
    for i in 0..object_type.named_child_count() {
        let Some(member) = object_type.named_child(i) else {
            continue;
        };
        if member.kind() != "property_signature" {
            continue;
        }
        let Some(name) = member.child_by_field_name("name") else {
            continue;
        };
        let Some(ty) = member
            .child_by_field_name("type")
            .and_then(|t| t.named_child(0))
        else {
            continue;
        };
        if ty.kind() == "literal_type" {
            props.push((
                node_text(name, source).to_string(),
                node_text(ty, source).to_string(),
            ));
        }
    }
    props
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
