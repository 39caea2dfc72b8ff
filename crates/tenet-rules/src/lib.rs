//! Rule registry and checker for tenet style compliance.
//!
//! Validates a parsed source model against the registered rule set and
//! produces diagnostics. Built-in rules:
//! - naming-convention: PascalCase types, camelCase values
//! - import-ordering: package imports before relative, sorted within groups
//! - prefer-inferred-type: don't spell types the initializer determines
//! - prefer-discriminated-union: unions of object types need a discriminant
//! - no-var: `var` is forbidden
//! - no-default-export: named exports only

pub mod checker;
pub mod registry;
pub mod rules;
pub mod types;
