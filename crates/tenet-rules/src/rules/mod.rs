//! Built-in style rules.
//!
//! Each rule is a flat record (id, summary, default severity, predicate)
//! defined as a `const` in its module and collected here for registration.

pub mod declarations;
pub mod imports;
pub mod inference;
pub mod naming;
pub mod unions;

use crate::registry::Rule;

/// Every built-in rule, in registration order.
pub fn builtin() -> Vec<Rule> {
    vec![
        naming::RULE,
        imports::RULE,
        inference::RULE,
        unions::RULE,
        declarations::NO_VAR,
        declarations::NO_DEFAULT_EXPORT,
    ]
}
