//! Define the reserved keyword vocabulary for PHP.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories and the release each word appeared in.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **ASCII case-insensitive**, as PHP keywords are.
//! - `self`, `parent`, `true`, `false` and `null` are plain identifiers in PHP and are not listed here.
//! - Some reserved words are also “word operators” (e.g. `and`). If you need operator fixity, use
//!   [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use chisel_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("Function"), Some(KeywordId::Function));
//! assert_eq!(keywords::as_str(KeywordId::LineConst), "__LINE__");
//! assert_eq!(keywords::category(KeywordId::Private), KeywordCategory::Modifier);
//! ```
//!
//! ## See also
//! - [`crate::lang::operators`] for operator fixity metadata.

use super::registry::{PHP_5, Since, Stability};

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Elseif,
    Else,
    Endif,
    While,
    Endwhile,
    Do,
    For,
    Endfor,
    Foreach,
    Endforeach,
    As,
    Switch,
    Endswitch,
    Case,
    Default,
    Match,
    Break,
    Continue,
    Return,
    Goto,
    Try,
    Catch,
    Finally,
    Throw,
    Yield,
    Declare,
    Enddeclare,

    // Declarations
    Function,
    Fn,
    Class,
    Interface,
    Trait,
    Enum,
    Extends,
    Implements,
    Insteadof,
    Const,
    Global,

    // Modifiers
    Public,
    Protected,
    Private,
    Var,
    Static,
    Abstract,
    Final,
    Readonly,

    // Namespaces / imports
    Namespace,
    Use,

    // Expression-introducing words
    New,
    Clone,
    Echo,
    Print,
    Array,
    List,
    Isset,
    Unset,
    Empty,
    Eval,
    Exit,
    Die,
    Include,
    IncludeOnce,
    Require,
    RequireOnce,
    Callable,
    HaltCompiler,

    // Word operators
    And,
    Or,
    Xor,
    Instanceof,

    // Magic constants
    LineConst,
    FileConst,
    DirConst,
    ClassConst,
    TraitConst,
    MethodConst,
    FunctionConst,
    NamespaceConst,
}

/// High-level grouping for documentation and analysis.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
/// - The analyzer uses [`KeywordCategory::MagicConstant`] to recognise keywords that produce a value, and
///   [`KeywordCategory::Modifier`] to collect member attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Declaration,
    Modifier,
    Import,
    Expression,
    Operator,
    MagicConstant,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Elseif, "elseif", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Endif, "endif", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Endwhile, "endwhile", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Endfor, "endfor", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Foreach, "foreach", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Endforeach, "endforeach", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::As, "as", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Endswitch, "endswitch", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Match, "match", KeywordCategory::ControlFlow, Since(8, 0)),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Goto, "goto", KeywordCategory::ControlFlow, Since(5, 3)),
    info(KeywordId::Try, "try", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Catch, "catch", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Finally, "finally", KeywordCategory::ControlFlow, Since(5, 5)),
    info(KeywordId::Throw, "throw", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Yield, "yield", KeywordCategory::ControlFlow, Since(5, 5)),
    info(KeywordId::Declare, "declare", KeywordCategory::ControlFlow, PHP_5),
    info(KeywordId::Enddeclare, "enddeclare", KeywordCategory::ControlFlow, PHP_5),
    // Declarations
    info(KeywordId::Function, "function", KeywordCategory::Declaration, PHP_5),
    info(KeywordId::Fn, "fn", KeywordCategory::Declaration, Since(7, 4)),
    info(KeywordId::Class, "class", KeywordCategory::Declaration, PHP_5),
    info(KeywordId::Interface, "interface", KeywordCategory::Declaration, PHP_5),
    info(KeywordId::Trait, "trait", KeywordCategory::Declaration, Since(5, 4)),
    info(KeywordId::Enum, "enum", KeywordCategory::Declaration, Since(8, 1)),
    info(KeywordId::Extends, "extends", KeywordCategory::Declaration, PHP_5),
    info(KeywordId::Implements, "implements", KeywordCategory::Declaration, PHP_5),
    info(KeywordId::Insteadof, "insteadof", KeywordCategory::Declaration, Since(5, 4)),
    info(KeywordId::Const, "const", KeywordCategory::Declaration, PHP_5),
    info(KeywordId::Global, "global", KeywordCategory::Declaration, PHP_5),
    // Modifiers
    info(KeywordId::Public, "public", KeywordCategory::Modifier, PHP_5),
    info(KeywordId::Protected, "protected", KeywordCategory::Modifier, PHP_5),
    info(KeywordId::Private, "private", KeywordCategory::Modifier, PHP_5),
    legacy(KeywordId::Var, "var", KeywordCategory::Modifier, PHP_5),
    info(KeywordId::Static, "static", KeywordCategory::Modifier, PHP_5),
    info(KeywordId::Abstract, "abstract", KeywordCategory::Modifier, PHP_5),
    info(KeywordId::Final, "final", KeywordCategory::Modifier, PHP_5),
    info(KeywordId::Readonly, "readonly", KeywordCategory::Modifier, Since(8, 1)),
    // Namespaces / imports
    info(KeywordId::Namespace, "namespace", KeywordCategory::Import, Since(5, 3)),
    info(KeywordId::Use, "use", KeywordCategory::Import, Since(5, 3)),
    // Expression-introducing words
    info(KeywordId::New, "new", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Clone, "clone", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Echo, "echo", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Print, "print", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Array, "array", KeywordCategory::Expression, PHP_5),
    info(KeywordId::List, "list", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Isset, "isset", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Unset, "unset", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Empty, "empty", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Eval, "eval", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Exit, "exit", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Die, "die", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Include, "include", KeywordCategory::Expression, PHP_5),
    info(KeywordId::IncludeOnce, "include_once", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Require, "require", KeywordCategory::Expression, PHP_5),
    info(KeywordId::RequireOnce, "require_once", KeywordCategory::Expression, PHP_5),
    info(KeywordId::Callable, "callable", KeywordCategory::Expression, Since(5, 4)),
    info(KeywordId::HaltCompiler, "__halt_compiler", KeywordCategory::Expression, PHP_5),
    // Word operators
    info(KeywordId::And, "and", KeywordCategory::Operator, PHP_5),
    info(KeywordId::Or, "or", KeywordCategory::Operator, PHP_5),
    info(KeywordId::Xor, "xor", KeywordCategory::Operator, PHP_5),
    info(KeywordId::Instanceof, "instanceof", KeywordCategory::Operator, PHP_5),
    // Magic constants
    info(KeywordId::LineConst, "__LINE__", KeywordCategory::MagicConstant, PHP_5),
    info(KeywordId::FileConst, "__FILE__", KeywordCategory::MagicConstant, PHP_5),
    info(KeywordId::DirConst, "__DIR__", KeywordCategory::MagicConstant, Since(5, 3)),
    info(KeywordId::ClassConst, "__CLASS__", KeywordCategory::MagicConstant, PHP_5),
    info(KeywordId::TraitConst, "__TRAIT__", KeywordCategory::MagicConstant, Since(5, 4)),
    info(KeywordId::MethodConst, "__METHOD__", KeywordCategory::MagicConstant, PHP_5),
    info(KeywordId::FunctionConst, "__FUNCTION__", KeywordCategory::MagicConstant, PHP_5),
    info(KeywordId::NamespaceConst, "__NAMESPACE__", KeywordCategory::MagicConstant, Since(5, 3)),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id` (lower-case, except magic constants).
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling, in any letter case.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical.eq_ignore_ascii_case(s))
        .map(|k| k.id)
}

/// Check whether a keyword declares a type (“classy” keyword): `class`, `interface`, `trait` or `enum`.
pub fn is_classy(id: KeywordId) -> bool {
    matches!(
        id,
        KeywordId::Class | KeywordId::Interface | KeywordId::Trait | KeywordId::Enum
    )
}

/// Check whether a keyword introduces a function: `function` or the arrow-function `fn`.
pub fn is_function(id: KeywordId) -> bool {
    matches!(id, KeywordId::Function | KeywordId::Fn)
}

/// Check whether a keyword is a member modifier (`public`, `static`, `var`, …).
pub fn is_modifier(id: KeywordId) -> bool {
    category(id) == KeywordCategory::Modifier
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, since: Since) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        since,
        stability: Stability::Stable,
    }
}

const fn legacy(id: KeywordId, canonical: &'static str, category: KeywordCategory, since: Since) -> KeywordInfo {
    KeywordInfo {
        stability: Stability::Legacy,
        ..info(id, canonical, category, since)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_ascii_case() {
        assert_eq!(from_str("WHILE"), Some(KeywordId::While));
        assert_eq!(from_str("__line__"), Some(KeywordId::LineConst));
        assert_eq!(from_str("Include_Once"), Some(KeywordId::IncludeOnce));
        assert_eq!(from_str("self"), None);
    }

    #[test]
    fn var_is_a_legacy_modifier() {
        let info = info_for(KeywordId::Var);
        assert_eq!(info.category, KeywordCategory::Modifier);
        assert_eq!(info.stability, Stability::Legacy);
    }

    #[test]
    fn classy_and_function_helpers() {
        assert!(is_classy(KeywordId::Enum));
        assert!(!is_classy(KeywordId::New));
        assert!(is_function(KeywordId::Fn));
        assert!(is_modifier(KeywordId::Readonly));
        assert!(!is_modifier(KeywordId::Const));
    }
}
