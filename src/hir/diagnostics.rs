//! Diagnostics — the caller-visible reporting channel.
//!
//! Nothing in the resolution taxonomy is fatal: every issue is recovered
//! locally (placeholder text, package default, truncated walk) and the
//! member list stays valid. This module lets a caller surface what was
//! recovered, without changing [`resolve_inherited_members`] output.
//!
//! [`resolve_inherited_members`]: super::resolve::resolve_inherited_members

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{FileId, TextRange};
use super::ids::ClassId;
use super::resolve::ResolvePolicy;
use super::symbols::{ClassIndex, ClassSymbol};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: FileId,
    /// Range the diagnostic applies to.
    pub range: TextRange,
    /// Severity level.
    pub severity: Severity,
    /// Issue code (e.g., "L0001").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        severity: Severity,
        file: FileId,
        range: TextRange,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            file,
            range,
            severity,
            code: None,
            message: message.into(),
        }
    }

    /// Set the issue code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

// ============================================================================
// RESOLUTION ISSUE TAXONOMY
// ============================================================================

/// The narrow set of issues a resolution pass can recover from.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveIssue {
    /// Defensive only: the ancestor walk revisited a class identity and
    /// truncated there. Members collected before the cut remain valid.
    #[error("cyclic hierarchy: `{class}` revisited during ancestor walk")]
    CyclicHierarchy { class: Arc<str> },

    /// A member's declared type could not be rendered; display degraded
    /// to the placeholder.
    #[error("type of `{member}` could not be rendered, showing placeholder")]
    MalformedType { member: SmolStr },

    /// A member lacks explicit access-modifier data; treated as
    /// package-visible.
    #[error("`{member}` has no explicit access modifier, treated as package")]
    MissingModifierInfo { member: SmolStr },
}

impl ResolveIssue {
    /// Stable issue code.
    pub const fn code(&self) -> &'static str {
        match self {
            ResolveIssue::CyclicHierarchy { .. } => "L0001",
            ResolveIssue::MalformedType { .. } => "L0002",
            ResolveIssue::MissingModifierInfo { .. } => "L0003",
        }
    }

    /// Severity the issue is reported at.
    pub const fn severity(&self) -> Severity {
        match self {
            ResolveIssue::CyclicHierarchy { .. } => Severity::Warning,
            ResolveIssue::MalformedType { .. } => Severity::Info,
            ResolveIssue::MissingModifierInfo { .. } => Severity::Hint,
        }
    }

    /// Package the issue as a located diagnostic.
    pub fn into_diagnostic(self, file: FileId, range: TextRange) -> Diagnostic {
        Diagnostic::new(self.severity(), file, range, self.to_string()).with_code(self.code())
    }
}

// ============================================================================
// RESOLUTION DIAGNOSTICS
// ============================================================================

/// Report what one subject's resolution pass recovered from.
///
/// Walks the same ancestor scope the resolver would and collects the
/// [`ResolveIssue`]s encountered: a hierarchy cycle (at the subject's
/// declaration), malformed member types, and members with missing modifier
/// data. Pure, like the resolution itself.
pub fn resolution_diagnostics(
    index: &ClassIndex,
    subject: ClassId,
    policy: ResolvePolicy,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if let Some(revisited) = detect_cycle(index, subject) {
        let subject_sym = index.class(subject);
        diagnostics.push(
            ResolveIssue::CyclicHierarchy {
                class: index.class(revisited).qualified_name.clone(),
            }
            .into_diagnostic(subject_sym.file, subject_sym.range),
        );
    }

    let scan: Vec<ClassId> = match policy {
        ResolvePolicy::Direct => index.direct_superclass(subject).into_iter().collect(),
        ResolvePolicy::Transitive => index.ancestors(subject).collect(),
    };
    for ancestor in scan {
        member_issues(index.class(ancestor), &mut diagnostics);
    }

    diagnostics
}

fn member_issues(class: &ClassSymbol, out: &mut Vec<Diagnostic>) {
    for field in &class.fields {
        if field.modifiers.has_private() {
            continue;
        }
        if field.ty.is_malformed() {
            out.push(
                ResolveIssue::MalformedType {
                    member: field.name.clone(),
                }
                .into_diagnostic(class.file, field.range),
            );
        }
        if field.modifiers.is_unspecified() {
            out.push(
                ResolveIssue::MissingModifierInfo {
                    member: field.name.clone(),
                }
                .into_diagnostic(class.file, field.range),
            );
        }
    }
    for method in &class.methods {
        if method.modifiers.has_private() || method.is_constructor {
            continue;
        }
        let malformed = method.params.iter().any(|p| p.is_malformed())
            || method.return_ty.as_ref().is_some_and(|t| t.is_malformed());
        if malformed {
            out.push(
                ResolveIssue::MalformedType {
                    member: method.name.clone(),
                }
                .into_diagnostic(class.file, method.range),
            );
        }
        if method.modifiers.is_unspecified() {
            out.push(
                ResolveIssue::MissingModifierInfo {
                    member: method.name.clone(),
                }
                .into_diagnostic(class.file, method.range),
            );
        }
    }
}

/// Walk the raw superclass chain and return the first revisited class.
fn detect_cycle(index: &ClassIndex, subject: ClassId) -> Option<ClassId> {
    let mut seen = FxHashSet::default();
    seen.insert(subject);
    let mut current = subject;

    loop {
        let name = index.class(current).superclass.as_deref()?;
        let next = index.class_id(name)?;
        if index.class(next).is_universal_root {
            return None;
        }
        if !seen.insert(next) {
            return Some(next);
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::symbols::{ClassSymbol, FieldSymbol, MethodSymbol, Modifiers, TypeRef};

    fn class(name: &str) -> ClassSymbol {
        ClassSymbol::new(name, name, FileId::new(0))
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics
            .iter()
            .map(|d| d.code.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_clean_hierarchy_reports_nothing() {
        let mut index = ClassIndex::new();
        index.add_class(class("Base").with_field(FieldSymbol::new(
            "x",
            TypeRef::of("int"),
            Modifiers::public(),
        )));
        let sub = index.add_class(class("Sub").extending("Base"));

        assert!(resolution_diagnostics(&index, sub, ResolvePolicy::Transitive).is_empty());
    }

    #[test]
    fn test_cycle_reported_as_warning() {
        let mut index = ClassIndex::new();
        index.add_class(class("A").extending("B"));
        index.add_class(class("B").extending("A"));
        let a = index.class_id("A").unwrap();

        let diagnostics = resolution_diagnostics(&index, a, ResolvePolicy::Transitive);
        assert_eq!(codes(&diagnostics), vec!["L0001"]);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("cyclic hierarchy"));
    }

    #[test]
    fn test_malformed_type_reported_as_info() {
        let mut index = ClassIndex::new();
        index.add_class(class("Base").with_field(FieldSymbol::new(
            "bad",
            TypeRef::unresolved(),
            Modifiers::public(),
        )));
        let sub = index.add_class(class("Sub").extending("Base"));

        let diagnostics = resolution_diagnostics(&index, sub, ResolvePolicy::Direct);
        assert_eq!(codes(&diagnostics), vec!["L0002"]);
        assert_eq!(diagnostics[0].severity.to_lsp(), 3);
    }

    #[test]
    fn test_missing_modifiers_reported_as_hint() {
        let mut index = ClassIndex::new();
        index.add_class(
            class("Base").with_method(MethodSymbol::new("run", Modifiers::none())),
        );
        let sub = index.add_class(class("Sub").extending("Base"));

        let diagnostics = resolution_diagnostics(&index, sub, ResolvePolicy::Direct);
        assert_eq!(codes(&diagnostics), vec!["L0003"]);
        assert_eq!(diagnostics[0].severity, Severity::Hint);
    }

    #[test]
    fn test_private_and_constructor_members_not_scanned() {
        let mut index = ClassIndex::new();
        index.add_class(
            class("Base")
                .with_field(FieldSymbol::new(
                    "hidden",
                    TypeRef::unresolved(),
                    Modifiers::private(),
                ))
                .with_method(MethodSymbol::new("Base", Modifiers::none()).constructor()),
        );
        let sub = index.add_class(class("Sub").extending("Base"));

        assert!(resolution_diagnostics(&index, sub, ResolvePolicy::Direct).is_empty());
    }
}
