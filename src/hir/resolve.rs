//! Inherited-member resolution — the core engine.
//!
//! Given a subject class and a policy, computes the members the class
//! inherits but does not declare itself:
//!
//! 1. Collect the subject's own identities (field names, method signatures).
//! 2. Scan ancestors — the direct superclass only, or the full chain,
//!    nearest first, per [`ResolvePolicy`].
//! 3. Filter out private members, constructors, members shadowed by the
//!    subject's own declarations, and repeats of an identity already
//!    emitted from a nearer ancestor.
//! 4. Emit fields first (scan order), then methods (scan order), each with
//!    a display label and an opaque handle back to its declaration.
//!
//! The resolution is a pure function over the immutable snapshot: calling
//! it twice yields identical output, and independent calls may run on
//! worker threads concurrently.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::ids::{ClassId, MemberId};
use super::render::{field_label, method_label};
use super::signature::method_signature;
use super::symbols::ClassIndex;
use super::visibility::{Visibility, classify, is_excluded};

/// How far up the hierarchy resolution looks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolvePolicy {
    /// Only the immediate superclass's declared members.
    Direct,
    /// All ancestors' members, each attributed to its declaring class.
    Transitive,
}

impl ResolvePolicy {
    /// Whether labels carry the declaring-class qualifier.
    ///
    /// Always on for the transitive walk (the declaring class varies per
    /// member), off for the single-hop policy (it is the same class for
    /// every row).
    pub const fn qualifies_declaring_class(self) -> bool {
        matches!(self, ResolvePolicy::Transitive)
    }
}

/// Kind of a resolved member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Method,
}

/// One member visible by inheritance on the subject class.
#[derive(Clone, Debug)]
pub struct ResolvedMember {
    /// Field or method.
    pub kind: MemberKind,
    /// Effective visibility.
    pub visibility: Visibility,
    /// Simple name of the ancestor that declares the member.
    pub declaring_class: SmolStr,
    /// Final display string.
    pub label: String,
    /// Opaque handle to the originating declaration. The engine never
    /// dereferences it; see [`crate::ide::member_location`].
    pub source: MemberId,
}

impl ResolvedMember {
    /// Visibility label string (`"public"` | `"protected"` | `"package"`).
    pub fn visibility_label(&self) -> &'static str {
        self.visibility.as_str()
    }
}

/// Resolve the members `subject` inherits but does not declare itself.
///
/// Deterministic and total: well-formed input never fails, and a class
/// with no non-root superclass resolves to an empty vector. Fields come
/// first, then methods, each group in ancestor scan order.
pub fn resolve_inherited_members(
    index: &ClassIndex,
    subject: ClassId,
    policy: ResolvePolicy,
) -> Vec<ResolvedMember> {
    let subject_sym = index.class(subject);

    let scan: Vec<ClassId> = match policy {
        ResolvePolicy::Direct => index.direct_superclass(subject).into_iter().collect(),
        ResolvePolicy::Transitive => index.ancestors(subject).collect(),
    };
    if scan.is_empty() {
        return Vec::new();
    }

    // The subject's own declarations shadow everything of equal identity.
    let own_field_names: FxHashSet<&str> = subject_sym
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    let own_signatures: FxHashSet<SmolStr> = subject_sym
        .methods
        .iter()
        .map(method_signature)
        .collect();

    let qualify = policy.qualifies_declaring_class();
    let mut resolved = Vec::new();

    // Fields: identity is the bare name. A name emitted from a nearer
    // ancestor suppresses the same name on a farther one, even when the
    // declared types differ.
    let mut seen_field_names: FxHashSet<SmolStr> = FxHashSet::default();
    for &ancestor in &scan {
        let ancestor_sym = index.class(ancestor);
        let declaring = qualify.then(|| ancestor_sym.name.as_str());
        for (idx, field) in ancestor_sym.fields.iter().enumerate() {
            if is_excluded(field.modifiers) {
                continue;
            }
            if own_field_names.contains(field.name.as_str()) {
                continue;
            }
            if !seen_field_names.insert(field.name.clone()) {
                continue;
            }
            let visibility = classify(field.modifiers);
            resolved.push(ResolvedMember {
                kind: MemberKind::Field,
                visibility,
                declaring_class: ancestor_sym.name.clone(),
                label: field_label(visibility, field, declaring),
                source: ancestor_sym.field_id(ancestor, idx),
            });
        }
    }

    // Methods: identity is the signature. First encounter in walk order
    // wins, so a signature re-declared at a nearer ancestor is attributed
    // there and never re-emitted from farther up.
    let mut seen_signatures: FxHashSet<SmolStr> = FxHashSet::default();
    for &ancestor in &scan {
        let ancestor_sym = index.class(ancestor);
        let declaring = qualify.then(|| ancestor_sym.name.as_str());
        for (idx, method) in ancestor_sym.methods.iter().enumerate() {
            if is_excluded(method.modifiers) || method.is_constructor {
                continue;
            }
            let signature = method_signature(method);
            if own_signatures.contains(&signature) {
                continue;
            }
            if !seen_signatures.insert(signature) {
                continue;
            }
            let visibility = classify(method.modifiers);
            resolved.push(ResolvedMember {
                kind: MemberKind::Method,
                visibility,
                declaring_class: ancestor_sym.name.clone(),
                label: method_label(visibility, method, declaring),
                source: ancestor_sym.method_id(ancestor, idx),
            });
        }
    }

    resolved
}
