//! Semantic model: the hierarchy snapshot and the member resolver.
//!
//! A caller builds a [`ClassIndex`] (the immutable snapshot), then asks
//! [`resolve_inherited_members`] what a class inherits. Everything in this
//! module is a pure computation over the snapshot.

mod diagnostics;
mod hierarchy;
mod ids;
mod render;
mod resolve;
mod signature;
mod symbols;
mod visibility;

pub use diagnostics::{Diagnostic, ResolveIssue, Severity, resolution_diagnostics};
pub use hierarchy::Ancestors;
pub use ids::{ClassId, LocalMemberId, MemberId};
pub use render::{field_label, method_label};
pub use resolve::{MemberKind, ResolvePolicy, ResolvedMember, resolve_inherited_members};
pub use signature::{canonical_type_key, method_signature};
pub use symbols::{ClassIndex, ClassSymbol, FieldSymbol, MethodSymbol, Modifiers, TypeRef};
pub use visibility::{Visibility, classify, is_excluded};
