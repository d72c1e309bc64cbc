//! # lucent-base
//!
//! Core library for class hierarchy analysis and inherited-member
//! resolution.
//!
//! Given a snapshot of a class hierarchy, the engine computes the set of
//! members (fields and methods) a class inherits but does not declare or
//! override itself — filtered by visibility, deduplicated by signature
//! across the whole ancestor chain, and rendered as display-ready labels.
//! A presentation layer (editor plugin, LSP server) places the result; it
//! is not part of this crate.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide     → presentation-ready rows (hint assembly, navigation targets)
//!   ↓
//! hir     → semantic model: class symbols, hierarchy walk, resolver
//!   ↓
//! base    → primitives (FileId, TextRange, LineCol)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use lucent::hir::{ClassIndex, ResolvePolicy, resolve_inherited_members};
//!
//! let index: ClassIndex = build_snapshot();
//! let subject = index.class_id("com.example.Leaf").unwrap();
//! for member in resolve_inherited_members(&index, subject, ResolvePolicy::Transitive) {
//!     println!("{}", member.label);
//! }
//! ```

/// Foundation types: FileId, text positions
pub mod base;

/// Semantic model: class symbols, hierarchy walk, member resolution
pub mod hir;

/// Presentation-facing APIs: hint rows, navigation targets
pub mod ide;

// Re-export commonly needed items
pub use base::{FileId, LineCol, LineIndex, TextRange, TextSize};
pub use hir::{ClassId, ClassIndex, MemberId, ResolvePolicy, ResolvedMember};
