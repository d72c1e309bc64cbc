//! Class, field, and method symbols — the hierarchy snapshot.
//!
//! These types form the read-only input to the member resolver. A caller
//! (parser front-end, index loader, test fixture) builds a [`ClassIndex`]
//! once; every resolution call then reads it without mutation.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{FileId, TextRange, TextSize};
use super::ids::{ClassId, LocalMemberId, MemberId};

// ============================================================================
// MODIFIERS
// ============================================================================

/// The set of access modifier flags declared on a member.
///
/// Modeled as a flag set rather than an enum: well-formed input carries at
/// most one flag, but classification must not assume it (malformed or
/// partially-analyzed sources can set several, or none). An empty set means
/// the member lacked explicit modifier data and is treated as
/// package-visible downstream.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    const PRIVATE: u8 = 1 << 0;
    const PACKAGE: u8 = 1 << 1;
    const PROTECTED: u8 = 1 << 2;
    const PUBLIC: u8 = 1 << 3;

    /// No explicit modifier information.
    #[inline]
    pub const fn none() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn private() -> Self {
        Self(Self::PRIVATE)
    }

    #[inline]
    pub const fn package() -> Self {
        Self(Self::PACKAGE)
    }

    #[inline]
    pub const fn protected() -> Self {
        Self(Self::PROTECTED)
    }

    #[inline]
    pub const fn public() -> Self {
        Self(Self::PUBLIC)
    }

    /// Combine two flag sets (for malformed multi-modifier input).
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn has_private(self) -> bool {
        self.0 & Self::PRIVATE != 0
    }

    #[inline]
    pub const fn has_package(self) -> bool {
        self.0 & Self::PACKAGE != 0
    }

    #[inline]
    pub const fn has_protected(self) -> bool {
        self.0 & Self::PROTECTED != 0
    }

    #[inline]
    pub const fn has_public(self) -> bool {
        self.0 & Self::PUBLIC != 0
    }

    /// True when no explicit access modifier was recorded.
    #[inline]
    pub const fn is_unspecified(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut set = f.debug_set();
        if self.has_private() {
            set.entry(&"private");
        }
        if self.has_package() {
            set.entry(&"package");
        }
        if self.has_protected() {
            set.entry(&"protected");
        }
        if self.has_public() {
            set.entry(&"public");
        }
        set.finish()
    }
}

// ============================================================================
// TYPE REFERENCES
// ============================================================================

/// A declared type in two textual forms.
///
/// The *presentable* form is what gets displayed (possibly an alias or a
/// shortened spelling). The *canonical* form is what identity is computed
/// from: the producer of the snapshot resolves aliases and generics to a
/// stable spelling before storing it here.
///
/// Either form may be absent when the host analysis could not resolve the
/// type. Display then degrades to [`TypeRef::UNKNOWN`]; it never fails the
/// resolution of the member, let alone its siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRef {
    presentable: Option<SmolStr>,
    canonical: Option<SmolStr>,
}

impl TypeRef {
    /// Placeholder shown for types that could not be rendered.
    pub const UNKNOWN: &'static str = "<unknown>";

    /// A type whose presentable and canonical texts coincide.
    pub fn of(text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        Self {
            presentable: Some(text.clone()),
            canonical: Some(text),
        }
    }

    /// A type displayed under an alias but identified by its target.
    pub fn aliased(presentable: impl Into<SmolStr>, canonical: impl Into<SmolStr>) -> Self {
        Self {
            presentable: Some(presentable.into()),
            canonical: Some(canonical.into()),
        }
    }

    /// A type the host analysis failed to resolve.
    pub fn unresolved() -> Self {
        Self {
            presentable: None,
            canonical: None,
        }
    }

    /// Display text, falling back to the placeholder.
    pub fn presentable_text(&self) -> &str {
        self.presentable.as_deref().unwrap_or(Self::UNKNOWN)
    }

    /// Identity text: canonical if present, else presentable.
    pub fn canonical_text(&self) -> Option<&str> {
        self.canonical.as_deref().or(self.presentable.as_deref())
    }

    /// True when no displayable text exists.
    pub fn is_malformed(&self) -> bool {
        self.presentable.is_none() && self.canonical.is_none()
    }
}

// ============================================================================
// MEMBER SYMBOLS
// ============================================================================

/// A declared field.
#[derive(Clone, Debug)]
pub struct FieldSymbol {
    /// Field name, unique within one class's declared set.
    pub name: SmolStr,
    /// Declared type.
    pub ty: TypeRef,
    /// Declared access modifiers.
    pub modifiers: Modifiers,
    /// Range of the declaration in its file.
    pub range: TextRange,
}

impl FieldSymbol {
    /// Create a field symbol with an empty range.
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers,
            range: TextRange::empty(TextSize::from(0)),
        }
    }

    /// Set the declaration range.
    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }
}

/// A declared method.
#[derive(Clone, Debug)]
pub struct MethodSymbol {
    /// Method name.
    pub name: SmolStr,
    /// Ordered parameter types.
    pub params: Vec<TypeRef>,
    /// Return type; `None` renders as `void`.
    pub return_ty: Option<TypeRef>,
    /// Declared access modifiers.
    pub modifiers: Modifiers,
    /// Constructors never surface as inherited members.
    pub is_constructor: bool,
    /// Range of the declaration in its file.
    pub range: TextRange,
}

impl MethodSymbol {
    /// Create a method symbol with no parameters and a void return.
    pub fn new(name: impl Into<SmolStr>, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_ty: None,
            modifiers,
            is_constructor: false,
            range: TextRange::empty(TextSize::from(0)),
        }
    }

    /// Set the parameter types.
    pub fn with_params(mut self, params: Vec<TypeRef>) -> Self {
        self.params = params;
        self
    }

    /// Set the return type.
    pub fn returning(mut self, ty: TypeRef) -> Self {
        self.return_ty = Some(ty);
        self
    }

    /// Mark as a constructor.
    pub fn constructor(mut self) -> Self {
        self.is_constructor = true;
        self
    }

    /// Set the declaration range.
    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }
}

// ============================================================================
// CLASS SYMBOL
// ============================================================================

/// A class in the hierarchy snapshot.
///
/// The superclass is recorded by qualified name and resolved through the
/// [`ClassIndex`] during the hierarchy walk; an unknown name simply ends
/// the ancestor chain.
#[derive(Clone, Debug)]
pub struct ClassSymbol {
    /// Simple name (used in display labels).
    pub name: SmolStr,
    /// Qualified name (identity within the snapshot).
    pub qualified_name: Arc<str>,
    /// File containing the declaration.
    pub file: FileId,
    /// Range of the whole declaration.
    pub range: TextRange,
    /// Offset of the `{` opening the class body (hint rows anchor here).
    pub body_start: TextSize,
    /// Qualified name of the direct superclass, if any.
    pub superclass: Option<Arc<str>>,
    /// True for the implicit top type whose members are never surfaced.
    pub is_universal_root: bool,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldSymbol>,
    /// Declared methods, in declaration order.
    pub methods: Vec<MethodSymbol>,
}

impl ClassSymbol {
    /// Create an empty class symbol.
    pub fn new(name: impl Into<SmolStr>, qualified_name: impl Into<Arc<str>>, file: FileId) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            file,
            range: TextRange::empty(TextSize::from(0)),
            body_start: TextSize::from(0),
            superclass: None,
            is_universal_root: false,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the direct superclass by qualified name.
    pub fn extending(mut self, superclass: impl Into<Arc<str>>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Mark this class as the universal root type.
    pub fn universal_root(mut self) -> Self {
        self.is_universal_root = true;
        self
    }

    /// Add a declared field.
    pub fn with_field(mut self, field: FieldSymbol) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a declared method.
    pub fn with_method(mut self, method: MethodSymbol) -> Self {
        self.methods.push(method);
        self
    }

    /// Set the declaration range and body start offset.
    pub fn with_span(mut self, range: TextRange, body_start: TextSize) -> Self {
        self.range = range;
        self.body_start = body_start;
        self
    }

    /// Handle for the field at `idx` in declaration order.
    pub(crate) fn field_id(&self, class: ClassId, idx: usize) -> MemberId {
        MemberId::new(class, LocalMemberId::new(idx as u32))
    }

    /// Handle for the method at `idx` in declaration order.
    ///
    /// Methods are numbered after all fields.
    pub(crate) fn method_id(&self, class: ClassId, idx: usize) -> MemberId {
        MemberId::new(class, LocalMemberId::new((self.fields.len() + idx) as u32))
    }
}

// ============================================================================
// CLASS INDEX
// ============================================================================

/// The hierarchy snapshot: all classes known to one resolution pass.
///
/// Classes are stored in a single vector and referenced by [`ClassId`]
/// everywhere else. The qualified-name map keeps insertion order so that
/// whole-snapshot iteration is deterministic. Re-adding a qualified name
/// replaces the previous class in place, keeping its `ClassId` stable.
#[derive(Clone, Debug, Default)]
pub struct ClassIndex {
    /// The single source of truth for all classes.
    classes: Vec<ClassSymbol>,
    /// Qualified name → class id, in insertion order.
    by_qualified_name: IndexMap<Arc<str>, ClassId>,
    /// File → class ids declared in it, in declaration order.
    by_file: FxHashMap<FileId, Vec<ClassId>>,
}

impl ClassIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class to the snapshot, returning its id.
    ///
    /// A class with the same qualified name replaces the existing entry.
    pub fn add_class(&mut self, class: ClassSymbol) -> ClassId {
        if let Some(&id) = self.by_qualified_name.get(&class.qualified_name) {
            let old_file = self.classes[id.index() as usize].file;
            if old_file != class.file {
                if let Some(ids) = self.by_file.get_mut(&old_file) {
                    ids.retain(|&c| c != id);
                }
                self.by_file.entry(class.file).or_default().push(id);
            }
            self.classes[id.index() as usize] = class;
            return id;
        }

        let id = ClassId::new(self.classes.len() as u32);
        self.by_qualified_name
            .insert(class.qualified_name.clone(), id);
        self.by_file.entry(class.file).or_default().push(id);
        self.classes.push(class);
        id
    }

    /// Get a class by id.
    pub fn class(&self, id: ClassId) -> &ClassSymbol {
        &self.classes[id.index() as usize]
    }

    /// Look up a class id by qualified name.
    pub fn class_id(&self, qualified_name: &str) -> Option<ClassId> {
        self.by_qualified_name.get(qualified_name).copied()
    }

    /// Look up a class by qualified name.
    pub fn lookup(&self, qualified_name: &str) -> Option<&ClassSymbol> {
        self.class_id(qualified_name).map(|id| self.class(id))
    }

    /// Classes declared in a file, in declaration order.
    pub fn classes_in_file(&self, file: FileId) -> &[ClassId] {
        self.by_file.get(&file).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over all classes in insertion order.
    pub fn all_classes(&self) -> impl Iterator<Item = (ClassId, &ClassSymbol)> {
        self.by_qualified_name
            .values()
            .map(|&id| (id, self.class(id)))
    }

    /// Resolve a member handle to its declaration range.
    ///
    /// Returns `None` for handles minted against a different snapshot.
    pub fn member_range(&self, id: MemberId) -> Option<(FileId, TextRange)> {
        let class = self.classes.get(id.class.index() as usize)?;
        let local = id.local.index() as usize;
        let range = if local < class.fields.len() {
            class.fields[local].range
        } else {
            class.methods.get(local - class.fields.len())?.range
        };
        Some((class.file, range))
    }

    /// Get the total number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
