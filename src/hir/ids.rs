//! Semantic identifiers for classes and their members.

use std::fmt;

/// An identifier for a class within a [`ClassIndex`](super::ClassIndex).
///
/// Assigned sequentially as classes are added to the snapshot. Stable for
/// the lifetime of the snapshot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ClassId(pub u32);

impl ClassId {
    /// Create a new ClassId.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// A class-local member identifier.
///
/// Numbers a class's declared members in declaration order: fields first,
/// then methods.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LocalMemberId(pub u32);

impl LocalMemberId {
    /// Create a new LocalMemberId.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LocalMemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalMemberId({})", self.0)
    }
}

/// A globally unique handle for a declared member.
///
/// Combines the declaring class with a class-local member id. This is the
/// opaque `source` handle carried on resolved members: the resolver never
/// dereferences it, a presentation layer may hand it to
/// [`member_location`](crate::ide::member_location) to navigate to the
/// declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct MemberId {
    /// The declaring class
    pub class: ClassId,
    /// The local id within the class
    pub local: LocalMemberId,
}

impl MemberId {
    /// Create a new MemberId.
    #[inline]
    pub const fn new(class: ClassId, local: LocalMemberId) -> Self {
        Self { class, local }
    }
}

impl fmt::Debug for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemberId({}:{})", self.class.0, self.local.0)
    }
}
