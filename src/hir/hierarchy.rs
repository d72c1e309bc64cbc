//! Ancestor chain walking over the class snapshot.
//!
//! The walk is lazy, nearest ancestor first, and always terminates before
//! the universal root type. Host-language hierarchies are acyclic by
//! construction; the visited set is a defensive bound so a corrupt
//! snapshot truncates the walk instead of looping.

use rustc_hash::FxHashSet;
use tracing::warn;

use super::ids::ClassId;
use super::symbols::ClassIndex;

impl ClassIndex {
    /// The direct superclass of `class`.
    ///
    /// Returns `None` when there is no superclass, the superclass is not
    /// in the snapshot, or it is the universal root.
    pub fn direct_superclass(&self, class: ClassId) -> Option<ClassId> {
        let name = self.class(class).superclass.as_deref()?;
        let id = self.class_id(name)?;
        if self.class(id).is_universal_root {
            return None;
        }
        Some(id)
    }

    /// Iterate over the ancestors of `class`, nearest first.
    ///
    /// The universal root is never yielded. A revisited class identity
    /// ends the iteration.
    pub fn ancestors(&self, class: ClassId) -> Ancestors<'_> {
        let mut seen = FxHashSet::default();
        seen.insert(class);
        Ancestors {
            index: self,
            current: class,
            seen,
        }
    }
}

/// Lazy nearest-first ancestor iterator. See [`ClassIndex::ancestors`].
pub struct Ancestors<'a> {
    index: &'a ClassIndex,
    current: ClassId,
    seen: FxHashSet<ClassId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        let next = self.index.direct_superclass(self.current)?;
        if !self.seen.insert(next) {
            warn!(
                class = %self.index.class(next).qualified_name,
                "cyclic hierarchy detected, truncating ancestor walk"
            );
            return None;
        }
        self.current = next;
        Some(next)
    }
}
