//! Navigate-to-declaration targets.
//!
//! The engine hands out opaque [`MemberId`] handles on resolved members;
//! this is where a presentation layer turns one back into a location to
//! jump to. Handles from a different snapshot resolve to `None`.

use crate::base::{FileId, TextRange};
use crate::hir::{ClassId, ClassIndex, MemberId};

/// A location a presentation layer can navigate to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// File containing the declaration.
    pub file: FileId,
    /// Range of the declaration.
    pub range: TextRange,
}

/// Location of a member's declaration.
pub fn member_location(index: &ClassIndex, member: MemberId) -> Option<GotoTarget> {
    let (file, range) = index.member_range(member)?;
    Some(GotoTarget { file, range })
}

/// Location of a class's declaration.
pub fn class_location(index: &ClassIndex, class: ClassId) -> Option<GotoTarget> {
    if class.index() as usize >= index.len() {
        return None;
    }
    let sym = index.class(class);
    Some(GotoTarget {
        file: sym.file,
        range: sym.range,
    })
}
