//! Effective-visibility classification for declared members.
//!
//! Private members are rejected upstream by [`is_excluded`]; everything
//! else classifies to one of three labels. Precedence when several flags
//! are set: protected, then public, then package.

use super::symbols::Modifiers;

/// Effective visibility of a member surfaced to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Protected,
    Public,
    Package,
}

impl Visibility {
    /// Stable string label, as exposed to presentation layers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Protected => "protected",
            Visibility::Public => "public",
            Visibility::Package => "package",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify declared modifiers into an effective visibility.
///
/// An empty modifier set (missing modifier information) defaults to
/// package visibility.
pub fn classify(modifiers: Modifiers) -> Visibility {
    if modifiers.has_protected() {
        Visibility::Protected
    } else if modifiers.has_public() {
        Visibility::Public
    } else {
        Visibility::Package
    }
}

/// True iff the member must never surface, regardless of policy.
pub fn is_excluded(modifiers: Modifiers) -> bool {
    modifiers.has_private()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Modifiers::protected(), Visibility::Protected)]
    #[case(Modifiers::public(), Visibility::Public)]
    #[case(Modifiers::package(), Visibility::Package)]
    #[case(Modifiers::none(), Visibility::Package)]
    // precedence on malformed multi-flag input
    #[case(Modifiers::protected().and(Modifiers::public()), Visibility::Protected)]
    #[case(Modifiers::public().and(Modifiers::package()), Visibility::Public)]
    fn test_classify(#[case] modifiers: Modifiers, #[case] expected: Visibility) {
        assert_eq!(classify(modifiers), expected);
    }

    #[rstest]
    #[case(Modifiers::private(), true)]
    #[case(Modifiers::private().and(Modifiers::public()), true)]
    #[case(Modifiers::public(), false)]
    #[case(Modifiers::none(), false)]
    fn test_is_excluded(#[case] modifiers: Modifiers, #[case] expected: bool) {
        assert_eq!(is_excluded(modifiers), expected);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Visibility::Public.as_str(), "public");
        assert_eq!(Visibility::Protected.to_string(), "protected");
        assert_eq!(Visibility::Package.as_str(), "package");
    }
}
