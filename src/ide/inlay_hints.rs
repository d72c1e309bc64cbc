//! Inherited-member hint rows for editor display.
//!
//! Assembles the resolver's output into display rows the way the editor
//! shows them: a field group, a spacer, a method group, each row anchored
//! just after the `{` opening the class body. Which groups and markers
//! appear depends only on which groups are non-empty; a class with nothing
//! to show produces no rows at all.

use rayon::prelude::*;

use crate::base::{FileId, TextSize};
use crate::hir::{
    ClassId, ClassIndex, MemberId, MemberKind, ResolvePolicy, resolve_inherited_members,
};

/// Kind of a hint row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Group caption ("Inherited Fields" / "Inherited Methods").
    GroupHeader,
    /// One resolved member.
    Member,
    /// Blank row between the field and method groups.
    Spacer,
}

/// One display row, anchored by byte offset into the class's file.
#[derive(Clone, Debug)]
pub struct HintRow {
    /// Anchor offset (just inside the class body).
    pub offset: TextSize,
    /// Row kind.
    pub kind: RowKind,
    /// Text to display.
    pub text: String,
    /// Handle to the member's declaration, for member rows only.
    pub source: Option<MemberId>,
}

impl HintRow {
    fn marker(offset: TextSize, kind: RowKind, text: &str) -> Self {
        Self {
            offset,
            kind,
            text: text.to_string(),
            source: None,
        }
    }
}

/// Hint rows for a single class.
///
/// An empty resolution yields no rows — no headers, no spacer. The field
/// group header appears only when fields exist; the spacer appears only
/// between two non-empty groups.
pub fn member_rows(index: &ClassIndex, class: ClassId, policy: ResolvePolicy) -> Vec<HintRow> {
    let resolved = resolve_inherited_members(index, class, policy);
    if resolved.is_empty() {
        return Vec::new();
    }

    let anchor = index.class(class).body_start + TextSize::from(1);
    let field_count = resolved
        .iter()
        .filter(|m| m.kind == MemberKind::Field)
        .count();
    let has_fields = field_count > 0;
    let has_methods = field_count < resolved.len();

    let mut rows = Vec::with_capacity(resolved.len() + 3);
    if has_fields {
        rows.push(HintRow::marker(anchor, RowKind::GroupHeader, "Inherited Fields"));
    }
    for member in resolved.iter().take(field_count) {
        rows.push(HintRow {
            offset: anchor,
            kind: RowKind::Member,
            text: member.label.clone(),
            source: Some(member.source),
        });
    }
    if has_methods {
        if has_fields {
            rows.push(HintRow::marker(anchor, RowKind::Spacer, " "));
        }
        rows.push(HintRow::marker(anchor, RowKind::GroupHeader, "Inherited Methods"));
        for member in resolved.iter().skip(field_count) {
            rows.push(HintRow {
                offset: anchor,
                kind: RowKind::Member,
                text: member.label.clone(),
                source: Some(member.source),
            });
        }
    }

    rows
}

/// Hint rows for every class in a file, in declaration order.
///
/// Per-class resolution runs in parallel: each call is a pure read of the
/// shared snapshot, so no synchronization is needed beyond the caller
/// keeping the snapshot alive and unmutated for the duration.
pub fn file_member_rows(index: &ClassIndex, file: FileId, policy: ResolvePolicy) -> Vec<HintRow> {
    let per_class: Vec<Vec<HintRow>> = index
        .classes_in_file(file)
        .par_iter()
        .map(|&class| member_rows(index, class, policy))
        .collect();
    per_class.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{TextRange, TextSize};
    use crate::hir::{ClassSymbol, FieldSymbol, MethodSymbol, Modifiers, TypeRef};

    fn class(name: &str, file: u32) -> ClassSymbol {
        ClassSymbol::new(name, name, FileId::new(file))
    }

    fn kinds(rows: &[HintRow]) -> Vec<RowKind> {
        rows.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_both_groups_with_spacer() {
        let mut index = ClassIndex::new();
        index.add_class(
            class("Base", 0)
                .with_field(FieldSymbol::new("x", TypeRef::of("int"), Modifiers::public()))
                .with_method(MethodSymbol::new("run", Modifiers::public())),
        );
        let sub = index.add_class(class("Sub", 0).extending("Base"));

        let rows = member_rows(&index, sub, ResolvePolicy::Direct);
        assert_eq!(
            kinds(&rows),
            vec![
                RowKind::GroupHeader,
                RowKind::Member,
                RowKind::Spacer,
                RowKind::GroupHeader,
                RowKind::Member,
            ]
        );
        assert_eq!(rows[0].text, "Inherited Fields");
        assert_eq!(rows[3].text, "Inherited Methods");
    }

    #[test]
    fn test_methods_only_no_spacer_no_field_header() {
        let mut index = ClassIndex::new();
        index.add_class(class("Base", 0).with_method(MethodSymbol::new("run", Modifiers::public())));
        let sub = index.add_class(class("Sub", 0).extending("Base"));

        let rows = member_rows(&index, sub, ResolvePolicy::Direct);
        assert_eq!(kinds(&rows), vec![RowKind::GroupHeader, RowKind::Member]);
        assert_eq!(rows[0].text, "Inherited Methods");
    }

    #[test]
    fn test_empty_resolution_emits_no_rows() {
        let mut index = ClassIndex::new();
        index.add_class(class("Object", 0).universal_root());
        let a = index.add_class(class("A", 0).extending("Object"));
        let b = index.add_class(class("B", 0));

        assert!(member_rows(&index, a, ResolvePolicy::Transitive).is_empty());
        assert!(member_rows(&index, b, ResolvePolicy::Transitive).is_empty());
    }

    #[test]
    fn test_rows_anchor_after_body_brace() {
        let mut index = ClassIndex::new();
        index.add_class(class("Base", 0).with_method(MethodSymbol::new("run", Modifiers::public())));
        let sub = index.add_class(
            class("Sub", 0)
                .extending("Base")
                .with_span(TextRange::new(TextSize::from(0), TextSize::from(40)), TextSize::from(24)),
        );

        let rows = member_rows(&index, sub, ResolvePolicy::Direct);
        assert!(rows.iter().all(|r| r.offset == TextSize::from(25)));
    }

    #[test]
    fn test_file_rows_in_declaration_order() {
        let mut index = ClassIndex::new();
        index.add_class(class("Base", 0).with_field(FieldSymbol::new(
            "x",
            TypeRef::of("int"),
            Modifiers::public(),
        )));
        index.add_class(class("Sub1", 1).extending("Base"));
        index.add_class(class("Sub2", 1).extending("Base"));

        let rows = file_member_rows(&index, FileId::new(1), ResolvePolicy::Direct);
        // two classes, each: header + one field row
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].text, "public int x");
        assert_eq!(rows[3].text, "public int x");
    }
}
