//! Display labels for resolved members.
//!
//! Labels use the *presentable* type texts throughout; the canonical forms
//! used for identity never leak into display. A missing return type
//! renders as `void`, an unresolvable type as the placeholder.

use super::symbols::{FieldSymbol, MethodSymbol};
use super::visibility::Visibility;

/// Render a field label: `<visibility> <type> [<DeclaringClass>.]<name>`.
pub fn field_label(
    visibility: Visibility,
    field: &FieldSymbol,
    declaring_class: Option<&str>,
) -> String {
    match declaring_class {
        Some(class) => format!(
            "{} {} {}.{}",
            visibility,
            field.ty.presentable_text(),
            class,
            field.name
        ),
        None => format!(
            "{} {} {}",
            visibility,
            field.ty.presentable_text(),
            field.name
        ),
    }
}

/// Render a method label:
/// `<visibility> <returnType> [<DeclaringClass>.]<name>(<params>)`.
pub fn method_label(
    visibility: Visibility,
    method: &MethodSymbol,
    declaring_class: Option<&str>,
) -> String {
    let return_ty = method
        .return_ty
        .as_ref()
        .map(|t| t.presentable_text())
        .unwrap_or("void");
    let params = method
        .params
        .iter()
        .map(|p| p.presentable_text())
        .collect::<Vec<_>>()
        .join(", ");

    match declaring_class {
        Some(class) => format!(
            "{} {} {}.{}({})",
            visibility, return_ty, class, method.name, params
        ),
        None => format!("{} {} {}({})", visibility, return_ty, method.name, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::symbols::{Modifiers, TypeRef};

    #[test]
    fn test_field_label() {
        let field = FieldSymbol::new("x", TypeRef::of("int"), Modifiers::protected());
        assert_eq!(
            field_label(Visibility::Protected, &field, None),
            "protected int x"
        );
        assert_eq!(
            field_label(Visibility::Protected, &field, Some("Base")),
            "protected int Base.x"
        );
    }

    #[test]
    fn test_method_label_void_default() {
        let method = MethodSymbol::new("run", Modifiers::public());
        assert_eq!(method_label(Visibility::Public, &method, None), "public void run()");
    }

    #[test]
    fn test_method_label_with_params_and_qualifier() {
        let method = MethodSymbol::new("foo", Modifiers::public())
            .with_params(vec![TypeRef::of("String"), TypeRef::of("int")])
            .returning(TypeRef::of("boolean"));
        assert_eq!(
            method_label(Visibility::Public, &method, Some("Base")),
            "public boolean Base.foo(String, int)"
        );
    }

    #[test]
    fn test_malformed_type_renders_placeholder() {
        let field = FieldSymbol::new("y", TypeRef::unresolved(), Modifiers::public());
        assert_eq!(
            field_label(Visibility::Public, &field, None),
            "public <unknown> y"
        );

        let method = MethodSymbol::new("m", Modifiers::public())
            .with_params(vec![TypeRef::unresolved()]);
        assert_eq!(
            method_label(Visibility::Public, &method, None),
            "public void m(<unknown>)"
        );
    }

    #[test]
    fn test_aliased_type_displays_presentable_form() {
        let field = FieldSymbol::new(
            "s",
            TypeRef::aliased("Str", "java.lang.String"),
            Modifiers::public(),
        );
        assert_eq!(field_label(Visibility::Public, &field, None), "public Str s");
    }
}
