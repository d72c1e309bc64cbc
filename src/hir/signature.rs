//! Canonical identity keys for members.
//!
//! A field's identity is its bare name. A method's identity is its
//! *signature*: the name plus the comma-joined canonical parameter types.
//! Return type and declaring class never participate, so an override with
//! a covariant return still collapses onto the same key.

use smol_str::SmolStr;

use super::symbols::{MethodSymbol, TypeRef};

/// Canonical identity key for one parameter type.
///
/// Uses the canonical text when present, falling back to the presentable
/// text and finally the placeholder. Incidental whitespace is normalized
/// away so two spellings of one canonical type (`List < String >` vs
/// `List<String>`) produce the same key. Display text is never consulted
/// when a canonical form exists.
pub fn canonical_type_key(ty: &TypeRef) -> SmolStr {
    match ty.canonical_text() {
        Some(text) => normalize_type_text(text),
        None => SmolStr::new_static(TypeRef::UNKNOWN),
    }
}

/// Identity key for a method: `name(canonical,param,types)`.
pub fn method_signature(method: &MethodSymbol) -> SmolStr {
    let mut sig = String::with_capacity(method.name.len() + 2 + method.params.len() * 8);
    sig.push_str(&method.name);
    sig.push('(');
    for (i, param) in method.params.iter().enumerate() {
        if i > 0 {
            sig.push(',');
        }
        sig.push_str(&canonical_type_key(param));
    }
    sig.push(')');
    SmolStr::from(sig)
}

/// Collapse whitespace in a type text to a stable form.
///
/// Whitespace survives only between two identifier characters (where it is
/// significant, e.g. `? extends Foo`) and collapses to a single space.
fn normalize_type_text(raw: &str) -> SmolStr {
    let mut out = String::with_capacity(raw.len());
    let mut last: Option<char> = None;
    let mut pending_space = false;

    for c in raw.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if is_ident_char(c) && last.is_some_and(is_ident_char) {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
        last = Some(c);
    }

    SmolStr::from(out)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '?'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::symbols::Modifiers;

    fn method(name: &str, params: &[&str]) -> MethodSymbol {
        MethodSymbol::new(name, Modifiers::public())
            .with_params(params.iter().map(|p| TypeRef::of(*p)).collect())
    }

    #[test]
    fn test_signature_shape() {
        assert_eq!(method_signature(&method("foo", &[])).as_str(), "foo()");
        assert_eq!(
            method_signature(&method("foo", &["java.lang.String", "int"])).as_str(),
            "foo(java.lang.String,int)"
        );
    }

    #[test]
    fn test_signature_ignores_return_type() {
        let a = method("get", &[]);
        let b = method("get", &[]).returning(TypeRef::of("java.lang.Object"));
        assert_eq!(method_signature(&a), method_signature(&b));
    }

    #[test]
    fn test_alias_and_target_collapse() {
        let aliased = MethodSymbol::new("set", Modifiers::public())
            .with_params(vec![TypeRef::aliased("Str", "java.lang.String")]);
        let direct = method("set", &["java.lang.String"]);
        assert_eq!(method_signature(&aliased), method_signature(&direct));
    }

    #[test]
    fn test_whitespace_normalization() {
        assert_eq!(
            canonical_type_key(&TypeRef::of("java.util.List < java.lang.String >")).as_str(),
            "java.util.List<java.lang.String>"
        );
        assert_eq!(canonical_type_key(&TypeRef::of("int [ ]")).as_str(), "int[]");
        // significant space between identifier tokens survives
        assert_eq!(
            canonical_type_key(&TypeRef::of("java.util.List<?   extends  Foo>")).as_str(),
            "java.util.List<? extends Foo>"
        );
    }

    #[test]
    fn test_unresolved_param_uses_placeholder() {
        let m = MethodSymbol::new("m", Modifiers::public())
            .with_params(vec![TypeRef::unresolved(), TypeRef::of("int")]);
        assert_eq!(method_signature(&m).as_str(), "m(<unknown>,int)");
    }
}
