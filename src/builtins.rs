use std::collections::HashMap;

use lazy_static::lazy_static;
use roxmltree::Node;

/// The XML Schema namespace (pt. 1, §1.3.1)
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

lazy_static! {
    /// XSD built-ins with a direct Postgres type. `None` marks built-ins that
    /// have no SQL equivalent at all.
    static ref LITERALS: HashMap<&'static str, Option<&'static str>> = HashMap::from([
        ("string", Some("varchar")),
        ("boolean", Some("boolean")),
        ("decimal", Some("numeric")),
        ("float", Some("real")),
        ("double", Some("double precision")),
        ("duration", Some("interval")),
        ("dateTime", Some("timestamp")),
        ("time", Some("time")),
        ("date", Some("date")),
        ("gYearMonth", Some("timestamp")),
        ("gYear", Some("timestamp")),
        ("gMonthDay", Some("timestamp")),
        ("gDay", Some("timestamp")),
        ("gMonth", Some("timestamp")),
        ("hexBinary", Some("bytea")),
        ("base64Binary", Some("bytea")),
        ("anyURI", Some("varchar")),
        ("integer", Some("integer")),
        ("QName", None),
        ("NOTATION", None),
        ("NMTOKEN", None),
        ("NMTOKENS", None),
        ("ID", None),
        ("IDREF", None),
        ("IDREFS", None),
        ("ENTITY", None),
        ("ENTITIES", None),
    ]);

    /// Built-ins that borrow another entry's mapping. Each value must name a
    /// key of `LITERALS`, so resolution is a single redirect and cannot
    /// cycle. Retargeting a literal entry retargets all of its aliases.
    static ref ALIASES: HashMap<&'static str, &'static str> = HashMap::from([
        ("normalizedString", "string"),
        ("token", "string"),
        ("language", "string"),
        ("Name", "string"),
        ("NCName", "string"),
        ("nonPositiveInteger", "integer"),
        ("negativeInteger", "integer"),
        ("long", "integer"),
        ("int", "integer"),
        ("short", "integer"),
        ("byte", "integer"),
        ("nonNegativeInteger", "integer"),
        ("unsignedLong", "integer"),
        ("unsignedInt", "integer"),
        ("unsignedShort", "integer"),
        ("unsignedByte", "integer"),
        ("positiveInteger", "integer"),
    ]);
}

/// Looks up an XSD built-in type name (namespace prefix already stripped).
///
/// `None` means the name is not a built-in at all, which lets callers fall
/// through to user-declared types. `Some(None)` means the built-in is known
/// but has no SQL equivalent.
pub fn lookup(name: &str) -> Option<Option<&'static str>> {
    if let Some(mapped) = LITERALS.get(name) {
        return Some(*mapped);
    }
    ALIASES
        .get(name)
        .map(|base| LITERALS.get(base).copied().flatten())
}

/// Strips a namespace prefix (`xs:string` -> `string`).
pub fn local_name(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

/// Iterates the immediate children of `node` carrying the given tag in the
/// XML Schema namespace, in document order.
pub fn xs_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| {
        child.is_element()
            && child.tag_name().namespace() == Some(XS_NAMESPACE)
            && child.tag_name().name() == tag
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_their_base() {
        assert_eq!(lookup("token"), lookup("string"));
        assert_eq!(lookup("NCName"), lookup("string"));
        assert_eq!(lookup("int"), lookup("integer"));
        assert_eq!(lookup("positiveInteger"), lookup("integer"));
    }

    #[test]
    fn literals_resolve_directly() {
        assert_eq!(lookup("string"), Some(Some("varchar")));
        assert_eq!(lookup("double"), Some(Some("double precision")));
    }

    #[test]
    fn unsupported_builtins_are_distinct_from_unknown_names() {
        assert_eq!(lookup("QName"), Some(None));
        assert_eq!(lookup("IDREFS"), Some(None));
        assert_eq!(lookup("noSuchType"), None);
    }

    #[test]
    fn every_alias_targets_a_literal() {
        for (alias, base) in ALIASES.iter() {
            assert!(
                LITERALS.contains_key(base),
                "alias {alias} targets missing literal {base}"
            );
        }
    }

    #[test]
    fn local_name_strips_any_prefix() {
        assert_eq!(local_name("xs:string"), "string");
        assert_eq!(local_name("xsd:long"), "long");
        assert_eq!(local_name("string"), "string");
    }
}
