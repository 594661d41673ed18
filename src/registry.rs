use std::collections::HashMap;

use roxmltree::Node;

use crate::builtins;
use crate::naming;

/// Types declared by the schema document itself, keyed by normalized name.
///
/// Both kinds of declaration store an already-resolved SQL type; `None`
/// records a declaration whose base has no SQL equivalent, which is still
/// worth remembering so references to it are not mistaken for typos.
#[derive(Debug, Default)]
pub struct UserTypeRegistry {
    types: HashMap<String, Option<String>>,
}

impl UserTypeRegistry {
    /// Scans the direct children of the schema root for type declarations.
    /// Nested declarations are not discovered.
    pub fn from_schema(root: Node) -> Self {
        let mut registry = Self::default();

        for element in builtins::xs_children(root, "element") {
            if let (Some(name), Some(declared)) =
                (element.attribute("name"), element.attribute("type"))
            {
                let resolved = builtins::lookup(builtins::local_name(declared)).flatten();
                registry.insert(name, resolved.map(str::to_owned));
            }
        }

        for simple_type in builtins::xs_children(root, "simpleType") {
            let Some(name) = simple_type.attribute("name") else {
                continue;
            };
            let Some(restriction) = builtins::xs_children(simple_type, "restriction").next() else {
                continue;
            };
            let Some(base) = restriction.attribute("base") else {
                continue;
            };
            let base = builtins::local_name(base);
            // A base that is not a built-in may name an earlier user type.
            let resolved = match builtins::lookup(base) {
                Some(sql_type) => sql_type.map(str::to_owned),
                None => registry.get(base).flatten().map(str::to_owned),
            };
            registry.insert(name, resolved);
        }

        registry
    }

    /// `None`: never declared. `Some(None)`: declared, no SQL equivalent.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.types
            .get(&naming::normalize(name))
            .map(|sql_type| sql_type.as_deref())
    }

    fn insert(&mut self, name: &str, sql_type: Option<String>) {
        self.types.insert(naming::normalize(name), sql_type);
    }
}
