use roxmltree::Node;

use crate::builtins;
use crate::error::SchemaError;
use crate::naming;
use crate::registry::UserTypeRegistry;

/// Hard ceiling on structural nesting depth.
pub const MAX_RECURSE_LEVEL: u32 = 10;

#[derive(Copy, Clone, Debug)]
pub struct WalkOptions {
    /// Strict mode: an unresolvable column type aborts the walk instead of
    /// silently dropping the column.
    pub fail_on_unknown: bool,
    /// Normalize element-derived table and column names.
    pub normalize: bool,
}

/// What walking a subtree produced.
#[derive(Debug)]
pub struct Walked {
    /// Whether any structural children (`element`, `complexType`,
    /// `sequence`) were found. A node without them is a column of its
    /// parent's table, not a table of its own.
    pub children: bool,
    pub sql: String,
}

/// Recursively translates the subtree rooted at `node` into `CREATE TABLE`
/// statements, using `parent` as the candidate table name for columns found
/// at this level. Emitted tables land in one flat list in document order.
pub fn walk(
    node: Node,
    parent: &str,
    depth: u32,
    registry: &UserTypeRegistry,
    opts: WalkOptions,
) -> Result<Walked, SchemaError> {
    if depth > MAX_RECURSE_LEVEL {
        return Err(SchemaError::MaxRecursion);
    }

    let mut children = false;
    let mut cols: Vec<String> = Vec::new();
    let mut sql = String::new();

    for element in builtins::xs_children(node, "element") {
        children = true;

        let walked = walk(element, &table_name(element, parent, opts), depth + 1, registry, opts)?;
        sql.push_str(&walked.sql);
        sql.push('\n');

        if !walked.children {
            // A true leaf: a scalar column of its declared (or defaulted)
            // type rather than a table.
            let declared = element
                .attribute("type")
                .or_else(|| element.attribute("ref"))
                .unwrap_or("string");
            let resolved = resolve_type(declared, registry);
            match resolved {
                Some(sql_type) => {
                    if let Some(name) =
                        element.attribute("name").or_else(|| element.attribute("ref"))
                    {
                        let name = if opts.normalize {
                            naming::normalize(name)
                        } else {
                            name.to_owned()
                        };
                        cols.push(format!("{name} {sql_type}"));
                    }
                }
                None if opts.fail_on_unknown => {
                    return Err(SchemaError::InvalidType(qualified_name(declared)));
                }
                // Permissive mode omits the column entirely.
                None => {}
            }
        }
    }

    if !cols.is_empty() {
        sql.push_str(&format!("CREATE TABLE {parent} ({});", cols.join(", ")));
    }

    for tag in ["complexType", "sequence"] {
        for group in builtins::xs_children(node, tag) {
            children = true;
            let walked = walk(group, &table_name(group, parent, opts), depth + 1, registry, opts)?;
            sql.push_str(&walked.sql);
            sql.push('\n');
        }
    }

    Ok(Walked { children, sql })
}

/// Built-in table first; unknown names fall through to the user registry.
fn resolve_type(declared: &str, registry: &UserTypeRegistry) -> Option<String> {
    let key = builtins::local_name(declared);
    match builtins::lookup(key) {
        Some(sql_type) => sql_type.map(str::to_owned),
        None => registry.get(key).flatten().map(str::to_owned),
    }
}

/// Diagnostics carry a namespace-qualified type name; names written without
/// a prefix are reported under the schema prefix.
fn qualified_name(declared: &str) -> String {
    if declared.contains(':') {
        declared.to_owned()
    } else {
        format!("xs:{declared}")
    }
}

fn table_name(node: Node, parent: &str, opts: WalkOptions) -> String {
    match node.attribute("name") {
        Some(name) if opts.normalize => naming::normalize(name),
        Some(name) => name.to_owned(),
        None => parent.to_owned(),
    }
}
