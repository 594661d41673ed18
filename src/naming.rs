/// Normalizes a schema identifier into a safe SQL identifier.
///
/// Hyphens, periods and spaces become underscores, the rest is lowercased.
pub fn normalize(name: &str) -> String {
    name.replace(['-', '.', ' '], "_").to_lowercase()
}
