//! Header composition for nested scopes

/// Placed between headers when scopes nest, e.g. `Update>Author`
pub const HEADER_SEPARATOR: &str = ">";

/// Compose a scope prefix with an existing header.
///
/// An empty prefix keeps the header, an empty header takes the prefix, and
/// otherwise the two are joined with [`HEADER_SEPARATOR`]. Headers are never
/// escaped or parsed back apart.
pub fn compose_header(prefix: &str, header: &str) -> String {
    if prefix.is_empty() {
        header.to_string()
    } else if header.is_empty() {
        prefix.to_string()
    } else {
        format!("{}{}{}", prefix, HEADER_SEPARATOR, header)
    }
}
