/// Canonical form of a tag: surrounding whitespace trimmed, then one leading
/// `@` removed. `@smoke`, `smoke` and ` smoke ` all normalize to `smoke`.
pub fn normalize(token: &str) -> &str {
    let trimmed = token.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed)
}
