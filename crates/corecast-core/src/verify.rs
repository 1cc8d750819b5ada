/// Returns true iff `core` appears in `content` as an exact, case-sensitive
/// substring. No whitespace, punctuation or case normalisation is applied.
pub fn verify(content: &str, core: &str) -> bool {
    content.contains(core)
}
