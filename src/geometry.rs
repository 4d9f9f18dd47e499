/// Column / width, measured in characters.
pub type Width = usize;

/// The width of a string, measured in characters.
///
/// The layout engine counts characters. It makes no attempt to handle
/// double-width glyphs, combining marks, or locale-dependent measurement;
/// callers that need those must pre-measure their text.
pub fn str_width(s: &str) -> Width {
    s.chars().count()
}
