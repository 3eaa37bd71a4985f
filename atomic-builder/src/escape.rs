//! Selector escaping.

/// Returns true for characters that must be backslash-escaped in a selector.
fn is_special(c: char) -> bool {
    matches!(c, '%' | '/' | ':' | '.')
}

/// Escapes `%`, `/`, `:` and `.` with a backslash.
///
/// A `.` that opens a class name (first character, or right after
/// whitespace) is left alone so `#ns .Foo-1.5` becomes `#ns .Foo-1\.5`.
pub fn escape_selector(selector: &str) -> String {
    let mut escaped = String::with_capacity(selector.len() + 4);
    let mut prev: Option<char> = None;
    for c in selector.chars() {
        let opens_class = c == '.' && prev.is_none_or(char::is_whitespace);
        if is_special(c) && !opens_class {
            escaped.push('\\');
        }
        escaped.push(c);
        prev = Some(c);
    }
    escaped
}
