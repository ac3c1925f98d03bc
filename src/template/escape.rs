// ABOUTME: LaTeX escaping for substituted template values
// ABOUTME: Rewrites characters with special meaning in LaTeX so they render literally

/// Escape characters that LaTeX treats as control characters.
///
/// Applied automatically by the engine to every substituted string value,
/// so user-supplied text cannot break out of the surrounding markup.
pub fn escape_tex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_special_characters() {
        assert_eq!(escape_tex("50% & more"), "50\\% \\& more");
        assert_eq!(escape_tex("a_b"), "a\\_b");
        assert_eq!(escape_tex("$100 #1"), "\\$100 \\#1");
        assert_eq!(escape_tex("{x}"), "\\{x\\}");
        assert_eq!(escape_tex("~"), "\\textasciitilde{}");
        assert_eq!(escape_tex("^"), "\\textasciicircum{}");
        assert_eq!(escape_tex("C:\\tex"), "C:\\textbackslash{}tex");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_tex("a simple test"), "a simple test");
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(escape_tex("Jérôme"), "Jérôme");
        assert_eq!(escape_tex("Größenmaßstäbe"), "Größenmaßstäbe");
    }
}
