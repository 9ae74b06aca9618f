//! Small string helpers shared by the pipeline and the minifier backends

/// Trim leading and trailing characters at or below U+0020.
///
/// This covers ASCII whitespace and control characters but leaves Unicode
/// spaces such as U+00A0 alone, since those are document content.
///
/// # Examples
/// ```
/// # use kodegen_tools_htmlcompressor::utils::string_utils::trim_control;
/// assert_eq!(trim_control("\n\t <p>x</p> \r\n"), "<p>x</p>");
/// assert_eq!(trim_control("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
/// ```
#[inline]
#[must_use]
pub fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Insert a line break after any of `break_after` once the current line has
/// reached `width` characters.
///
/// Characters inside single- or double-quoted strings never trigger a break.
/// A `width` of zero returns the input unchanged.
///
/// # Examples
/// ```
/// # use kodegen_tools_htmlcompressor::utils::string_utils::wrap_lines_after;
/// let css = "a{color:red}b{color:blue}c{}";
/// assert_eq!(wrap_lines_after(css, 10, &['}']), "a{color:red}\nb{color:blue}\nc{}");
/// ```
#[must_use]
pub fn wrap_lines_after(code: &str, width: usize, break_after: &[char]) -> String {
    if width == 0 {
        return code.to_string();
    }

    let mut output = String::with_capacity(code.len() + code.len() / width.max(1));
    let mut column = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in code.chars() {
        output.push(c);

        if c == '\n' {
            column = 0;
            continue;
        }
        column += 1;

        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(open) if c == open => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if break_after.contains(&c) && column >= width => {
                output.push('\n');
                column = 0;
            }
            None => {}
        }
    }

    output
}
