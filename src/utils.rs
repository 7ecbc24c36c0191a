/// Characters Telegram requires to be backslash-escaped in MarkdownV2 text.
const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes `text` for literal inclusion in a MarkdownV2 message body.
///
/// Single pass: running it over its own output escapes the already-escaped
/// characters again, so each value must go through exactly once.
pub fn escape_md(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if RESERVED.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

pub fn escape_md_opt(text: Option<&str>) -> String {
    text.map(escape_md).unwrap_or_default()
}

/// Returns `value` when present and non-empty, `fallback` otherwise.
/// Empty strings count as absent because the reporting page leaves fields
/// blank instead of omitting them.
pub fn resolve_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Renders a number the way the reporting page does: integral values
/// without a fractional part, everything else in shortest decimal form.
pub fn fmt_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_empty_and_absent() {
        assert_eq!(escape_md(""), "");
        assert_eq!(escape_md_opt(None), "");
    }

    #[test]
    fn escape_reserved_characters() {
        assert_eq!(escape_md("a.b!c"), "a\\.b\\!c");
        assert_eq!(
            escape_md("_*[]()~`>#+-=|{}.!"),
            "\\_\\*\\[\\]\\(\\)\\~\\`\\>\\#\\+\\-\\=\\|\\{\\}\\.\\!"
        );
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_md("hello world 123 🚀 ÅßÇ"), "hello world 123 🚀 ÅßÇ");
    }

    #[test]
    fn every_reserved_char_gets_exactly_one_backslash() {
        let input = "Mozilla/5.0 (X11; Linux x86_64) v1.2-beta_3!";
        let escaped = escape_md(input);
        let reserved_in = input.chars().filter(|c| RESERVED.contains(c)).count();
        let backslashes = escaped.chars().filter(|c| *c == '\\').count();
        assert_eq!(reserved_in, backslashes);
        let mut chars = escaped.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                assert!(RESERVED.contains(&chars.next().unwrap()));
            } else {
                assert!(!RESERVED.contains(&ch));
            }
        }
    }

    #[test]
    fn double_escaping_is_not_idempotent() {
        let once = escape_md("a.b");
        assert_eq!(once, "a\\.b");
        assert_ne!(escape_md(&once), once);
        assert_eq!(escape_md(&once), "a\\\\.b");
    }

    #[test]
    fn resolve_prefers_present_non_empty_value() {
        assert_eq!(resolve_or(Some("Pixel"), "Unknown"), "Pixel");
        assert_eq!(resolve_or(Some(""), "Unknown"), "Unknown");
        assert_eq!(resolve_or(None, "Unknown"), "Unknown");
    }

    #[test]
    fn numbers_render_like_the_page_sends_them() {
        assert_eq!(fmt_number(4.5), "4.5");
        assert_eq!(fmt_number(4.0), "4");
        assert_eq!(fmt_number(0.0), "0");
        assert_eq!(fmt_number(87.0), "87");
    }
}
