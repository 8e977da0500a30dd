//! Class namespacing for the embedded stylesheet and markup.
//!
//! The snake generator emits short class names (`c`, `u0`, `s12`, ...) that
//! would collide with the host document. Both the stylesheet selectors and the
//! `class` attributes of the body are rewritten with the same prefix.
//!
//! Namespacing is meant to be applied once and is not idempotent.
//! [`scope_content`] prefixes every class again on a second run.
//! [`scope_css`] does so whenever the previous prefix itself starts like a
//! snake class (the default `snk-` reads as `s` + `nk`): `.snk-c0` becomes
//! `.snk-snk-c0`. A prefix such as `a-` is left alone by a second CSS pass.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Initial letters of the class names emitted by the snake generator.
const CLASS_FAMILY: [u8; 3] = [b'c', b'u', b's'];

/// Regex to match a `class` attribute with a non-empty value.
static CLASS_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="([^"]+)""#).unwrap());

/// Prefix class selectors of the snake family in a stylesheet.
///
/// Rewrites `.<letter><suffix>` (suffix of ASCII digits and lowercase letters)
/// and bare `.<letter>` selectors followed by `{`, `,` or `.` (optionally
/// after whitespace). Any other `.` is copied as is.
pub fn scope_css(style: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(style.len() + style.len() / 8);
    let mut rest = style;

    while let Some(dot) = rest.find('.') {
        out.push_str(&rest[..=dot]);
        let after = &rest[dot + 1..];
        if let Some(len) = class_selector_len(after) {
            out.push_str(prefix);
            out.push_str(&after[..len]);
            rest = &after[len..];
        } else {
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// Length of the snake class name starting `text`, if there is one.
///
/// Names with a suffix always match. A bare letter only matches when it is
/// followed by a selector delimiter.
fn class_selector_len(text: &str) -> Option<usize> {
    let first = *text.as_bytes().first()?;
    if !CLASS_FAMILY.contains(&first) {
        return None;
    }

    let tail = &text[1..];
    let suffix = tail
        .bytes()
        .take_while(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
        .count();
    if suffix > 0 {
        return Some(1 + suffix);
    }

    let next = tail.trim_start().chars().next()?;
    matches!(next, '{' | ',' | '.').then_some(1)
}

/// Prefix every class of every `class="..."` attribute in a markup fragment.
///
/// Each whitespace-separated class is prefixed independently.
pub fn scope_content(content: &str, prefix: &str) -> String {
    CLASS_ATTR_RE
        .replace_all(content, |caps: &Captures| {
            let classes = caps[1]
                .split_whitespace()
                .map(|class| format!("{prefix}{class}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!(r#"class="{classes}""#)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scope_css_suffixed_classes() {
        let css = ".c0{fill:red}.u12{x:1}.s3a{y:2}";
        assert_eq!(
            scope_css(css, "snk-"),
            ".snk-c0{fill:red}.snk-u12{x:1}.snk-s3a{y:2}"
        );
    }

    #[test]
    fn test_scope_css_bare_classes() {
        let css = ".c{fill:red}.u,.s {x:1}";
        assert_eq!(
            scope_css(css, "snk-"),
            ".snk-c{fill:red}.snk-u,.snk-s {x:1}"
        );
    }

    #[test]
    fn test_scope_css_compound_selector() {
        assert_eq!(scope_css(".c.u0{x:1}", "x-"), ".x-c.x-u0{x:1}");
        assert_eq!(scope_css(".c.u{x:1}", "x-"), ".x-c.x-u{x:1}");
    }

    #[test]
    fn test_scope_css_leaves_other_dots() {
        let css = ".a{opacity:.5}.x0{y:1}.c:hover{z:0}";
        assert_eq!(scope_css(css, "snk-"), css);
    }

    #[test]
    fn test_scope_css_bare_letter_at_end() {
        assert_eq!(scope_css("a.c", "snk-"), "a.c");
        assert_eq!(scope_css(".", "snk-"), ".");
    }

    #[test]
    fn test_scope_css_custom_properties_untouched() {
        let css = ":root{--cs:#000;--c4:#111;}";
        assert_eq!(scope_css(css, "snk-"), css);
    }

    #[test]
    fn test_scope_css_prefixes_once() {
        let scoped = scope_css(".c{}.c0{}.c,.s1{}", "snk-");
        assert_eq!(scoped.matches("snk-").count(), 4);
        assert!(!scoped.contains("snk-snk-"));
    }

    #[test]
    fn test_scope_css_applied_twice() {
        let once = scope_css(".c0{}.c{}", "snk-");
        assert_eq!(scope_css(&once, "snk-"), ".snk-snk-c0{}.snk-snk-c{}");
        assert_eq!(scope_css(&scope_css(".c0{}", "snk-"), "b-"), ".b-snk-c0{}");
        assert_eq!(scope_css(&scope_css(".c0{}", "a-"), "b-"), ".a-c0{}");
    }

    #[test]
    fn test_scope_content_applied_twice() {
        let once = scope_content(r#"<rect class="c u0"/>"#, "a-");
        assert_eq!(scope_content(&once, "b-"), r#"<rect class="b-a-c b-a-u0"/>"#);
    }

    #[test]
    fn test_scope_content_multiple_classes() {
        let svg = r#"<rect class="c u0" x="2"/><path class="s0"/>"#;
        assert_eq!(
            scope_content(svg, "snk-"),
            r#"<rect class="snk-c snk-u0" x="2"/><path class="snk-s0"/>"#
        );
    }

    #[test]
    fn test_scope_content_collapses_whitespace() {
        assert_eq!(
            scope_content(r#"<g class="  c   s0 "></g>"#, "x-"),
            r#"<g class="x-c x-s0"></g>"#
        );
    }

    #[test]
    fn test_scope_content_ignores_empty_class() {
        let svg = r#"<g class=""><rect/></g>"#;
        assert_eq!(scope_content(svg, "x-"), svg);
    }
}
