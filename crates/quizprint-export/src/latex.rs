//! LaTeX math → readable Unicode text.
//!
//! A deliberately shallow converter: fractions become `(a)/(b)`, sub- and
//! superscripts use Unicode glyphs where every character has one, a closed
//! table of commands maps to symbols, and any other `\command` loses its
//! backslash. Nothing here can fail; unknown constructs degrade to text.
//!
//! Rules run in a fixed order over the whole string. Neither the fraction
//! rule nor the symbol table rescans its own output, so nested fractions and
//! commands that prefix other commands (`\cdot` / `\cdots`) come out the way
//! a single left-to-right pass leaves them.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `(command, replacement)` pairs, applied in order as plain substring
/// replacement.
pub const SYMBOLS: &[(&str, &str)] = &[
    (r"\leq", "≤"),
    (r"\geq", "≥"),
    (r"\neq", "≠"),
    (r"\times", "×"),
    (r"\cdot", "·"),
    (r"\cdots", "⋯"),
    (r"\ldots", "…"),
    (r"\infty", "∞"),
    (r"\sum", "Σ"),
    (r"\prod", "Π"),
    (r"\sqrt", "√"),
    (r"\pi", "π"),
    (r"\sigma", "σ"),
    (r"\mu", "μ"),
    (r"\alpha", "α"),
    (r"\beta", "β"),
    (r"\lambda", "λ"),
    (r"\left(", "("),
    (r"\right)", ")"),
    (r"\left[", "["),
    (r"\right]", "]"),
    (r"\left\{", "{"),
    (r"\right\}", "}"),
    (r"\left|", "|"),
    (r"\right|", "|"),
    (r"\{", "{"),
    (r"\}", "}"),
    (r"\,", " "),
    (r"\;", " "),
    (r"\:", " "),
    (r"\!", ""),
    (r"\quad", "  "),
    (r"\qquad", "    "),
    (r"\displaystyle", ""),
    (r"\text", ""),
    (r"\mathrm", ""),
    (r"\bar", ""),
    (r"\overline", ""),
    (r"\underline", ""),
];

static FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\frac\{([^}]*)\}\{([^}]*)\}").expect("valid regex"));
static BRACED_SUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\{([^}]*)\}").expect("valid regex"));
static BRACED_SUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^\{([^}]*)\}").expect("valid regex"));
static SINGLE_SUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([a-zA-Z0-9])").expect("valid regex"));
static SINGLE_SUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^([a-zA-Z0-9])").expect("valid regex"));
static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([a-zA-Z]+)").expect("valid regex"));

/// Unicode subscript form of `c`, if one exists.
pub fn subscript_glyph(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'i' => 'ᵢ',
        'n' => 'ₙ',
        'r' => 'ᵣ',
        'x' => 'ₓ',
        '+' => '₊',
        '-' => '₋',
        '=' => '₌',
        _ => return None,
    })
}

/// Unicode superscript form of `c`, if one exists.
pub fn superscript_glyph(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        'n' => 'ⁿ',
        'r' => 'ʳ',
        '+' => '⁺',
        '-' => '⁻',
        _ => return None,
    })
}

/// Map every character through `glyph`, or `None` if any has no glyph.
fn all_glyphs(content: &str, glyph: fn(char) -> Option<char>) -> Option<String> {
    content.chars().map(glyph).collect()
}

/// Convert the inside of a math span to readable text.
pub fn latex_to_readable(latex: &str) -> String {
    let r = FRACTION_RE.replace_all(latex, "(${1})/(${2})");

    let r = BRACED_SUB_RE.replace_all(&r, |caps: &Captures| {
        let content = &caps[1];
        all_glyphs(content, subscript_glyph).unwrap_or_else(|| format!("_{{{content}}}"))
    });
    let r = BRACED_SUP_RE.replace_all(&r, |caps: &Captures| {
        let content = &caps[1];
        all_glyphs(content, superscript_glyph).unwrap_or_else(|| format!("^({content})"))
    });

    let r = SINGLE_SUB_RE.replace_all(&r, |caps: &Captures| {
        single_script(&caps[1], '_', subscript_glyph)
    });
    let r = SINGLE_SUP_RE.replace_all(&r, |caps: &Captures| {
        single_script(&caps[1], '^', superscript_glyph)
    });

    let mut r = r.into_owned();
    for &(command, replacement) in SYMBOLS {
        if r.contains(command) {
            r = r.replace(command, replacement);
        }
    }

    COMMAND_RE.replace_all(&r, "${1}").into_owned()
}

fn single_script(c: &str, marker: char, glyph: fn(char) -> Option<char>) -> String {
    c.chars()
        .next()
        .and_then(glyph)
        .map(String::from)
        .unwrap_or_else(|| format!("{marker}{c}"))
}
