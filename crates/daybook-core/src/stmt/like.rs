//! LIKE pattern helpers shared by SQL rendering and in-memory evaluation.

/// Escapes `%` and `_` in a literal needle by prefixing each with `escape`.
///
/// Only the two LIKE wildcards are escaped; every other character passes
/// through untouched.
pub fn escape_pattern(needle: &str, escape: char) -> String {
    let mut out = String::with_capacity(needle.len());
    for c in needle.chars() {
        if c == '%' || c == '_' {
            out.push(escape);
        }
        out.push(c);
    }
    out
}

/// Matches `input` against a LIKE `pattern`, honoring `escape`.
///
/// Comparison is case-insensitive, matching the collation the scheduling
/// database runs under.
pub(crate) fn like_matches(pattern: &str, input: &str, escape: char) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let input: Vec<char> = input.to_lowercase().chars().collect();
    match_from(&pattern, &input, escape)
}

fn match_from(pattern: &[char], input: &[char], escape: char) -> bool {
    let Some((&first, rest)) = pattern.split_first() else {
        return input.is_empty();
    };
    if first == escape {
        // Escaped wildcard (or a dangling escape, taken literally)
        let Some((&literal, rest)) = rest.split_first() else {
            return input == [escape];
        };
        return input.first() == Some(&literal) && match_from(rest, &input[1..], escape);
    }
    match first {
        '%' => (0..=input.len()).any(|skip| match_from(rest, &input[skip..], escape)),
        '_' => !input.is_empty() && match_from(rest, &input[1..], escape),
        c => input.first() == Some(&c) && match_from(rest, &input[1..], escape),
    }
}
