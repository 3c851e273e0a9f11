//! Token substitution for message templates.
//!
//! Tokens are written `{name}`. Only tokens present in the bindings are
//! replaced; unknown tokens and an unclosed `{` are copied through as-is.

/// Replaces every bound `{token}` in `template` with its value.
pub fn substitute(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        while let Some(&next) = chars.peek() {
            if next == '{' {
                // A new opening brace restarts token scanning.
                break;
            }
            chars.next();
            if next == '}' {
                closed = true;
                break;
            }
            token.push(next);
        }

        match lookup(bindings, &token) {
            Some(value) if closed => result.push_str(value),
            _ => {
                result.push('{');
                result.push_str(&token);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}

fn lookup<'a>(bindings: &[(&str, &'a str)], token: &str) -> Option<&'a str> {
    bindings
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, value)| *value)
}

/// Suffix for a count: `"s"` above one, empty otherwise.
pub fn plural_suffix(count: usize) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Plural suffix for a bound value that may or may not be numeric.
pub fn plural_suffix_for(text: &str) -> &'static str {
    match text.trim().parse::<f64>() {
        Ok(count) if count > 1.0 => "s",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_bound_tokens() {
        let out = substitute("'{item}' is {value}", &[("item", "port"), ("value", "80")]);
        assert_eq!(out, "'port' is 80");
    }

    #[test]
    fn test_repeated_token() {
        let out = substitute("{item}/{item}", &[("item", "a")]);
        assert_eq!(out, "a/a");
    }

    #[test]
    fn test_unknown_token_left_literal() {
        let out = substitute("below {max}", &[("item", "x")]);
        assert_eq!(out, "below {max}");
    }

    #[test]
    fn test_unclosed_brace_left_literal() {
        let out = substitute("open {item", &[("item", "x")]);
        assert_eq!(out, "open {item");
    }

    #[test]
    fn test_nested_brace_restarts_token() {
        let out = substitute("{{item}}", &[("item", "x")]);
        assert_eq!(out, "{x}");
    }

    #[test]
    fn test_value_containing_token_not_rescanned() {
        let out = substitute("{item} {value}", &[("item", "{value}"), ("value", "v")]);
        assert_eq!(out, "{value} v");
    }

    #[test]
    fn test_plural_suffix() {
        assert_eq!(plural_suffix(0), "");
        assert_eq!(plural_suffix(1), "");
        assert_eq!(plural_suffix(2), "s");
        assert_eq!(plural_suffix_for("3"), "s");
        assert_eq!(plural_suffix_for("1"), "");
        assert_eq!(plural_suffix_for("abc"), "");
    }
}
