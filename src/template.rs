use regex::Captures;

/// One piece of a parsed replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Text copied as-is.
    Literal(String),
    /// `$N` / `$NN`: the N-th capture group.
    Group(usize),
    /// `$&`: the whole match.
    WholeMatch,
    /// `` $` ``: everything before the match.
    Prefix,
    /// `$'`: everything after the match.
    Suffix,
}

/// A replacement template such as `File_$1.txt`.
///
/// Group references take at most two digits, read greedily: `$12` is group
/// twelve, `$123` is group twelve followed by a literal `3`. A reference to a
/// group that does not exist or did not participate expands to nothing.
/// `$$` is a literal dollar sign, and a `$` that starts no reference is kept
/// literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: Vec<TemplatePart>,
}

impl Template {
    pub fn parse(template: &str) -> Self {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                literal.push(c);
                continue;
            }

            let part = match chars.peek().copied() {
                Some('$') => {
                    chars.next();
                    literal.push('$');
                    continue;
                }
                Some('&') => TemplatePart::WholeMatch,
                Some('`') => TemplatePart::Prefix,
                Some('\'') => TemplatePart::Suffix,
                Some(d) if d.is_ascii_digit() => {
                    chars.next();
                    let mut index = digit(d);
                    if let Some(&d2) = chars.peek() {
                        if d2.is_ascii_digit() {
                            chars.next();
                            index = index * 10 + digit(d2);
                        }
                    }
                    push_literal(&mut parts, &mut literal);
                    parts.push(TemplatePart::Group(index));
                    continue;
                }
                _ => {
                    literal.push('$');
                    continue;
                }
            };

            chars.next();
            push_literal(&mut parts, &mut literal);
            parts.push(part);
        }
        push_literal(&mut parts, &mut literal);

        Self { parts }
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// True if the template contains no references and expands to itself.
    pub fn is_literal(&self) -> bool {
        self.parts.iter().all(|p| matches!(p, TemplatePart::Literal(_)))
    }

    /// Append the expansion for one match of `caps` within `haystack` to `dst`.
    pub fn expand(&self, caps: &Captures<'_>, haystack: &str, dst: &mut String) {
        let Some(whole) = caps.get(0) else { return };

        for part in &self.parts {
            match part {
                TemplatePart::Literal(s) => dst.push_str(s),
                TemplatePart::Group(i) => {
                    if let Some(m) = caps.get(*i) {
                        dst.push_str(m.as_str());
                    }
                }
                TemplatePart::WholeMatch => dst.push_str(whole.as_str()),
                TemplatePart::Prefix => dst.push_str(&haystack[..whole.start()]),
                TemplatePart::Suffix => dst.push_str(&haystack[whole.end()..]),
            }
        }
    }
}

fn digit(c: char) -> usize {
    c.to_digit(10).unwrap_or(0) as usize
}

fn push_literal(parts: &mut Vec<TemplatePart>, literal: &mut String) {
    if !literal.is_empty() {
        parts.push(TemplatePart::Literal(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn expand(pattern: &str, template: &str, haystack: &str) -> String {
        let re = Regex::new(pattern).unwrap();
        let caps = re.captures(haystack).unwrap();
        let mut out = String::new();
        Template::parse(template).expand(&caps, haystack, &mut out);
        out
    }

    #[test]
    fn parses_group_references() {
        let t = Template::parse("File_$1.txt");
        assert_eq!(
            t.parts(),
            &[
                TemplatePart::Literal("File_".into()),
                TemplatePart::Group(1),
                TemplatePart::Literal(".txt".into()),
            ]
        );
    }

    #[test]
    fn group_index_takes_at_most_two_digits() {
        let t = Template::parse("$123");
        assert_eq!(
            t.parts(),
            &[TemplatePart::Group(12), TemplatePart::Literal("3".into())]
        );
    }

    #[test]
    fn dollar_escapes() {
        assert_eq!(
            Template::parse("$$1").parts(),
            &[TemplatePart::Literal("$1".into())]
        );
        assert_eq!(
            Template::parse("a$b$").parts(),
            &[TemplatePart::Literal("a$b$".into())]
        );
        assert!(Template::parse("cost $$").is_literal());
    }

    #[test]
    fn group_followed_by_underscore_is_still_a_group() {
        assert_eq!(expand(r"(\d+)", "$1_x", "42"), "42_x");
    }

    #[test]
    fn missing_group_expands_to_nothing() {
        assert_eq!(expand(r"(a)|(b)", "[$2]", "a"), "[]");
        assert_eq!(expand(r"(a)", "[$7]", "a"), "[]");
    }

    #[test]
    fn whole_match_prefix_and_suffix() {
        assert_eq!(expand("mid", "<$&>", "premidpost"), "<mid>");
        assert_eq!(expand("mid", "$`", "premidpost"), "pre");
        assert_eq!(expand("mid", "$'", "premidpost"), "post");
    }
}
