use regex::Regex;

use crate::error::RenameError;
use crate::template::Template;
use crate::traits::Transform;

/// Regex substitution over a filename: every non-overlapping match of the
/// pattern is replaced by the expanded [`Template`].
///
/// Compiled once per run and applied to every entry.
#[derive(Debug, Clone)]
pub struct Substitution {
    regex:    Regex,
    template: Template,
}

impl Substitution {
    /// Compile `pattern` and parse `replacement`.
    ///
    /// # Errors
    ///
    /// [`RenameError::InvalidPattern`] if the pattern does not compile,
    /// including when the compiled program exceeds the regex size limit.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, RenameError> {
        let regex = Regex::new(pattern).map_err(|e| RenameError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            regex,
            template: Template::parse(replacement),
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Replace every match in `name`.
    ///
    /// An empty match right after a non-empty one still counts, so `a*`
    /// replaced by `-` turns `baac` into `-b--c-`.
    pub fn replace_all(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut last = 0;
        let mut pos = 0;
        while pos <= name.len() {
            let Some(caps) = self.regex.captures_at(name, pos) else { break };
            let Some(m) = caps.get(0) else { break };
            out.push_str(&name[last..m.start()]);
            self.template.expand(&caps, name, &mut out);
            last = m.end();
            pos = if m.is_empty() {
                m.end() + name[m.end()..].chars().next().map_or(1, char::len_utf8)
            } else {
                m.end()
            };
        }
        out.push_str(&name[last..]);
        out
    }
}

impl Transform for Substitution {
    fn apply(&self, name: &str) -> Result<String, RenameError> {
        Ok(self.replace_all(name))
    }
}
