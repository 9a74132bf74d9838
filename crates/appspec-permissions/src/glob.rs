//! # Single-Segment Glob
//!
//! The pattern dialect used by permission rules. A pattern is a run of
//! literal characters and `*` wildcards; every `*` matches zero or more
//! characters. A subject containing a path separator never matches, so a
//! wildcard can not reach across path segments.
//!
//! Matching keeps the set of pattern suffixes still reachable after each
//! subject character instead of backtracking, so the cost is bounded by
//! `subject length x pattern length` even for inputs like `a*a*a*a*b`.
//!
//! No other glob syntax exists in this dialect: `?`, `[...]` and `{...}` are
//! plain literals.

/// Separator that splits a path into segments.
pub const SEPARATOR: char = '/';

/// The wildcard character.
pub const WILDCARD: char = '*';

/// A compiled single-segment glob pattern.
///
/// # Example
///
/// ```
/// use appspec_permissions::glob::Glob;
///
/// let glob = Glob::new("*.conf");
/// assert!(glob.matches("db.conf"));
/// assert!(!glob.matches("db.yml"));
/// assert!(!glob.matches("sub/db.conf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glob {
    pattern: Vec<char>,
}

impl Glob {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.chars().collect(),
        }
    }

    /// The pattern text.
    pub fn as_string(&self) -> String {
        self.pattern.iter().collect()
    }

    /// Check whether `name` (a single path segment) matches this pattern.
    pub fn matches(&self, name: &str) -> bool {
        if name.contains(SEPARATOR) {
            return false;
        }

        // A lone trailing wildcard swallows whatever is left of the subject.
        let open_tail = match self.pattern.last() {
            Some(&WILDCARD) => Some(self.pattern.len() - 1),
            _ => None,
        };

        let mut states = StateSet::with_capacity(self.pattern.len());
        states.expand(&self.pattern, 0);

        for ch in name.chars() {
            let mut next = StateSet::with_capacity(self.pattern.len());
            for &state in states.iter() {
                match self.pattern.get(state) {
                    Some(&WILDCARD) => next.expand(&self.pattern, state),
                    Some(&literal) if literal == ch => next.expand(&self.pattern, state + 1),
                    _ => {}
                }
            }
            states = next;

            if states.is_empty() {
                return false;
            }
            if open_tail.is_some_and(|tail| states.contains(tail)) {
                return true;
            }
        }

        states.contains(self.pattern.len())
    }
}

/// Check whether `name` matches `pattern` in the single-segment dialect.
///
/// # Example
///
/// ```
/// use appspec_permissions::glob::matches_simple_glob;
///
/// assert!(matches_simple_glob("abc", "a*c"));
/// assert!(matches_simple_glob("ac", "a*c"));
/// assert!(!matches_simple_glob("abc/d", "a*c"));
/// ```
pub fn matches_simple_glob(name: &str, pattern: &str) -> bool {
    Glob::new(pattern).matches(name)
}

/// Reachable pattern suffixes, each identified by its start index.
///
/// Index `pattern.len()` is the fully consumed pattern.
struct StateSet {
    states: Vec<usize>,
    seen: Vec<bool>,
}

impl StateSet {
    fn with_capacity(pattern_len: usize) -> Self {
        Self {
            states: Vec::with_capacity(pattern_len + 1),
            seen: vec![false; pattern_len + 1],
        }
    }

    fn insert(&mut self, state: usize) {
        if !self.seen[state] {
            self.seen[state] = true;
            self.states.push(state);
        }
    }

    /// Add `state`, splitting a leading wildcard run into the branch that
    /// keeps it open (its last `*`) and the branch that closes it empty.
    fn expand(&mut self, pattern: &[char], state: usize) {
        let mut end = state;
        while pattern.get(end) == Some(&WILDCARD) {
            end += 1;
        }
        if end > state {
            self.insert(end - 1);
        }
        self.insert(end);
    }

    fn contains(&self, state: usize) -> bool {
        self.seen.get(state).copied().unwrap_or(false)
    }

    fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_in_middle() {
        assert!(matches_simple_glob("abc", "a*c"));
        assert!(matches_simple_glob("ac", "a*c"));
        assert!(matches_simple_glob("abXc", "a*c"));
        assert!(!matches_simple_glob("abd", "a*c"));
        assert!(!matches_simple_glob("ab", "a*c"));
    }

    #[test]
    fn test_separator_in_subject_rejected() {
        assert!(!matches_simple_glob("abc/d", "a*c"));
        assert!(!matches_simple_glob("a/c", "a*c"));
        assert!(!matches_simple_glob("x/y", "*"));
    }

    #[test]
    fn test_empty_pattern_and_subject() {
        assert!(matches_simple_glob("", ""));
        assert!(!matches_simple_glob("x", ""));
        assert!(!matches_simple_glob("", "a"));
    }

    #[test]
    fn test_lone_wildcard_matches_anything() {
        assert!(matches_simple_glob("", "*"));
        assert!(matches_simple_glob("anything.at.all", "*"));
        assert!(matches_simple_glob("", "***"));
        assert!(matches_simple_glob("abc", "***"));
    }

    #[test]
    fn test_literal_only() {
        assert!(matches_simple_glob("secret.conf", "secret.conf"));
        assert!(!matches_simple_glob("secret.conf2", "secret.conf"));
        assert!(!matches_simple_glob("secret.con", "secret.conf"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!matches_simple_glob("DB.conf", "db.*"));
        assert!(matches_simple_glob("db.CONF", "db.*"));
    }

    #[test]
    fn test_prefix_and_suffix_wildcards() {
        assert!(matches_simple_glob("db.conf", "*.conf"));
        assert!(matches_simple_glob(".conf", "*.conf"));
        assert!(matches_simple_glob("db.conf", "db.*"));
        assert!(matches_simple_glob("db.", "db.*"));
        assert!(matches_simple_glob("xdbx", "*db*"));
        assert!(!matches_simple_glob("xdx", "*db*"));
    }

    #[test]
    fn test_repeated_literal_after_wildcard() {
        assert!(matches_simple_glob("aaab", "*ab"));
        assert!(matches_simple_glob("abab", "*ab"));
        assert!(!matches_simple_glob("abba", "*ab"));
        assert!(matches_simple_glob("mississippi", "m*iss*ppi"));
    }

    #[test]
    fn test_other_glob_syntax_is_literal() {
        assert!(matches_simple_glob("a?c", "a?c"));
        assert!(!matches_simple_glob("abc", "a?c"));
        assert!(matches_simple_glob("[ab]", "[ab]"));
        assert!(!matches_simple_glob("a", "[ab]"));
        assert!(matches_simple_glob("{x,y}.log", "{x,y}.*"));
        assert!(!matches_simple_glob("x.log", "{x,y}.*"));
    }

    #[test]
    fn test_multibyte_characters() {
        assert!(matches_simple_glob("résumé.txt", "r*é.txt"));
        assert!(!matches_simple_glob("resume.txt", "r*é.txt"));
    }

    #[test]
    fn test_adversarial_pattern_terminates() {
        let subject = "a".repeat(5_000);
        let pattern = format!("{}b", "a*".repeat(200));
        assert!(!matches_simple_glob(&subject, &pattern));

        let pattern = format!("{}a", "*a".repeat(200));
        assert!(matches_simple_glob(&subject, &pattern));
    }

    #[test]
    fn test_compiled_glob_is_reusable() {
        let glob = Glob::new("*.log");
        assert_eq!(glob.as_string(), "*.log");
        for _ in 0..3 {
            assert!(glob.matches("app.log"));
            assert!(!glob.matches("app.txt"));
        }
    }
}
