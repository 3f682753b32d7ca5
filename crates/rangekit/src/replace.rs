// Ordered multi-pattern substitution
// Single left-to-right pass; at each position the first listed pattern wins

use crate::error::PatternError;

/// Ordered list of `(search, replacement)` pairs.
///
/// List order is the tie-break when several search strings match at the same
/// position: the earlier entry wins even if a later one is longer. Empty
/// search strings are rejected on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<(String, String)>", into = "Vec<(String, String)>")
)]
pub struct PatternTable {
    pairs: Vec<(String, String)>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a pair after every existing one.
    pub fn push(
        &mut self,
        search: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<(), PatternError> {
        let search = search.into();
        if search.is_empty() {
            return Err(PatternError::EmptySearch {
                index: self.pairs.len(),
            });
        }
        self.pairs.push((search, replacement.into()));
        Ok(())
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(
        mut self,
        search: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, PatternError> {
        self.push(search, replacement)?;
        Ok(self)
    }

    pub fn from_pairs<I, S, R>(pairs: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (S, R)>,
        S: Into<String>,
        R: Into<String>,
    {
        let mut table = Self::new();
        for (search, replacement) in pairs {
            table.push(search, replacement)?;
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(s, r)| (s.as_str(), r.as_str()))
    }

    /// First pair whose search string is a prefix of `rest`.
    fn match_at(&self, rest: &str) -> Option<(&str, &str)> {
        self.iter().find(|(search, _)| rest.starts_with(search))
    }
}

impl TryFrom<Vec<(String, String)>> for PatternTable {
    type Error = PatternError;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self, Self::Error> {
        if let Some(index) = pairs.iter().position(|(search, _)| search.is_empty()) {
            return Err(PatternError::EmptySearch { index });
        }
        Ok(Self { pairs })
    }
}

impl From<PatternTable> for Vec<(String, String)> {
    fn from(table: PatternTable) -> Self {
        table.pairs
    }
}

/// Rewrite `input` against `table` in one pass.
///
/// A matched search string is consumed whole and never re-examined, so
/// replacement text is not scanned again. Running the result through the
/// same table can therefore change it further.
pub fn replace(input: &str, table: &PatternTable) -> String {
    if table.is_empty() {
        return input.to_owned();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        // Comparing UTF-8 prefixes is equivalent to comparing code points
        if let Some((search, replacement)) = table.match_at(rest) {
            out.push_str(replacement);
            rest = &rest[search.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

/// Replace every occurrence of `old` with `new`.
///
/// # Errors
///
/// [`PatternError::EmptySearch`] when `old` is empty.
pub fn replace_all(input: &str, old: &str, new: &str) -> Result<String, PatternError> {
    let table = PatternTable::new().with(old, new)?;
    Ok(replace(input, &table))
}
