use std::fmt;

/// Reconciliation operation applied to the master collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Unique sequences from the additional collection are appended to the master
    Add,
    /// Matching sequences replace their master counterparts; new sequences are added
    Replace,
    /// Matching sequences are removed from the master
    Remove,
}

impl Operation {
    /// Parse an operation token. The token set is closed and case-sensitive:
    /// `add`, `replace`, `remove`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "add" => Some(Self::Add),
            "replace" => Some(Self::Replace),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Replace => "replace",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equality rule used to decide whether a record in the additional collection
/// matches one in the master collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Records match when their identifiers are equal
    Id,
    /// Records match when both the identifier and the sequence content are equal
    IdSequence,
}

impl MatchMode {
    /// Parse a match-mode token. The token set is closed and case-sensitive:
    /// `id`, `id_sequence`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "id" => Some(Self::Id),
            "id_sequence" => Some(Self::IdSequence),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::IdSequence => "id_sequence",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
