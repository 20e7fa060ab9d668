//! Classify raw lookup input as an ENS name or an address candidate

/// What the user typed, after trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// Anything containing a dot is routed to ENS resolution
    Ens(String),
    /// Everything else is treated as a literal hex address
    Address(String),
}

impl QueryKind {
    pub fn as_str(&self) -> &str {
        match self {
            QueryKind::Ens(value) | QueryKind::Address(value) => value,
        }
    }

    pub fn is_ens(&self) -> bool {
        matches!(self, QueryKind::Ens(_))
    }
}

/// Coarse heuristic, not an ENS grammar check: `foo..` is still an ENS query.
pub fn classify(input: &str) -> QueryKind {
    let trimmed = input.trim();
    if trimmed.contains('.') {
        QueryKind::Ens(trimmed.to_string())
    } else {
        QueryKind::Address(trimmed.to_string())
    }
}
