use std::fmt::Display;

/// row counts from a household renumbering pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenumberSummary {
    pub rows: u64,
    /// households inside the selected county, written unchanged
    pub passed_through: u64,
    /// households outside the selected county with a collapsed MAZ
    pub collapsed: u64,
}

impl Display for RenumberSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} household rows, {} inside county unchanged, {} collapsed",
            self.rows, self.passed_through, self.collapsed
        )
    }
}
