//! Team/part classification results

use serde::{Deserialize, Serialize};

use crate::impl_wire_code_conversions;

/// Directly-responsible-individual flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dri {
    /// All owners resolve to one team/part.
    Single,
    /// Owners are split across team/parts.
    Split,
    /// No owners.
    #[default]
    Unassigned,
}

impl_wire_code_conversions!(Dri {
    Single => "O",
    Split => "X",
    Unassigned => "-",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPartSummary {
    pub team_part_text: String,
    pub dri: Dri,
}
