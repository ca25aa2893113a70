use serde::{Deserialize, Serialize};

/// One seat in the chart, holding identity and display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// Stable identity within a grid, derived from the seat's (row, col)
    /// position. Selection survives re-renders but not grid replacement.
    pub id: String,
    /// Display name for the placard. May be empty, never missing.
    pub name: String,
    /// 1-based position in row-major order.
    pub seat_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub expression: Expression,
    pub outfit: Outfit,
}

impl Seat {
    /// The id for the seat at 0-based `(row, col)`.
    pub fn id_for(row: usize, col: usize) -> String {
        format!("{row}-{col}")
    }
}

/// Facial expression of the figure. Imported seats always smile; the other
/// variants appear only in curated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    #[default]
    Smile,
    Frown,
    Surprised,
}

/// Outfit appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    /// `#RRGGBB` hex color.
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Stripes,
    Checks,
    Solid,
}
