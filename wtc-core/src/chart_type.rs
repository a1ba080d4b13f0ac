use serde::{Deserialize, Serialize};
use std::fmt;

/// The rendering mode of the trend chart.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChartType {
    #[default]
    Line,
    Column,
}

impl ChartType {
    /// The other chart type.
    pub fn toggled(self) -> Self {
        match self {
            ChartType::Line => ChartType::Column,
            ChartType::Column => ChartType::Line,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartType::Line => write!(f, "LINE"),
            ChartType::Column => write!(f, "COLUMN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartType;

    #[test]
    fn test_toggled() {
        assert_eq!(ChartType::Line.toggled(), ChartType::Column);
        assert_eq!(ChartType::Column.toggled(), ChartType::Line);
    }

    #[test]
    fn test_serde_uses_uppercase_names() {
        let json = serde_json::to_string(&ChartType::Column).unwrap();
        assert_eq!(json, "\"COLUMN\"");
        let parsed: ChartType = serde_json::from_str("\"LINE\"").unwrap();
        assert_eq!(parsed, ChartType::Line);
        assert_eq!(ChartType::default(), ChartType::Line);
    }
}
