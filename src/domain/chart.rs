use super::selection::{PayloadRange, ScatterPoint, SuccessSummary};
use serde::Serialize;

/// One pie slice as handed to the rendering side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub group: String,
    pub count: usize,
}

/// A chart description: what to draw, never how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "chart", rename_all = "lowercase")]
pub enum Chart {
    Pie {
        title: String,
        slices: Vec<PieSlice>,
    },
    Scatter {
        title: String,
        points: Vec<ScatterPoint>,
    },
}

impl Chart {
    pub fn pie(title: impl Into<String>, summary: &SuccessSummary) -> Self {
        let slices = summary
            .iter()
            .map(|(key, count)| PieSlice {
                group: key.to_string(),
                count,
            })
            .collect();
        Self::Pie {
            title: title.into(),
            slices,
        }
    }

    pub fn scatter(title: impl Into<String>, points: Vec<ScatterPoint>) -> Self {
        Self::Scatter {
            title: title.into(),
            points,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Pie { title, .. } | Self::Scatter { title, .. } => title,
        }
    }
}

/// A selectable entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Payload range slider: fixed scale, initial selection taken from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderSpec {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub value: PayloadRange,
}
