use std::{fmt, str::FromStr};

use anyhow::{bail, Error};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PollutionCategory {
    #[default]
    Plastic,
    Household,
    Industrial,
    Oil,
    Other,
}

impl PollutionCategory {
    pub const ALL: [Self; 5] = [
        Self::Plastic,
        Self::Household,
        Self::Industrial,
        Self::Oil,
        Self::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Self::Plastic => "plastic",
            Self::Household => "household",
            Self::Industrial => "industrial",
            Self::Oil => "oil",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Plastic => "Plastic waste",
            Self::Household => "Household waste",
            Self::Industrial => "Industrial waste",
            Self::Oil => "Oil spill",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PollutionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for PollutionCategory {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match Self::ALL
            .into_iter()
            .find(|category| category.value() == value)
        {
            Some(category) => Ok(category),
            None => bail!("unknown pollution category: {value:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSubmission {
    pub location: String,
    pub category: PollutionCategory,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}
