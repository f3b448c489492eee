//! Roadmap input types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Learner skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [SkillLevel::Beginner, SkillLevel::Intermediate, SkillLevel::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            other => Err(format!(
                "Unknown skill level '{}'. Expected Beginner, Intermediate or Advanced",
                other
            )),
        }
    }
}

/// The three fields a roadmap is generated from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadmapRequest {
    pub domain: String,
    pub level: Option<SkillLevel>,
    pub duration: String,
}

impl RoadmapRequest {
    pub fn new(domain: impl Into<String>, level: Option<SkillLevel>, duration: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            level,
            duration: duration.into(),
        }
    }

    /// True when every field is set and non-empty
    ///
    /// Whitespace counts as content; callers that read user input trim it.
    pub fn is_complete(&self) -> bool {
        !self.domain.is_empty() && self.level.is_some() && !self.duration.is_empty()
    }
}
