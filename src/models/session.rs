use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Sub-division of a school day for which attendance is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Fullday,
    Forenoon,
    Afternoon,
}

impl Session {
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Fullday => "fullday",
            Session::Forenoon => "forenoon",
            Session::Afternoon => "afternoon",
        }
    }

    /// Parse a session name coming from the config file.
    pub fn from_name(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "fullday" | "full" => Ok(Session::Fullday),
            "forenoon" | "fn" => Ok(Session::Forenoon),
            "afternoon" | "an" => Ok(Session::Afternoon),
            _ => Err(AppError::InvalidSession(s.to_string())),
        }
    }
}
