//! Order status - the four fixed board columns

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow state of an order. Each status is one column on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Processing,
    Preview,
    Completed,
}

impl Status {
    /// All statuses in board column order
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Processing,
        Status::Preview,
        Status::Completed,
    ];

    /// Column header label as shown on the board
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Processing => "Processing",
            Status::Preview => "Preview",
            Status::Completed => "Completed",
        }
    }

    /// Wire/storage form (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Processing => "processing",
            Status::Preview => "preview",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = BoardError;

    /// Parse a status from either wire form or a column label.
    ///
    /// Drop targets arrive title-cased from the presentation layer
    /// ("Pending"), seed data lowercase ("pending"); both are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "processing" => Ok(Status::Processing),
            "preview" => Ok(Status::Preview),
            "completed" => Ok(Status::Completed),
            other => Err(BoardError::invalid_value(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
