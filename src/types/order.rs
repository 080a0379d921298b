//! Order types: Order, Comment

use super::ids::{CommentId, OrderId};
use super::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An order/card on the progress board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Human-readable order label, e.g. "ORD-003"
    pub number: String,
    /// Current workflow state - drives column membership
    pub status: Status,
    #[serde(default)]
    pub description: String,
    /// Placement timestamp; columns sort newest first
    pub created_at: DateTime<Utc>,
    /// Comments/discussion thread, append-only
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Order {
    /// Create a new order in the given status
    pub fn new(number: impl Into<String>, status: Status) -> Self {
        Self {
            id: OrderId::new(),
            number: number.into(),
            status,
            description: String::new(),
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }

    /// Set the id (seed data carries fixed ids)
    pub fn with_id(mut self, id: impl Into<OrderId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the placement timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Find a comment by ID
    pub fn find_comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }
}

/// A comment on an order - part of the discussion thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
    /// Display name of the commenting actor; identity is the caller's concern
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            body: body.into(),
            author: author.into(),
            created_at: Utc::now(),
        }
    }
}
