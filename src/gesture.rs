//! Drag gesture adapter
//!
//! The boundary between pointer tracking and the board engine. A gesture is
//! press on a card, any number of moves, then release. Only release produces
//! a command, and only when the pointer is over a column whose label parses
//! to a valid status; releasing anywhere else cancels the drag. Intermediate
//! moves never touch the engine, which keeps it independent of whichever
//! drag-and-drop library drives the pointer events.

use crate::order::MoveOrder;
use crate::types::{OrderId, Status};

/// An in-flight drag of one order card
#[derive(Debug)]
pub struct DragGesture {
    order_id: OrderId,
    over: Option<Status>,
}

impl DragGesture {
    /// Begin dragging the given order card
    pub fn begin(order_id: impl Into<OrderId>) -> Self {
        Self {
            order_id: order_id.into(),
            over: None,
        }
    }

    /// The pointer moved over a drop target with the given column label.
    ///
    /// Labels that do not name a column ("Trash", a stray element id) leave
    /// the gesture with no target, same as hovering outside every column.
    pub fn hover(&mut self, column_label: &str) {
        self.over = column_label.parse().ok();
    }

    /// The pointer left all drop targets
    pub fn leave(&mut self) {
        self.over = None;
    }

    /// Complete the gesture.
    ///
    /// Returns the single [`MoveOrder`] for the drop, or `None` when the
    /// release happened outside any valid column (a cancelled drag, not an
    /// error).
    pub fn release(self) -> Option<MoveOrder> {
        match self.over {
            Some(status) => Some(MoveOrder::new(self.order_id, status)),
            None => {
                tracing::debug!(id = %self.order_id, "drag cancelled");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_over_column_produces_one_move() {
        let mut drag = DragGesture::begin("1");
        drag.hover("Pending");
        drag.hover("Processing");

        let mv = drag.release().unwrap();
        assert_eq!(mv.id.as_str(), "1");
        assert_eq!(mv.status, Status::Processing);
    }

    #[test]
    fn test_release_outside_columns_cancels() {
        let mut drag = DragGesture::begin("1");
        drag.hover("Processing");
        drag.leave();
        assert!(drag.release().is_none());
    }

    #[test]
    fn test_release_without_hover_cancels() {
        let drag = DragGesture::begin("1");
        assert!(drag.release().is_none());
    }

    #[test]
    fn test_invalid_drop_target_cancels() {
        let mut drag = DragGesture::begin("1");
        drag.hover("Trash");
        assert!(drag.release().is_none());
    }
}
