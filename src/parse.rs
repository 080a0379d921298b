//! Forgiving input parsing for seed/load data
//!
//! The order-placement collaborator hands the board its initial records as
//! JSON. Parsing normalizes field aliases and validates statuses up front: a
//! record with an out-of-enum status is rejected, never silently coerced.

use crate::error::{BoardError, Result};
use crate::types::{Comment, Order, Status};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Parse a JSON array of order records
pub fn parse_orders(input: &Value) -> Result<Vec<Order>> {
    match input {
        Value::Array(arr) => arr.iter().map(parse_order).collect(),
        _ => Err(BoardError::parse("input must be an array of orders")),
    }
}

/// Parse a single order record from JSON
pub fn parse_order(input: &Value) -> Result<Order> {
    let obj = input
        .as_object()
        .ok_or_else(|| BoardError::parse("order must be an object"))?;

    let id = require_str(obj, "id")?;
    let number = obj
        .get("number")
        .or_else(|| obj.get("orderNumber"))
        .and_then(Value::as_str)
        .ok_or_else(|| BoardError::missing_field("number"))?;
    let status: Status = require_str(obj, "status")?.parse()?;
    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let created_at = obj
        .get("created_at")
        .or_else(|| obj.get("date"))
        .and_then(Value::as_str)
        .map(parse_timestamp)
        .transpose()?
        .unwrap_or_else(Utc::now);

    let mut order = Order::new(number, status)
        .with_id(id)
        .with_description(description)
        .with_created_at(created_at);

    if let Some(comments) = obj.get("comments").and_then(Value::as_array) {
        for comment in comments {
            order.comments.push(parse_comment(comment)?);
        }
    }

    Ok(order)
}

fn parse_comment(input: &Value) -> Result<Comment> {
    let obj = input
        .as_object()
        .ok_or_else(|| BoardError::parse("comment must be an object"))?;

    let body = obj
        .get("body")
        .or_else(|| obj.get("text"))
        .and_then(Value::as_str)
        .ok_or_else(|| BoardError::missing_field("body"))?;
    let author = obj.get("author").and_then(Value::as_str).unwrap_or("Current User");

    let mut comment = Comment::new(body, author);
    if let Some(id) = obj.get("id").and_then(Value::as_str) {
        comment.id = id.into();
    }
    if let Some(ts) = obj.get("created_at").or_else(|| obj.get("date")).and_then(Value::as_str) {
        comment.created_at = parse_timestamp(ts)?;
    }
    Ok(comment)
}

/// Accept either an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc())
        .map_err(|_| BoardError::invalid_value("created_at", format!("unparseable timestamp '{}'", s)))
}

fn require_str<'a>(obj: &'a serde_json::Map<String, Value>, field: &str) -> Result<&'a str> {
    obj.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| BoardError::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_order_with_aliases() {
        let order = parse_order(&json!({
            "id": "1",
            "orderNumber": "ORD-001",
            "status": "pending",
            "description": "Landing Page Full Gambar",
            "date": "2024-03-22",
            "comments": []
        }))
        .unwrap();

        assert_eq!(order.id.as_str(), "1");
        assert_eq!(order.number, "ORD-001");
        assert_eq!(order.status, Status::Pending);
        assert_eq!(order.created_at.to_rfc3339(), "2024-03-22T00:00:00+00:00");
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let result = parse_order(&json!({
            "id": "1",
            "number": "ORD-001",
            "status": "shipped"
        }));
        assert!(matches!(result, Err(BoardError::InvalidValue { .. })));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let result = parse_order(&json!({ "status": "pending" }));
        assert!(matches!(result, Err(BoardError::MissingField { .. })));
    }

    #[test]
    fn test_parse_orders_batch() {
        let orders = parse_orders(&json!([
            { "id": "1", "number": "ORD-001", "status": "pending" },
            { "id": "3", "number": "ORD-003", "status": "processing" }
        ]))
        .unwrap();
        assert_eq!(orders.len(), 2);
    }

    #[test]
    fn test_parse_comment_with_text_alias() {
        let order = parse_order(&json!({
            "id": "1",
            "number": "ORD-001",
            "status": "pending",
            "comments": [ { "text": "please expedite", "author": "Current User" } ]
        }))
        .unwrap();
        assert_eq!(order.comments.len(), 1);
        assert_eq!(order.comments[0].body, "please expedite");
    }
}
