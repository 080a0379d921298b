//! Built-in seed data for the order board
//!
//! A fresh session loads these mock orders. They mirror the demo dataset the
//! dashboard ships with: two pending, one processing, three in preview, five
//! completed.

use crate::types::{Order, Status};
use chrono::{DateTime, TimeZone, Utc};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0)
        .single()
        .expect("valid built-in date")
}

/// The default set of demo orders
pub fn default_orders() -> Vec<Order> {
    vec![
        Order::new("ORD-001", Status::Pending)
            .with_id("1")
            .with_description("Landing Page Full Gambar")
            .with_created_at(day(22)),
        Order::new("ORD-002", Status::Pending)
            .with_id("2")
            .with_description("Jasa Desain Konten Iklan JPG")
            .with_created_at(day(21)),
        Order::new("ORD-003", Status::Processing)
            .with_id("3")
            .with_description("Website Development Package")
            .with_created_at(day(19)),
        Order::new("ORD-010", Status::Preview)
            .with_id("10")
            .with_description("E-commerce Website Design")
            .with_created_at(day(20)),
        Order::new("ORD-011", Status::Preview)
            .with_id("11")
            .with_description("Corporate Branding Package")
            .with_created_at(day(19)),
        Order::new("ORD-012", Status::Preview)
            .with_id("12")
            .with_description("Social Media Marketing Kit")
            .with_created_at(day(18)),
        Order::new("ORD-004", Status::Completed)
            .with_id("4")
            .with_description("Landing Page Responsive")
            .with_created_at(day(18)),
        Order::new("ORD-005", Status::Completed)
            .with_id("5")
            .with_description("Video Ads Production")
            .with_created_at(day(17)),
        Order::new("ORD-006", Status::Completed)
            .with_id("6")
            .with_description("Social Media Content Pack")
            .with_created_at(day(16)),
        Order::new("ORD-007", Status::Completed)
            .with_id("7")
            .with_description("SEO Optimization Service")
            .with_created_at(day(15)),
        Order::new("ORD-008", Status::Completed)
            .with_id("8")
            .with_description("Brand Identity Package")
            .with_created_at(day(14)),
    ]
}
