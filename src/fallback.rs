//! # Built-in Case Studies
//!
//! The three deployments shown on the landing page. Used when no content file
//! is configured, or when the configured one cannot be loaded, so the showcase
//! always has something to rotate through.

use crate::{DisplayRecord, ItemStore};

fn record(label: &str, quote: &str, metric: &str, detail: &str) -> DisplayRecord {
    DisplayRecord {
        label: label.to_string(),
        quote: quote.to_string(),
        metric: metric.to_string(),
        detail: detail.to_string(),
    }
}

/// The built-in case studies, in display order.
pub fn case_studies() -> ItemStore {
    ItemStore {
        records: vec![
            record(
                "Apex Fintech",
                "Replaced a 4-person ops team with bots. 142 hours saved every month and NPS went up.",
                "+142 hrs/mo saved",
                "KYC verification, document parsing, CRM updates",
            ),
            record(
                "Nova SaaS",
                "Inbound support deflected by 88% with an AI agent trained on our product and docs.",
                "88% deflection",
                "Zendesk + Slack + billing integrations",
            ),
            record(
                "Harbor Logistics",
                "Workflow bots now trigger pickups and invoices automatically. Cash cycle improved by 12 days.",
                "12 days faster cash",
                "RPA + OCR + accounting sync",
            ),
        ],
    }
}
