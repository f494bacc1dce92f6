use chrono::NaiveDateTime;
use serde_json::Value;

use crate::timestamp::{now_iso, parse_iso};

const SEPARATOR: &str = " - ";

/// One captured submission: `<timestamp> - <compact JSON body>`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadRecord {
    pub timestamp: String,
    pub body: Value,
}

impl LeadRecord {
    pub fn now(body: Value) -> Self {
        Self { timestamp: now_iso(), body }
    }

    pub fn to_line(&self) -> String {
        format!("{}{}{}\n", self.timestamp, SEPARATOR, self.body)
    }

    pub fn parse_line(line: &str) -> Option<Self> {
        let (timestamp, body) = line.trim_end_matches('\n').split_once(SEPARATOR)?;
        parse_iso(timestamp).ok()?;
        let body = serde_json::from_str(body).ok()?;
        Some(Self { timestamp: timestamp.to_string(), body })
    }

    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        parse_iso(&self.timestamp).ok()
    }
}
