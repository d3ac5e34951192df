//! JSON envelopes for the machine-readable output mode.

use anyhow::Result;
use pattern_catalog::PatternRecord;
use serde::Serialize;

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    status: &'static str,
    data: &'a T,
}

#[derive(Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub matches: Vec<PatternRecord>,
}

#[derive(Serialize)]
pub struct ResolveOutput {
    pub key: String,
    pub label: String,
    pub records: Vec<PatternRecord>,
}

#[derive(Serialize)]
pub struct Suggestion {
    pub key: String,
    pub label: String,
}

#[derive(Serialize)]
pub struct SuggestOutput {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Serialize)]
pub struct TopEntry {
    pub name: String,
    pub count: u64,
    pub share: u64,
}

#[derive(Serialize)]
pub struct TopOutput {
    pub total: u64,
    pub entries: Vec<TopEntry>,
}

pub fn print_ok<T: Serialize>(data: &T) -> Result<()> {
    let envelope = Envelope {
        status: "ok",
        data,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub fn print_error(message: &str) {
    let envelope = serde_json::json!({
        "status": "error",
        "message": message,
    });
    println!("{envelope}");
}
