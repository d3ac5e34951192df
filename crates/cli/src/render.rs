//! Terminal rendering of result cards and the leaderboard.
//!
//! The card layout follows the product's reference presentation: a
//! deployment/tool header, the classified description lines, and the
//! reference links. A `|jira` link target is surfaced as a ticket hint;
//! the core passed it through as opaque text.

use console::style;
use pattern_catalog::{parse_description, parse_links, DescriptionLine, PatternRecord};
use pattern_frequency::Leaderboard;

const TICKET_TARGET: &str = "jira";

pub fn print_candidates(records: &[PatternRecord]) {
    match records.len() {
        0 => {
            println!("No matching patterns found.");
            return;
        }
        1 => println!("I found the following pattern for you:\n"),
        _ => println!("I found the following patterns for you:\n"),
    }

    for record in records {
        print_card(record);
        println!();
    }
}

fn print_card(record: &PatternRecord) {
    println!("{}", style(&record.tool).bold());
    if !record.deployment.is_empty() {
        println!("Deployment: {}", record.deployment);
    }
    if !record.environment.is_empty() || !record.platform.is_empty() {
        println!(
            "{}",
            style(format!(
                "{} / {}",
                record.environment, record.platform
            ))
            .dim()
        );
    }

    for line in parse_description(&record.description) {
        match line {
            DescriptionLine::Link { label, url } if url.eq_ignore_ascii_case(TICKET_TARGET) => {
                println!("  {} {}", style("[create ticket]").yellow(), label);
            }
            DescriptionLine::Link { label, url } => {
                println!("  {} {}", style(label).cyan(), style(url).dim());
            }
            DescriptionLine::Bullet(text) => println!("  • {text}"),
            DescriptionLine::Text(text) => println!("  {text}"),
        }
    }

    let links = parse_links(&record.link);
    if !links.is_empty() {
        println!("  {}", style("Reference").dim());
        for entry in links {
            if entry.url.eq_ignore_ascii_case(TICKET_TARGET) {
                println!("    {} {}", style("[create ticket]").yellow(), entry.label);
            } else if entry.url.is_empty() {
                println!("    {}", entry.label);
            } else {
                println!("    {} {}", style(entry.label).cyan(), style(entry.url).dim());
            }
        }
    }
}

pub fn print_leaderboard(board: &Leaderboard) {
    if board.entries.is_empty() {
        println!("No searches recorded yet.");
        return;
    }

    println!("Most searched patterns:\n");
    for (rank, entry) in board.entries.iter().enumerate() {
        let share = board.share(entry.count);
        println!(
            "{:>3}. {:<30} {:>5}  {:>3}%",
            rank + 1,
            entry.name,
            entry.count,
            share
        );
    }
}
