//! The interactive narrowing flow: one select prompt per question, then the
//! matching pattern cards.

use crate::render;
use anyhow::{Context as AnyhowContext, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use pattern_catalog::load_catalog;
use pattern_flow::FilterEngine;
use pattern_frequency::FrequencyTracker;
use std::path::Path;

pub async fn run(catalog_path: &Path, store_path: &Path) -> Result<()> {
    // The engine is unusable until the catalog resolves; a load failure
    // surfaces here instead of presenting an empty flow.
    let records = load_catalog(catalog_path)
        .await
        .context("Failed to load catalog")?;
    let mut engine = FilterEngine::with_default_flow(records);
    let mut tracker = FrequencyTracker::open(store_path);
    let theme = ColorfulTheme::default();

    loop {
        while let Some(question) = engine.current_question() {
            let column = question.column.clone();
            let prompt = question.prompt.clone();
            let options = engine.current_options();
            if options.is_empty() {
                // Nothing left to choose; fall through to the (empty) results.
                break;
            }

            let picked = Select::with_theme(&theme)
                .with_prompt(&prompt)
                .items(&options)
                .default(0)
                .interact()?;

            let outcome = engine.answer(&column, &options[picked])?;
            log::debug!("{} candidates after {}", outcome.candidates.len(), column);
            if let Some(name) = outcome.resolved {
                tracker.record(&name);
            }
        }

        render::print_candidates(&engine.candidate_records());

        let again = Confirm::with_theme(&theme)
            .with_prompt("Start over?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
        engine.restart();
    }

    Ok(())
}
