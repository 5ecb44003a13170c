use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reelplan_app_core::app_core::{reduce, DomainEvent};
use reelplan_app_core::ports::GuideGenerator;
use reelplan_app_core::{AppState, Generation, GeminiConfig, Tab};
use std::time::Duration;
use tracing::error;

use crate::render::{render_all, render_tab};

pub enum Output {
    Text { tab: Option<Tab> },
    Json,
}

/// Runs one generation through the state machine and returns the final state.
pub async fn run_generation<G: GuideGenerator>(generator: &G, idea: &str) -> AppState {
    let run_id = uuid::Uuid::new_v4();
    let state = reduce(
        AppState::default(),
        DomainEvent::GenerationStarted {
            run_id,
            idea: idea.to_string(),
        },
    );

    let Some(idea) = state.last_idea.clone() else {
        return state;
    };

    let ev = match generator.generate(&idea).await {
        Ok(guide) => DomainEvent::GenerationSucceeded { run_id, guide },
        Err(e) => {
            error!("Strategy generation failed ({:?}): {e}", e.kind());
            DomainEvent::GenerationFailed {
                run_id,
                message: e.user_message().to_string(),
            }
        }
    };
    reduce(state, ev)
}

pub async fn cmd_generate(idea: String, config: GeminiConfig, output: Output) -> Result<()> {
    if idea.trim().is_empty() {
        anyhow::bail!("idea must not be empty");
    }

    let generator = reelplan_app_core::default_generator(config)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Analyzing \"{}\"...", idea.trim()));

    let state = run_generation(&generator, &idea).await;
    pb.finish_and_clear();

    match state.generation {
        Generation::Completed(guide) => {
            match output {
                Output::Json => println!("{}", serde_json::to_string_pretty(&guide)?),
                Output::Text { tab: Some(tab) } => print!("{}", render_tab(&guide, tab)),
                Output::Text { tab: None } => print!("{}", render_all(&guide)),
            }
            Ok(())
        }
        Generation::Error(message) => anyhow::bail!(message),
        Generation::Idle | Generation::Generating => {
            anyhow::bail!("generation did not run")
        }
    }
}

pub fn cmd_schema() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&reelplan_core::response_schema())?
    );
    Ok(())
}

pub fn cmd_templates() {
    for (i, template) in reelplan_config::HOOK_TEMPLATES.iter().enumerate() {
        println!("{:>2}. {template}", i + 1);
    }
}
