use tracing::debug;

use crate::domain::{AppState, Generation, RunId, Tab};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::GenerationStarted { run_id, idea } => {
            let idea = idea.trim();
            if idea.is_empty() || state.is_generating() {
                return state;
            }
            state.generation = Generation::Generating;
            state.last_idea = Some(idea.to_string());
            state.run_id = Some(run_id);
            state.active_tab = Tab::Overview;
        }

        DomainEvent::GenerationSucceeded { run_id, guide } => {
            if !awaits(&state, run_id) {
                debug!("discarding stale guide for run {run_id}");
                return state;
            }
            state.generation = Generation::Completed(guide);
        }

        DomainEvent::GenerationFailed { run_id, message } => {
            if !awaits(&state, run_id) {
                debug!("discarding stale failure for run {run_id}");
                return state;
            }
            state.generation = Generation::Error(message);
        }

        DomainEvent::TabSelected(tab) => {
            if matches!(state.generation, Generation::Completed(_)) {
                state.active_tab = tab;
            }
        }
    }
    state
}

fn awaits(state: &AppState, run_id: RunId) -> bool {
    state.is_generating() && state.run_id == Some(run_id)
}
