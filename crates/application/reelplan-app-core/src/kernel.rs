use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{GenerationStatus, RunId};
use crate::ports::GuideGenerator;

/// Owns the store and turns commands into reducer events plus, for accepted
/// submissions, exactly one background generation call.
pub struct AppKernel<G> {
    pub store: AppStore,
    generator: Arc<G>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<G> AppKernel<G>
where
    G: GuideGenerator,
{
    pub fn new(store: AppStore, generator: G) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            store,
            generator: Arc::new(generator),
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::Submit(idea) => self.submit(idea),

            AppCommand::Retry => {
                let state = self.store.state();
                if state.status() != GenerationStatus::Error {
                    return;
                }
                if let Some(idea) = state.last_idea {
                    self.submit(idea);
                }
            }

            AppCommand::SelectTab(tab) => self.store.apply(DomainEvent::TabSelected(tab)),
        }
    }

    fn submit(&mut self, idea: String) {
        let run_id: RunId = uuid::Uuid::new_v4();
        self.store
            .apply(DomainEvent::GenerationStarted { run_id, idea });

        // The reducer rejects blank ideas and overlapping submissions; only a
        // run it accepted gets a network call.
        let state = self.store.state();
        if state.run_id != Some(run_id) {
            debug!("submission ignored in state {:?}", state.status());
            return;
        }
        let Some(idea) = state.last_idea else {
            return;
        };

        info!("generating guide for run {run_id}");

        let tx = self.tx.clone();
        let generator = self.generator.clone();
        let spawn_res = std::thread::Builder::new()
            .name("reelplan-generate".into())
            .spawn(move || {
                let rt = match crate::async_runtime::runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        error!("{e}");
                        let _ = tx.blocking_send(DomainEvent::GenerationFailed {
                            run_id,
                            message: reelplan_infra::GENERIC_FAILURE_MESSAGE.into(),
                        });
                        return;
                    }
                };

                rt.block_on(async move {
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
                    let _ = tx.send(ev).await;
                });
            });

        if let Err(e) = spawn_res {
            error!("Failed to start generation worker thread: {e}");
            self.store.apply(DomainEvent::GenerationFailed {
                run_id,
                message: reelplan_infra::GENERIC_FAILURE_MESSAGE.into(),
            });
        }
    }

    /// Applies resolved calls. Returns true when anything was applied.
    pub fn tick(&mut self) -> bool {
        let mut applied = false;
        while let Ok(ev) = self.rx.try_recv() {
            self.store.apply(ev);
            applied = true;
        }
        applied
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }
}
