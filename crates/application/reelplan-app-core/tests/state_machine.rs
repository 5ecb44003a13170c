use reelplan_app_core::app_core::{reduce, DomainEvent};
use reelplan_app_core::viewmodel::{can_submit, content_vm, nav_vm, status_label, ContentVm};
use reelplan_app_core::{AppState, GenerationStatus, RunId, Tab};
use reelplan_core::CreatorGuide;
use std::path::PathBuf;

fn guide() -> CreatorGuide {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.pop();
    path.pop();
    path.push("test_files");
    path.push("sourdough_guide.json");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("failed to read test file: {}", path.display()));
    reelplan_core::parse_guide(&text).unwrap()
}

fn run() -> RunId {
    uuid::Uuid::new_v4()
}

fn started(state: AppState, run_id: RunId, idea: &str) -> AppState {
    reduce(
        state,
        DomainEvent::GenerationStarted {
            run_id,
            idea: idea.to_string(),
        },
    )
}

fn completed(run_id: RunId) -> AppState {
    let s = started(AppState::default(), run_id, "How to bake sourdough bread");
    reduce(s, DomainEvent::GenerationSucceeded { run_id, guide: guide() })
}

#[test]
fn initial_state_is_idle_without_data_or_error() {
    let s = AppState::default();
    assert_eq!(s.status(), GenerationStatus::Idle);
    assert!(s.data().is_none());
    assert!(s.error().is_none());
    assert_eq!(s.active_tab, Tab::Overview);
}

#[test]
fn submit_moves_idle_to_generating() {
    let id = run();
    let s = started(AppState::default(), id, "  How to bake sourdough bread ");
    assert_eq!(s.status(), GenerationStatus::Generating);
    assert_eq!(s.last_idea.as_deref(), Some("How to bake sourdough bread"));
    assert_eq!(s.run_id, Some(id));
}

#[test]
fn blank_ideas_are_a_no_op() {
    for idea in ["", "   ", "\t\n"] {
        let before = AppState::default();
        let after = started(before.clone(), run(), idea);
        assert_eq!(before, after, "idea {idea:?} should not transition");
    }

    let done = completed(run());
    assert_eq!(started(done.clone(), run(), " "), done);
}

#[test]
fn success_attaches_guide_on_overview() {
    let s = completed(run());
    assert_eq!(s.status(), GenerationStatus::Completed);
    assert!(s.error().is_none());
    let data = s.data().expect("guide attached");
    assert_eq!(data.titles.len(), 3);
    assert!(!data.monetization.is_empty());
    assert!(!data.software.is_empty());
    assert_eq!(s.active_tab, Tab::Overview);

    match content_vm(&s) {
        ContentVm::Overview(vm) => {
            assert_eq!(vm.hook, data.hook);
            assert_eq!(vm.titles.len(), 3);
            assert_eq!(vm.titles[0].rank, 1);
            assert_eq!(vm.titles[2].text, data.titles[2]);
        }
        other => panic!("expected overview, got {other:?}"),
    }
}

#[test]
fn failure_attaches_message_and_no_data() {
    let id = run();
    let s = started(AppState::default(), id, "idea");
    let s = reduce(
        s,
        DomainEvent::GenerationFailed {
            run_id: id,
            message: "Invalid API Key. Please check your settings.".into(),
        },
    );
    assert_eq!(s.status(), GenerationStatus::Error);
    assert_eq!(s.error(), Some("Invalid API Key. Please check your settings."));
    assert!(s.data().is_none());
    assert!(matches!(content_vm(&s), ContentVm::Error { can_retry: true, .. }));
}

#[test]
fn resubmitting_from_completed_clears_guide_and_resets_tab() {
    let s = completed(run());
    let s = reduce(s, DomainEvent::TabSelected(Tab::Software));
    assert_eq!(s.active_tab, Tab::Software);

    let next = run();
    let s = started(s, next, "Another idea");
    assert_eq!(s.status(), GenerationStatus::Generating);
    assert!(s.data().is_none());
    assert_eq!(s.active_tab, Tab::Overview);
    assert_eq!(s.run_id, Some(next));
}

#[test]
fn tab_selection_only_applies_when_completed() {
    let idle = AppState::default();
    assert_eq!(reduce(idle.clone(), DomainEvent::TabSelected(Tab::Editing)), idle);

    let generating = started(AppState::default(), run(), "idea");
    assert_eq!(
        reduce(generating.clone(), DomainEvent::TabSelected(Tab::Editing)),
        generating
    );

    let id = run();
    let failed = reduce(
        started(AppState::default(), id, "idea"),
        DomainEvent::GenerationFailed {
            run_id: id,
            message: "Quota exceeded.".into(),
        },
    );
    assert_eq!(failed.status(), GenerationStatus::Error);
    assert_eq!(
        reduce(failed.clone(), DomainEvent::TabSelected(Tab::Editing)),
        failed
    );

    let s = reduce(completed(run()), DomainEvent::TabSelected(Tab::Production));
    assert_eq!(s.active_tab, Tab::Production);
    assert!(matches!(content_vm(&s), ContentVm::Production(items) if items.len() == 3));
}

#[test]
fn submit_while_generating_is_ignored() {
    let first = run();
    let s = started(AppState::default(), first, "first");
    let s2 = started(s.clone(), run(), "second");
    assert_eq!(s, s2);
    assert_eq!(s2.last_idea.as_deref(), Some("first"));
}

#[test]
fn stale_resolutions_are_discarded() {
    let stale = run();
    let current = run();

    let s = started(AppState::default(), current, "idea");
    let s = reduce(
        s,
        DomainEvent::GenerationSucceeded {
            run_id: stale,
            guide: guide(),
        },
    );
    assert_eq!(s.status(), GenerationStatus::Generating);

    let s = reduce(
        s,
        DomainEvent::GenerationFailed {
            run_id: stale,
            message: "late".into(),
        },
    );
    assert_eq!(s.status(), GenerationStatus::Generating);

    // Results never land outside of Generating either.
    let done = completed(current);
    let again = reduce(
        done.clone(),
        DomainEvent::GenerationFailed {
            run_id: current,
            message: "duplicate".into(),
        },
    );
    assert_eq!(done, again);
}

#[test]
fn nav_is_disabled_until_completed() {
    let idle = AppState::default();
    assert!(nav_vm(&idle).iter().all(|item| !item.enabled && !item.active));

    let s = reduce(completed(run()), DomainEvent::TabSelected(Tab::Monetization));
    let nav = nav_vm(&s);
    assert_eq!(nav.len(), 5);
    assert!(nav.iter().all(|item| item.enabled));
    let active: Vec<_> = nav.iter().filter(|i| i.active).map(|i| i.tab).collect();
    assert_eq!(active, vec![Tab::Monetization]);
}

#[test]
fn submit_is_gated_on_input_and_generation() {
    let idle = AppState::default();
    assert!(!can_submit(&idle, "   "));
    assert!(can_submit(&idle, "Desk setup tour"));

    let generating = started(AppState::default(), run(), "Desk setup tour");
    assert!(!can_submit(&generating, "Another idea"));
    assert_eq!(status_label(&generating), "STATUS: GENERATING");

    assert!(can_submit(&completed(run()), "Another idea"));
}
