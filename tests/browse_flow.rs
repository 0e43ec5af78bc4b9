//! End-to-end browse flows through the real fetch coordinator.
//!
//! These tests drive the browse reducer with actual async fetches instead of
//! fabricated completions: actions emitted by the reducer are executed
//! against a `FetchCoordinator` over the seeded catalog, and the results are
//! fed back in as events, exactly as the terminal front does it.

use std::sync::Arc;

use dripcity::app::{handle_event, Action, BrowseState, Event, LoadPhase};
use dripcity::catalog::InMemoryCatalog;
use dripcity::fetch::{FetchCoordinator, Latency, RequestSeq};
use dripcity::query::FilterSpec;
use dripcity::ui::Theme;
use futures_util::future;

fn engine() -> (FetchCoordinator, BrowseState) {
    let api = FetchCoordinator::with_latency(Arc::new(InMemoryCatalog::seeded()), Latency::zero());
    (api, BrowseState::new(Theme::default()))
}

/// Runs one emitted fetch action to completion and feeds the result back.
async fn complete_fetch(api: &FetchCoordinator, state: &mut BrowseState, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::FetchItems { seq, filter } => {
                let result = api.fetch_items(&filter).await.map_err(|e| e.to_string());
                handle_event(state, &Event::ItemsFetched { seq, result }).unwrap();
            }
            Action::FetchCategories => {
                let result = api.fetch_categories().await.map_err(|e| e.to_string());
                handle_event(state, &Event::CategoriesFetched { result }).unwrap();
            }
            Action::Quit => {}
        }
    }
}

fn issued(actions: &[Action]) -> (RequestSeq, FilterSpec) {
    match actions {
        [Action::FetchItems { seq, filter }] => (*seq, filter.clone()),
        other => panic!("expected a single fetch action, got {other:?}"),
    }
}

#[tokio::test]
async fn bootstrap_loads_the_full_catalog() {
    let (api, mut state) = engine();

    let seq = state.begin_fetch();
    let (categories, items) =
        future::join(api.fetch_categories(), api.fetch_items(&state.filter)).await;

    handle_event(
        &mut state,
        &Event::CategoriesFetched {
            result: categories.map_err(|e| e.to_string()),
        },
    )
    .unwrap();
    handle_event(
        &mut state,
        &Event::ItemsFetched {
            seq,
            result: items.map_err(|e| e.to_string()),
        },
    )
    .unwrap();

    assert_eq!(state.phase, LoadPhase::Ready);
    assert_eq!(state.items.len(), 6);
    assert_eq!(state.categories, vec!["Fabric", "Accessories", "Materials", "Tools"]);
}

#[tokio::test]
async fn typing_a_search_narrows_results_keystroke_by_keystroke() {
    let (api, mut state) = engine();

    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "leather".chars() {
        let (_, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
        complete_fetch(&api, &mut state, actions).await;
    }

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Leather Handbag Straps");
}

#[tokio::test]
async fn stale_fetch_never_overwrites_the_newer_one() {
    let (api, mut state) = engine();

    // Two category changes in quick succession, both fetches in flight.
    let (_, first) = handle_event(&mut state, &Event::ToggleCategory("Fabric".into())).unwrap();
    let (fabric_seq, fabric_filter) = issued(&first);
    let (_, second) =
        handle_event(&mut state, &Event::ToggleCategory("Accessories".into())).unwrap();
    let (accessories_seq, accessories_filter) = issued(&second);

    // Run both fetches concurrently, then deliver them in the wrong order:
    // the newer completion first, the superseded one after.
    let (fabric, accessories) = future::join(
        api.fetch_items(&fabric_filter),
        api.fetch_items(&accessories_filter),
    )
    .await;

    handle_event(
        &mut state,
        &Event::ItemsFetched {
            seq: accessories_seq,
            result: accessories.map_err(|e| e.to_string()),
        },
    )
    .unwrap();
    let shown: Vec<i64> = state.items.iter().map(|i| i.id).collect();

    handle_event(
        &mut state,
        &Event::ItemsFetched {
            seq: fabric_seq,
            result: fabric.map_err(|e| e.to_string()),
        },
    )
    .unwrap();

    // The late Fabric result was discarded.
    let still_shown: Vec<i64> = state.items.iter().map(|i| i.id).collect();
    assert_eq!(shown, still_shown);
    assert!(state.items.iter().all(|i| i.category == "Accessories"));
    assert_eq!(state.phase, LoadPhase::Ready);
}

#[tokio::test]
async fn clear_filters_restores_the_unfiltered_catalog() {
    let (api, mut state) = engine();

    let (_, actions) = handle_event(&mut state, &Event::ToggleCategory("Fabric".into())).unwrap();
    complete_fetch(&api, &mut state, actions).await;
    let (_, actions) = handle_event(&mut state, &Event::ToggleVerified).unwrap();
    complete_fetch(&api, &mut state, actions).await;
    assert!(state.items.len() < 6);

    let (_, actions) = handle_event(&mut state, &Event::ClearFilters).unwrap();
    let (_, filter) = issued(&actions);
    assert_eq!(filter, FilterSpec::default());
    complete_fetch(&api, &mut state, actions).await;

    assert_eq!(state.filter, FilterSpec::default());
    assert_eq!(state.items.len(), 6);
}

#[tokio::test]
async fn no_match_lands_in_ready_with_an_empty_list() {
    let (api, mut state) = engine();

    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "zzzznomatch".chars() {
        let (_, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
        complete_fetch(&api, &mut state, actions).await;
    }

    assert!(state.items.is_empty());
    assert_eq!(state.phase, LoadPhase::Ready);

    let vm = state.compute_viewmodel(24, 80);
    assert!(vm.empty_state.is_some());
    assert!(!vm.loading);
    assert!(vm.error_banner.is_none());
}
