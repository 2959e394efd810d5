use crate::StaticFeed;
use chrono::NaiveDate;
use convertist::currency::{CurrencyState, FetchKind, RateFeed};
use convertist::ui::core::actions::Action;
use convertist::ui::core::task_manager::TaskManager;
use std::sync::Arc;
use std::time::Duration;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
}

#[tokio::test]
async fn test_rates_fetch_reports_back() {
    let (mut manager, mut rx) = TaskManager::new();
    let feed: Arc<dyn RateFeed> = Arc::new(StaticFeed);
    let mut state = CurrencyState::default();

    let ticket = state.begin_fetch(FetchKind::Rates, today());
    let task_id = manager.spawn_rates_fetch(feed, ticket.clone());
    assert_eq!(task_id, 1);
    assert_eq!(manager.task_count(), 1);

    let action = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();

    match action {
        Action::RatesLoaded { ticket: received, result } => {
            assert_eq!(received, ticket);
            assert_eq!(result.unwrap().rate_for("USD", "EUR"), Some(0.9));
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
async fn test_history_fetch_and_cleanup() {
    let (mut manager, mut rx) = TaskManager::new();
    let feed: Arc<dyn RateFeed> = Arc::new(StaticFeed);
    let mut state = CurrencyState::default();

    let ticket = state.begin_fetch(FetchKind::History, today());
    manager.spawn_history_fetch(feed, ticket);

    let action = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(action, Action::HistoryLoaded { .. }));

    // The task finishes right after sending
    for _ in 0..100 {
        if !manager.is_fetching() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished.len(), 1);
    assert!(finished[0].1.starts_with("Fetch history USD/EUR"));
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();
    let feed: Arc<dyn RateFeed> = Arc::new(StaticFeed);
    let mut state = CurrencyState::default();

    for _ in 0..3 {
        let ticket = state.begin_fetch(FetchKind::Rates, today());
        manager.spawn_rates_fetch(Arc::clone(&feed), ticket);
    }
    assert_eq!(manager.task_count(), 3);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert!(!manager.is_fetching());
}

#[tokio::test]
async fn test_finished_rates_fetch_is_reported_once() {
    let (mut manager, mut rx) = TaskManager::new();
    let feed: Arc<dyn RateFeed> = Arc::new(StaticFeed);
    let mut state = CurrencyState::default();

    let ticket = state.begin_fetch(FetchKind::Rates, today());
    let task_id = manager.spawn_rates_fetch(feed, ticket);
    assert!(rx.recv().await.is_some());

    for _ in 0..100 {
        if !manager.is_fetching() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].0, task_id);
    assert!(finished[0].1.starts_with("Fetch rates for USD (#1)"));
    assert!(manager.cleanup_finished_tasks().is_empty());
}
