use convertist::ui::core::event_handler::{EventHandler, EventType};
use std::time::Duration;

#[test]
fn test_default_tick_rate() {
    let handler = EventHandler::new();
    assert_eq!(handler.tick_rate(), Duration::from_millis(100));
}

#[test]
fn test_custom_tick_rate() {
    let handler = EventHandler::with_tick_rate(Duration::from_millis(16));
    assert_eq!(handler.tick_rate(), Duration::from_millis(16));
}

#[test]
fn test_event_type_carries_resize() {
    let event = EventType::Resize(80, 24);
    assert!(matches!(event, EventType::Resize(80, 24)));
}
