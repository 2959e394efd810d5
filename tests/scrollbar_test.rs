use convertist::ui::components::scrollbar_helper::ScrollbarHelper;
use ratatui::layout::Rect;

#[test]
fn test_scrollbar_detection() {
    // 10 picker rows in a list area 5 lines high
    let rect = Rect::new(4, 2, 50, 5);
    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 10);

    let scrollbar_rect = scrollbar_area.expect("Scrollbar should be needed for 10 items in height 5");
    assert_eq!(scrollbar_rect.width, 1, "Scrollbar should be 1 column wide");
    assert_eq!(scrollbar_rect.height, 5, "Scrollbar should span full height");
    assert_eq!(scrollbar_rect.x, 53, "Scrollbar sits in the rightmost column");

    // List area should be reduced by 1 column for scrollbar
    assert_eq!(list_area.width, 49, "List area should be reduced for scrollbar");
    assert_eq!(list_area.x, 4);
}

#[test]
fn test_no_scrollbar_needed() {
    let rect = Rect::new(0, 0, 50, 5);
    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 3);

    assert!(scrollbar_area.is_none(), "Scrollbar should not be needed for 3 items in height 5");
    assert_eq!(list_area, rect, "List area should be full rect when no scrollbar");
}

#[test]
fn test_exact_fit_boundary() {
    // Picker lists have no border of their own, so every line holds a row
    let rect = Rect::new(0, 0, 50, 10);

    let (_, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 10);
    assert!(scrollbar_area.is_none(), "10 items fit exactly in height 10");

    let (_, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 11);
    assert!(scrollbar_area.is_some(), "11 items overflow height 10");
}

#[test]
fn test_state_tracks_selection() {
    let mut helper = ScrollbarHelper::new();
    helper.update_state(40, 12, Some(8));

    let expected = ratatui::widgets::ScrollbarState::new(40)
        .position(12)
        .viewport_content_length(8);
    assert_eq!(*helper.state(), expected);
}
