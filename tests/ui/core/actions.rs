use convertist::config::StartTab;
use convertist::ui::core::actions::{Action, DialogType, Tab};

#[test]
fn test_tab_cycle() {
    assert_eq!(Tab::default(), Tab::Timezone);
    assert_eq!(Tab::Timezone.next(), Tab::Currency);
    assert_eq!(Tab::Shoe.next(), Tab::Timezone);
    assert_eq!(Tab::Timezone.previous(), Tab::Shoe);

    for tab in Tab::ALL {
        assert_eq!(tab.next().previous(), tab);
        assert_eq!(Tab::ALL[tab.index()], tab);
    }
}

#[test]
fn test_tab_titles() {
    let titles: Vec<&str> = Tab::ALL.iter().map(|tab| tab.title()).collect();
    assert_eq!(titles, ["Timezone", "Currency", "Shoe Size"]);
}

#[test]
fn test_start_tab_conversion() {
    assert_eq!(Tab::from(StartTab::Currency), Tab::Currency);
    assert_eq!(Tab::from(StartTab::Shoe), Tab::Shoe);
}

#[test]
fn test_dialog_actions_compare() {
    let action = Action::ShowDialog(DialogType::Help);
    assert!(matches!(action, Action::ShowDialog(DialogType::Help)));
    assert_ne!(DialogType::Help, DialogType::Logs);
}
