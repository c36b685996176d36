use inventra::domain::config::DashboardConfig;
use inventra::domain::features::Page;
use inventra::features::transfers::Transfers;
use inventra::notify::Notifications;

#[test]
fn init_creates_enabled_slices() {
    let slices = inventra::init(&DashboardConfig::default(), &Notifications::new())
        .expect("init should succeed");
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].id, std::any::TypeId::of::<Transfers>());
    assert!(inventra::features::is_enabled("transfers"));
}

#[test]
fn disabled_pages_are_skipped() {
    let mut config = DashboardConfig::default();
    config.pages = Page::DASHBOARD | Page::SETTINGS;
    let slices = inventra::init(&config, &Notifications::new()).unwrap();
    assert!(slices.is_empty());
}

#[test]
fn workspace_shares_notifications_with_slices() {
    let workspace = inventra::workspace(DashboardConfig::default()).unwrap();
    let transfers = workspace.try_get_slice::<Transfers>().unwrap();

    assert!(transfers.write().reject("T003"));
    let toast = workspace.notifications.latest().expect("slice notified the workspace center");
    assert_eq!(toast.title, "Transfer Rejected");
}

#[test]
fn zero_history_is_rejected() {
    let mut config = DashboardConfig::default();
    config.notifications.history = 0;
    assert!(matches!(inventra::workspace(config), Err(inventra::InitError::Notify(_))));
}
