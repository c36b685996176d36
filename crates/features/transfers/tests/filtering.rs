use inv_notify::Notifications;
use inv_transfers::{
    Priority, PriorityFilter, StatusFilter, TransferFilter, TransferList, TransferStatus,
};

fn seeded() -> TransferList {
    TransferList::seeded(Notifications::new()).expect("built-in data is valid")
}

fn visible_ids(list: &TransferList) -> Vec<&str> {
    list.visible().map(|t| t.id.as_str()).collect()
}

#[test]
fn unfiltered_view_keeps_seed_order() {
    let list = seeded();
    assert!(list.filter().is_unfiltered());
    assert_eq!(visible_ids(&list), ["T001", "T002", "T003", "T004", "T005"]);
}

#[test]
fn search_is_case_insensitive() {
    let mut list = seeded();
    for term in ["rain", "RAIN", "Rain"] {
        list.set_search(term);
        assert_eq!(visible_ids(&list), ["T001"], "term {term:?}");
    }
}

#[test]
fn search_covers_sku_and_stores() {
    let mut list = seeded();

    list.set_search("h234");
    assert_eq!(visible_ids(&list), ["T002"]);

    list.set_search("miami");
    assert_eq!(visible_ids(&list), ["T003"]);

    list.set_search("central");
    assert_eq!(visible_ids(&list), ["T002", "T005"]);

    list.set_search("");
    assert_eq!(list.visible().count(), 5);
}

#[test]
fn status_and_priority_are_anded() {
    let mut list = seeded();

    list.set_status_filter(StatusFilter::Only(TransferStatus::Approved));
    assert_eq!(visible_ids(&list), ["T002", "T005"]);

    list.set_priority_filter(PriorityFilter::Only(Priority::Medium));
    assert_eq!(visible_ids(&list), ["T002", "T005"]);

    list.set_priority_filter(PriorityFilter::Only(Priority::High));
    assert!(visible_ids(&list).is_empty());

    list.set_filter(TransferFilter::new(
        "pending".parse().unwrap(),
        "high".parse().unwrap(),
        "dress",
    ));
    assert_eq!(visible_ids(&list), ["T003"]);
}

#[test]
fn select_all_pending_follows_the_filter() {
    let mut list = seeded();
    list.set_search("jacket");

    list.select_all_pending(true);
    assert_eq!(list.selection().iter().collect::<Vec<_>>(), ["T001"]);
    assert!(list.all_pending_selected());

    list.set_search("");
    assert!(!list.all_pending_selected(), "T003 is visible but not selected");

    list.select_all_pending(false);
    assert!(list.selection().is_empty());
}

#[test]
fn select_all_then_clear_returns_to_empty() {
    let mut list = seeded();
    list.select_all_pending(true);
    assert_eq!(list.selection().len(), 2);
    list.select_all_pending(false);
    assert!(list.selection().is_empty());
    assert_eq!(list.selected_savings(), 0);
}

#[test]
fn header_checkbox_is_off_without_visible_pending() {
    let mut list = seeded();
    list.set_status_filter(StatusFilter::Only(TransferStatus::Rejected));
    list.select_all_pending(true);
    assert!(list.selection().is_empty());
    assert!(!list.all_pending_selected());
}

#[test]
fn savings_only_count_visible_selection() {
    let mut list = seeded();
    list.select_all_pending(true);
    assert_eq!(list.selected_savings(), 1250 + 2100);

    list.set_search("summer");
    assert_eq!(list.selected_savings(), 2100);
    assert_eq!(list.selection().len(), 2, "filtering keeps the selection");
}

#[test]
fn savings_saturate_instead_of_overflowing() {
    let records = inv_transfers::seed::from_json(
        r#"[
            {"id":"B1","fromStore":"A","toStore":"B","sku":"K1","quantity":1,"priority":"High","costSaving":"$18,446,744,073,709,551,615"},
            {"id":"B2","fromStore":"A","toStore":"B","sku":"K2","quantity":1,"priority":"Low","costSaving":"$1"}
        ]"#,
    )
    .unwrap();
    let mut list = TransferList::new(records, Notifications::new()).unwrap();

    list.select_all_pending(true);
    assert_eq!(list.selection().len(), 2);
    assert_eq!(list.selected_savings(), u64::MAX);
}
