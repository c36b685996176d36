use inv_notify::{Notifications, ToastReceiverExt, ToastVariant};
use inv_transfers::{
    CostSaving, Priority, TransferError, TransferList, TransferStatus, TransferSuggestion,
};

fn suggestion(id: &str, status: TransferStatus, saving: u64) -> TransferSuggestion {
    TransferSuggestion {
        id: id.to_owned(),
        from_store: "Seattle-Pike".to_owned(),
        from_store_id: "#089".to_owned(),
        to_store: "Portland-SW".to_owned(),
        to_store_id: "#156".to_owned(),
        sku: format!("SKU-{id}"),
        product_name: "Rain Jacket".to_owned(),
        quantity: 10,
        distance: "280 km".to_owned(),
        estimated_time: "4 hours".to_owned(),
        priority: Priority::High,
        status,
        reason: "Forecasted demand surge".to_owned(),
        cost_saving: CostSaving(saving),
    }
}

fn two_pending() -> (TransferList, Notifications) {
    let notifications = Notifications::new();
    let list = TransferList::new(
        vec![
            suggestion("T001", TransferStatus::Pending, 1250),
            suggestion("T002", TransferStatus::Pending, 890),
        ],
        notifications.clone(),
    )
    .expect("valid records");
    (list, notifications)
}

#[test]
fn bulk_approve_processes_the_whole_selection() {
    let (mut list, notifications) = two_pending();
    let mut rx = notifications.subscribe();

    list.toggle("T001");
    list.toggle("T002");
    assert_eq!(list.selected_savings(), 2140);

    assert_eq!(list.bulk_approve(), 2);
    assert!(list.selection().is_empty());
    assert!(list.records().iter().all(|t| t.status == TransferStatus::Approved));

    let toasts = rx.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Bulk Approval Complete");
    assert_eq!(toasts[0].description, "2 transfers have been approved");
    assert_eq!(toasts[0].variant, ToastVariant::Default);
}

#[test]
fn approve_is_idempotent() {
    let (mut list, notifications) = two_pending();

    assert!(list.approve("T001"));
    let after_once = list.records().to_vec();
    assert!(!list.approve("T001"));
    assert_eq!(list.records(), after_once.as_slice());

    assert_eq!(notifications.history_len(), 1);
    let toast = notifications.latest().expect("one toast");
    assert_eq!(toast.title, "Transfer Approved");
    assert_eq!(toast.description, "Transfer T001 has been approved successfully");
}

#[test]
fn reject_emits_destructive_toast_and_settles_record() {
    let (mut list, notifications) = two_pending();

    assert!(list.reject("T002"));
    assert_eq!(list.get("T002").map(|t| t.status), Some(TransferStatus::Rejected));
    assert!(!list.approve("T002"), "rejected records cannot be approved");
    assert!(!list.reject("T002"));

    let toast = notifications.latest().expect("toast emitted");
    assert!(toast.is_destructive());
    assert_eq!(toast.title, "Transfer Rejected");
    assert_eq!(toast.description, "Transfer T002 has been rejected");
    assert_eq!(notifications.history_len(), 1);
}

#[test]
fn unknown_ids_are_ignored() {
    let (mut list, notifications) = two_pending();

    assert!(!list.approve("T404"));
    assert!(!list.reject("T404"));
    assert!(!list.toggle("T404"));
    assert!(list.selection().is_empty());
    assert_eq!(notifications.history_len(), 0);
}

#[test]
fn settled_records_cannot_be_selected() {
    let notifications = Notifications::new();
    let mut list = TransferList::new(
        vec![
            suggestion("T001", TransferStatus::Pending, 100),
            suggestion("T002", TransferStatus::Approved, 200),
        ],
        notifications,
    )
    .unwrap();

    assert!(!list.toggle("T002"));
    assert!(list.toggle("T001"));
    assert_eq!(list.selection().iter().collect::<Vec<_>>(), ["T001"]);
}

#[test]
fn approving_a_selected_record_drops_it_from_selection() {
    let (mut list, _notifications) = two_pending();
    list.select_all_pending(true);
    assert!(list.all_pending_selected());

    list.approve("T001");
    assert!(!list.is_selected("T001"));
    assert!(list.is_selected("T002"));
    assert_eq!(list.selected_savings(), 890);
}

#[test]
fn bulk_approve_with_empty_selection_reports_zero() {
    let (mut list, notifications) = two_pending();

    assert_eq!(list.bulk_approve(), 0);
    assert_eq!(list.summary().pending, 2);
    let toast = notifications.latest().expect("summary toast");
    assert_eq!(toast.description, "0 transfers have been approved");
}

#[test]
fn bulk_approve_ignores_current_filter() {
    let (mut list, _notifications) = two_pending();
    list.select_all_pending(true);
    list.set_search("SKU-T001");

    assert_eq!(list.bulk_approve(), 2);
    assert_eq!(list.summary().approved, 2);
}

#[test]
fn summary_counts_statuses() {
    let list = TransferList::seeded(Notifications::new()).unwrap();
    let summary = list.summary();
    assert_eq!((summary.total, summary.approved, summary.pending, summary.rejected), (5, 2, 2, 1));
    assert_eq!(
        summary.to_string(),
        "Total Suggestions: 5  Approved: 2  Pending: 2  Rejected: 1"
    );
}

#[test]
fn export_lists_selected_records_in_seed_order() {
    let mut list = TransferList::seeded(Notifications::new()).unwrap();
    list.toggle("T003");
    list.toggle("T001");

    let ids: Vec<_> = list.export_selected().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["T001", "T003"]);

    let json: serde_json::Value =
        serde_json::from_str(&list.export_selected_json().unwrap()).unwrap();
    assert_eq!(json[0]["id"], "T001");
    assert_eq!(json[0]["costSaving"], "$1,250");
    assert_eq!(json[1]["productName"], "Summer Dress");
}

#[test]
fn duplicate_ids_are_rejected() {
    let result = TransferList::new(
        vec![
            suggestion("T001", TransferStatus::Pending, 1),
            suggestion("T001", TransferStatus::Approved, 2),
        ],
        Notifications::new(),
    );
    assert!(matches!(result, Err(TransferError::DuplicateId { .. })));
}

#[test]
fn zero_quantity_is_rejected() {
    let mut bad = suggestion("T001", TransferStatus::Pending, 1);
    bad.quantity = 0;
    let result = TransferList::new(vec![bad], Notifications::new());
    assert!(matches!(result, Err(TransferError::InvalidRecord { .. })));
}
