use inv_notify::{Notifications, NotifyError, Toast, ToastReceiverExt, ToastVariant};

#[tokio::test]
async fn test_toast_flow() {
    let center = Notifications::new();
    let mut rx = center.subscribe();

    let delivered = center.notify(Toast::success("Transfer Approved", "Transfer T001"));
    assert_eq!(delivered, 1);

    let received = rx.next_toast().await.unwrap();
    assert_eq!(received.title, "Transfer Approved");
    assert_eq!(received.seq, 1);
    assert_eq!(received.variant, ToastVariant::Default);
}

#[tokio::test]
async fn test_receiver_lagged_recovery() {
    let center = Notifications::with_capacity(2, 8).unwrap();
    let mut rx = center.subscribe();

    for i in 0..10 {
        center.notify(Toast::success("tick", i.to_string()));
    }

    let first = rx.next_toast().await.expect("should recover from lag");
    assert!(first.seq >= 9, "expected the retained tail, got seq {}", first.seq);
    let second = rx.next_toast().await.unwrap();
    assert_eq!(second.seq, first.seq + 1);
}

#[test]
fn drain_collects_queued_toasts_in_order() {
    let center = Notifications::new();
    let mut rx = center.subscribe();

    center.notify(Toast::success("a", "first"));
    center.notify(Toast::destructive("b", "second"));

    let toasts = rx.drain();
    assert_eq!(toasts.iter().map(|t| t.seq).collect::<Vec<_>>(), vec![1, 2]);
    assert!(toasts[1].is_destructive());
    assert!(rx.drain().is_empty());
}

#[test]
fn history_is_bounded_and_evicts_oldest() {
    let center = Notifications::with_capacity(8, 3).unwrap();
    for i in 1..=5 {
        center.notify(Toast::success("n", format!("{i}")));
    }

    assert_eq!(center.history_len(), 3);
    let recent = center.recent(10);
    assert_eq!(recent.iter().map(|t| t.description.as_str()).collect::<Vec<_>>(), ["3", "4", "5"]);
    assert_eq!(center.recent(1)[0].description, "5");
    assert_eq!(center.latest().unwrap().seq, 5);

    center.clear_history();
    assert_eq!(center.history_len(), 0);
    assert!(center.latest().is_none());
}

#[test]
fn clones_share_one_center() {
    let center = Notifications::new();
    let clone = center.clone();
    let _rx = center.subscribe();

    assert_eq!(clone.subscriber_count(), 1);
    clone.notify(Toast::success("shared", "via clone"));
    assert_eq!(center.history_len(), 1);
}

#[test]
fn zero_capacity_is_rejected() {
    assert!(matches!(
        Notifications::with_capacity(0, 4),
        Err(NotifyError::InvalidCapacity { .. })
    ));
    assert!(matches!(
        Notifications::with_capacity(4, 0),
        Err(NotifyError::InvalidCapacity { .. })
    ));
}

#[test]
fn toast_serializes_camel_case() {
    let toast = Toast::destructive("Transfer Rejected", "Transfer T003 has been rejected");
    let value = serde_json::to_value(&toast).unwrap();
    assert_eq!(value["variant"], "destructive");
    assert_eq!(value["title"], "Transfer Rejected");
    assert_eq!(toast.to_string(), "✖ Transfer Rejected: Transfer T003 has been rejected");
}

#[test]
fn concurrent_notifiers_keep_sequence_order() {
    let center = Notifications::with_capacity(1024, 1024).unwrap();
    let mut rx = center.subscribe();

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let center = center.clone();
            scope.spawn(move || {
                for n in 0..100 {
                    center.notify(Toast::success("Transfer Approved", format!("{worker}-{n}")));
                }
            });
        }
    });

    let history: Vec<u64> = center.recent(1024).iter().map(|t| t.seq).collect();
    assert_eq!(history, (1..=800).collect::<Vec<_>>());

    let received: Vec<u64> = rx.drain().iter().map(|t| t.seq).collect();
    assert_eq!(received, history);
}
