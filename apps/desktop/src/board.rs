use dioxus::prelude::*;
use inventra::features::transfers::{
    BadgeTone, CostSaving, PriorityFilter, StatusFilter, TransferList, TransferSuggestion,
    TransferSummary, Transfers,
};
use inventra::kernel::workspace::Workspace;
use inventra::notify::Toast;
use std::sync::Arc;

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }
.page { padding: 24px; display: flex; flex-direction: column; gap: 24px; }
.cards { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }
.card { background: white; border: 1px solid #e2e8f0; border-radius: 8px; padding: 16px; }
.card .value { font-size: 24px; font-weight: 700; }
.card .label { font-size: 14px; color: #475569; }
.toolbar { display: flex; gap: 12px; align-items: center; justify-content: space-between; }
.bulk { display: flex; justify-content: space-between; background: #eff6ff; padding: 12px; border-radius: 8px; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 12px 16px; font-size: 14px; }
tbody tr { border-top: 1px solid #f1f5f9; }
.muted { color: #64748b; }
.mono { font-family: ui-monospace, monospace; }
.saving { color: #16a34a; font-weight: 600; }
.badge { padding: 2px 8px; border-radius: 9999px; font-size: 12px; font-weight: 600; }
.tone-success { background: #dcfce7; color: #166534; }
.tone-danger { background: #fee2e2; color: #991b1b; }
.tone-warning { background: #fef9c3; color: #854d0e; }
.tone-destructive { background: #dc2626; color: white; }
.tone-secondary { background: #f1f5f9; color: #0f172a; }
.tone-outline { border: 1px solid #cbd5e1; }
.toasts { position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; }
.toast { background: white; border: 1px solid #e2e8f0; border-radius: 8px; padding: 12px 16px; min-width: 280px; }
.toast.destructive { background: #dc2626; color: white; }
";

const fn tone_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Success => "badge tone-success",
        BadgeTone::Danger => "badge tone-danger",
        BadgeTone::Warning => "badge tone-warning",
        BadgeTone::Destructive => "badge tone-destructive",
        BadgeTone::Secondary => "badge tone-secondary",
        BadgeTone::Outline => "badge tone-outline",
    }
}

/// Copyable handle passed to child components; every mutation bumps `revision`
/// so the board re-reads the list.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Board {
    transfers: CopyValue<Transfers>,
    revision: Signal<u64>,
}

impl Board {
    fn update(self, f: impl FnOnce(&mut TransferList)) {
        let transfers = self.transfers.cloned();
        f(&mut transfers.write());
        let mut revision = self.revision;
        *revision.write() += 1;
    }
}

#[component]
pub fn App() -> Element {
    let workspace = use_context::<Workspace>();
    let transfers = use_hook(|| workspace.get_slice::<Transfers>().cloned().map(CopyValue::new));

    rsx! {
        style { {STYLE} }
        {
            match transfers {
                Some(transfers) => rsx! { TransferBoard { transfers } },
                None => rsx! { p { class: "page muted", "The transfers page is disabled." } },
            }
        }
    }
}

#[component]
pub fn TransferBoard(transfers: CopyValue<Transfers>) -> Element {
    let workspace = use_context::<Workspace>();
    let revision = use_signal(|| 0_u64);
    let mut exported = use_signal(|| None::<String>);
    let board = Board { transfers, revision };

    // Subscribe to mutations.
    let _ = revision();

    let transfers = board.transfers.cloned();
    let list = transfers.read();
    let rows: Vec<(TransferSuggestion, bool)> =
        list.visible().map(|t| (t.clone(), list.is_selected(&t.id))).collect();
    let summary = list.summary();
    let all_selected = list.all_pending_selected();
    let selected = list.selection().len();
    let savings = CostSaving(list.selected_savings());
    let search = list.filter().search().to_owned();
    let status = list.filter().status.to_string();
    let priority = list.filter().priority.to_string();
    drop(list);

    let toasts = workspace.notifications.recent(3);

    rsx! {
        div { class: "page",
            SummaryCards { summary }

            div { class: "card",
                div { class: "toolbar",
                    h2 { "Transfer Suggestions" }
                    div { class: "toolbar",
                        input {
                            placeholder: "Search transfers...",
                            value: "{search}",
                            oninput: move |evt| board.update(|list| list.set_search(evt.value())),
                        }
                        select {
                            value: "{status}",
                            onchange: move |evt| {
                                if let Ok(filter) = evt.value().parse::<StatusFilter>() {
                                    board.update(|list| list.set_status_filter(filter));
                                }
                            },
                            option { value: "all", "All Status" }
                            option { value: "pending", "Pending" }
                            option { value: "approved", "Approved" }
                            option { value: "rejected", "Rejected" }
                        }
                        select {
                            value: "{priority}",
                            onchange: move |evt| {
                                if let Ok(filter) = evt.value().parse::<PriorityFilter>() {
                                    board.update(|list| list.set_priority_filter(filter));
                                }
                            },
                            option { value: "all", "All Priority" }
                            option { value: "high", "High" }
                            option { value: "medium", "Medium" }
                            option { value: "low", "Low" }
                        }
                    }
                }

                if selected > 0 {
                    div { class: "bulk",
                        span { "{selected} transfers selected • Potential savings: {savings}" }
                        div {
                            button {
                                onclick: move |_| board.update(|list| {
                                    list.bulk_approve();
                                }),
                                "Bulk Approve"
                            }
                            button {
                                onclick: move |_| {
                                    let json = board.transfers.cloned().read().export_selected_json();
                                    match json {
                                        Ok(json) => exported.set(Some(json)),
                                        Err(err) => tracing::error!(%err, "Export failed"),
                                    }
                                },
                                "Export Selected"
                            }
                        }
                    }
                }

                table {
                    thead {
                        tr {
                            th {
                                input {
                                    r#type: "checkbox",
                                    checked: all_selected,
                                    onclick: move |_| board.update(|list| list.select_all_pending(!all_selected)),
                                }
                            }
                            th { "ID" }
                            th { "From → To" }
                            th { "Product" }
                            th { "Quantity" }
                            th { "Distance" }
                            th { "Priority" }
                            th { "Status" }
                            th { "Savings" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for (transfer, checked) in rows {
                            TransferRow { key: "{transfer.id}", transfer, selected: checked, board }
                        }
                    }
                }
            }

            if let Some(json) = exported() {
                div { class: "card",
                    div { class: "toolbar",
                        h3 { "Selected transfers" }
                        button { onclick: move |_| exported.set(None), "Close" }
                    }
                    pre { class: "mono", "{json}" }
                }
            }
        }

        ToastStrip { toasts }
    }
}

#[component]
fn SummaryCards(summary: TransferSummary) -> Element {
    let cards = [
        ("Total Suggestions", summary.total),
        ("Approved", summary.approved),
        ("Pending", summary.pending),
        ("Rejected", summary.rejected),
    ];
    rsx! {
        div { class: "cards",
            for (label, value) in cards {
                div { class: "card",
                    div { class: "value", "{value}" }
                    div { class: "label", "{label}" }
                }
            }
        }
    }
}

#[component]
fn TransferRow(transfer: TransferSuggestion, selected: bool, board: Board) -> Element {
    let pending = transfer.status.is_pending();
    let status = transfer.status.badge();
    let priority = transfer.priority.badge();
    let (toggle_id, approve_id, reject_id) =
        (transfer.id.clone(), transfer.id.clone(), transfer.id.clone());

    rsx! {
        tr {
            td {
                input {
                    r#type: "checkbox",
                    checked: selected,
                    disabled: !pending,
                    onclick: move |_| board.update(|list| {
                        list.toggle(&toggle_id);
                    }),
                }
            }
            td { class: "mono", "{transfer.id}" }
            td {
                div { "{transfer.from_store} " span { class: "muted", "{transfer.from_store_id}" } }
                div { "→ {transfer.to_store} " span { class: "muted", "{transfer.to_store_id}" } }
            }
            td {
                div { "{transfer.product_name}" }
                div { class: "muted mono", "{transfer.sku}" }
            }
            td { "{transfer.quantity}" }
            td {
                div { "{transfer.distance}" }
                div { class: "muted", "{transfer.estimated_time}" }
            }
            td { span { class: tone_class(priority.tone), "{priority.label}" } }
            td { span { class: tone_class(status.tone), "{status.label}" } }
            td { class: "saving", "{transfer.cost_saving}" }
            td {
                if pending {
                    button {
                        onclick: move |_| board.update(|list| {
                            list.approve(&approve_id);
                        }),
                        "Approve"
                    }
                    button {
                        onclick: move |_| board.update(|list| {
                            list.reject(&reject_id);
                        }),
                        "Reject"
                    }
                }
            }
        }
    }
}

#[component]
fn ToastStrip(toasts: Vec<Arc<Toast>>) -> Element {
    rsx! {
        div { class: "toasts",
            for toast in toasts {
                div {
                    key: "{toast.seq}",
                    class: if toast.is_destructive() { "toast destructive" } else { "toast" },
                    strong { "{toast.title}" }
                    div { "{toast.description}" }
                }
            }
        }
    }
}
