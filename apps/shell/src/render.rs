use inventra::features::transfers::{CostSaving, TransferList, TransferSummary, TransferSuggestion};
use std::io::{self, Write};

pub fn table(out: &mut impl Write, list: &TransferList) -> io::Result<()> {
    writeln!(
        out,
        "{:<3} {:<5} {:<24} {:<40} {:>4} {:<7} {:<9} {:>8}",
        "", "ID", "Product", "Route", "Qty", "Prio", "Status", "Saving"
    )?;

    let mut shown = 0;
    for transfer in list.visible() {
        row(out, transfer, list.is_selected(&transfer.id))?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No transfers match the current filters")?;
    }
    writeln!(out, "{shown} of {} transfers shown", list.len())
}

fn row(out: &mut impl Write, transfer: &TransferSuggestion, selected: bool) -> io::Result<()> {
    let mark = match (transfer.status.is_pending(), selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, _) => "",
    };
    let product = format!("{} ({})", transfer.product_name, transfer.sku);
    let route = format!(
        "{} -> {}",
        store(&transfer.from_store, &transfer.from_store_id),
        store(&transfer.to_store, &transfer.to_store_id)
    );

    writeln!(
        out,
        "{mark:<3} {:<5} {product:<24} {route:<40} {:>4} {:<7} {:<9} {:>8}",
        transfer.id,
        transfer.quantity,
        transfer.priority.badge().label,
        transfer.status.badge().label,
        transfer.cost_saving.to_string(),
    )
}

fn store(name: &str, id: &str) -> String {
    if id.is_empty() { name.to_owned() } else { format!("{name} {id}") }
}

pub fn summary(out: &mut impl Write, summary: &TransferSummary) -> io::Result<()> {
    writeln!(out, "{summary}")
}

pub fn savings(out: &mut impl Write, list: &TransferList) -> io::Result<()> {
    writeln!(
        out,
        "{} selected, potential savings {}",
        list.selection().len(),
        CostSaving(list.selected_savings())
    )
}
