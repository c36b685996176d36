use crate::render;
use anyhow::{Context, bail};
use inventra::features::transfers::{PriorityFilter, StatusFilter, TransferList, Transfers};
use inventra::notify::{Notifications, ToastReceiverExt};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Status(StatusFilter),
    Priority(PriorityFilter),
    Search(String),
    Toggle(String),
    SelectAll,
    SelectNone,
    Approve(String),
    Reject(String),
    BulkApprove,
    List,
    Summary,
    Savings,
    Export,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let id = || -> anyhow::Result<String> {
            if rest.is_empty() {
                bail!("'{verb}' needs a transfer id");
            }
            Ok(rest.to_owned())
        };

        Ok(match verb.to_ascii_lowercase().as_str() {
            "status" => Self::Status(rest.parse()?),
            "priority" => Self::Priority(rest.parse()?),
            "search" => Self::Search(rest.to_owned()),
            "toggle" => Self::Toggle(id()?),
            "select-all" => Self::SelectAll,
            "select-none" => Self::SelectNone,
            "approve" => Self::Approve(id()?),
            "reject" => Self::Reject(id()?),
            "bulk-approve" => Self::BulkApprove,
            "list" => Self::List,
            "summary" => Self::Summary,
            "savings" => Self::Savings,
            "export" => Self::Export,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command '{other}'"),
        })
    }
}

/// Runs commands from `input` until end of input or `quit`.
///
/// Every toast emitted by a command is printed right after it.
///
/// # Errors
/// Fails on I/O errors only; bad commands are reported and skipped.
pub fn run(
    input: impl BufRead,
    out: &mut impl Write,
    transfers: &Transfers,
    notifications: &Notifications,
) -> anyhow::Result<()> {
    let mut toasts = notifications.subscribe();

    for line in input.lines() {
        let line = line.context("Failed to read session input")?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(%line, "Rejected session command");
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        if command == SessionCommand::Quit {
            break;
        }

        execute(&command, &mut transfers.write(), out)?;
        for toast in toasts.drain() {
            writeln!(out, "{toast}")?;
        }
    }
    Ok(())
}

fn execute(command: &SessionCommand, list: &mut TransferList, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        SessionCommand::Status(status) => list.set_status_filter(*status),
        SessionCommand::Priority(priority) => list.set_priority_filter(*priority),
        SessionCommand::Search(term) => list.set_search(term.as_str()),
        SessionCommand::Toggle(id) => {
            let state = if list.toggle(id) { "selected" } else { "not selected" };
            writeln!(out, "{id} {state}")?;
        }
        SessionCommand::SelectAll => {
            list.select_all_pending(true);
            writeln!(out, "{} pending transfers selected", list.selection().len())?;
        }
        SessionCommand::SelectNone => list.select_all_pending(false),
        SessionCommand::Approve(id) => {
            if !list.approve(id) {
                writeln!(out, "{id} is not pending")?;
            }
        }
        SessionCommand::Reject(id) => {
            if !list.reject(id) {
                writeln!(out, "{id} is not pending")?;
            }
        }
        SessionCommand::BulkApprove => {
            list.bulk_approve();
        }
        SessionCommand::List => render::table(out, list)?,
        SessionCommand::Summary => render::summary(out, &list.summary())?,
        SessionCommand::Savings => render::savings(out, list)?,
        SessionCommand::Export => writeln!(out, "{}", list.export_selected_json()?)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}
