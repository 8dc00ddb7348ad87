//! Stage two: ProcessDirect call graph over an extraction report.
//!
//! ProcessDirect addresses are logical queue names local to a tenant. A
//! sender adapter whose address matches a receiver adapter's address means
//! the sender's flow calls the receiver's flow.

use crate::core::{CALLED_BY_COLUMN, CALLS_COLUMN, PROCESS_DIRECT, RECEIVER, SENDER};
use crate::errors::{AsisError, Result};
use crate::io::csv::Table;
use std::collections::HashMap;

const LINK_SEPARATOR: &str = ", ";

/// Normalize a ProcessDirect address for matching.
///
/// Trims whitespace, strips at most one trailing `/`, lowercases.
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    trimmed
        .strip_suffix('/')
        .unwrap_or(trimmed)
        .to_lowercase()
}

/// Column positions the linker reads and writes.
#[derive(Debug, Clone, Copy)]
struct LinkColumns {
    uid: usize,
    adapter_type: usize,
    direction: usize,
    address: usize,
    calls: usize,
    called_by: usize,
}

impl LinkColumns {
    fn resolve(table: &Table) -> Result<Self> {
        let required = |name: &str| {
            table
                .column(name)
                .ok_or_else(|| AsisError::validation(format!("missing required column '{name}'")))
        };

        Ok(Self {
            uid: required("UID")?,
            adapter_type: required("AdapterType")?,
            direction: required("AdapterDirection")?,
            address: required("AdapterAddress")?,
            calls: required(CALLS_COLUMN)?,
            called_by: required(CALLED_BY_COLUMN)?,
        })
    }
}

/// A resolved sender → receiver relationship, by row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallEdge {
    pub sender_row: usize,
    pub receiver_row: usize,
}

/// Summary of a linking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSummary {
    pub receivers: usize,
    pub edges: usize,
}

/// Populate `CallsIflow` / `IsCalledByIflow` in place.
///
/// Appends the link columns when the table lacks them. When several
/// receivers share a normalized address the last one wins.
pub fn link_calls(table: &mut Table) -> Result<LinkSummary> {
    table.ensure_column(CALLS_COLUMN);
    table.ensure_column(CALLED_BY_COLUMN);
    let cols = LinkColumns::resolve(table)?;

    let receivers = receiver_index(table, &cols);
    let edges = find_edges(table, &cols, &receivers);

    for edge in &edges {
        let sender_uid = table.rows[edge.sender_row][cols.uid].clone();
        let receiver_uid = table.rows[edge.receiver_row][cols.uid].clone();

        append_link(&mut table.rows[edge.sender_row][cols.calls], &receiver_uid);
        append_link(&mut table.rows[edge.receiver_row][cols.called_by], &sender_uid);
    }

    log::info!(
        "Linked {} ProcessDirect calls across {} receiver addresses",
        edges.len(),
        receivers.len()
    );

    Ok(LinkSummary {
        receivers: receivers.len(),
        edges: edges.len(),
    })
}

fn is_process_direct(row: &[String], cols: &LinkColumns, direction: &str) -> bool {
    row[cols.adapter_type] == PROCESS_DIRECT && row[cols.direction] == direction
}

/// Normalized receiver address → row index.
fn receiver_index(table: &Table, cols: &LinkColumns) -> HashMap<String, usize> {
    let mut receivers = HashMap::new();
    for (index, row) in table.rows.iter().enumerate() {
        if !is_process_direct(row, cols, RECEIVER) {
            continue;
        }
        let address = normalize_address(&row[cols.address]);
        if address.is_empty() {
            continue;
        }
        if let Some(previous) = receivers.insert(address, index) {
            log::warn!(
                "Receiver {} shadows receiver {} for the same ProcessDirect address",
                row[cols.uid],
                table.rows[previous][cols.uid]
            );
        }
    }
    receivers
}

fn find_edges(
    table: &Table,
    cols: &LinkColumns,
    receivers: &HashMap<String, usize>,
) -> Vec<CallEdge> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| is_process_direct(row, cols, SENDER))
        .filter_map(|(sender_row, row)| {
            receivers
                .get(&normalize_address(&row[cols.address]))
                .map(|&receiver_row| CallEdge {
                    sender_row,
                    receiver_row,
                })
        })
        .collect()
}

fn append_link(cell: &mut String, uid: &str) {
    if !cell.is_empty() {
        cell.push_str(LINK_SEPARATOR);
    }
    cell.push_str(uid);
}
