//! Transaction history grouping by calendar date.

use crate::models::TransactionRecord;
use crate::utils::format::format_date_label;

/// Transactions sharing a calendar date, in their original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateGroup {
    pub date_label: String,
    pub transactions: Vec<TransactionRecord>,
}

/// Group transactions by calendar date.
///
/// Groups appear in the order their labels are first encountered scanning
/// the input; transactions inside a group keep their relative order. A
/// missing timestamp maps to the "Unknown Date" sentinel group.
pub fn group_by_date(transactions: &[TransactionRecord]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();

    for tx in transactions {
        let label = format_date_label(tx.timestamp_ms);
        match groups.iter_mut().find(|g| g.date_label == label) {
            Some(group) => group.transactions.push(tx.clone()),
            None => groups.push(DateGroup {
                date_label: label,
                transactions: vec![tx.clone()],
            }),
        }
    }

    groups
}
