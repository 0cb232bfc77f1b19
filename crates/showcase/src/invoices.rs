//! Sample invoice records and a fake paginated endpoint for the showcase tables.

use serde::{Deserialize, Serialize};
use ui_kit::prelude::*;

const CUSTOMERS: [&str; 7] = [
    "Acme Corp",
    "Borealis Labs",
    "Cobalt Freight",
    "Delta Bakery",
    "evergreen studio",
    "Foxglove Health",
    "Granite & Co",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [Self; 3] = [Self::Paid, Self::Pending, Self::Overdue];

    pub fn token(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.token() == token)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            Self::Paid => BadgeVariant::Success,
            Self::Pending => BadgeVariant::Warning,
            Self::Overdue => BadgeVariant::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub customer: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub issued_on: String,
    pub notes: Option<String>,
}

impl TableRow for Invoice {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "customer" => self.customer.as_str().into(),
            "amount" => self.amount.into(),
            "status" => self.status.label().into(),
            "issued_on" => self.issued_on.as_str().into(),
            "notes" => self.notes.clone().into(),
            _ => CellValue::Null,
        }
    }
}

/// Deterministic invoice fixtures.
pub fn sample_invoices(count: usize) -> Vec<Invoice> {
    (0..count)
        .map(|index| {
            let status = match index % 5 {
                0 | 3 => InvoiceStatus::Paid,
                1 | 4 => InvoiceStatus::Pending,
                _ => InvoiceStatus::Overdue,
            };
            Invoice {
                id: 1001 + index as i64,
                customer: CUSTOMERS[index % CUSTOMERS.len()].to_string(),
                amount: ((index * 7919) % 4800) as f64 + 125.5,
                status,
                issued_on: format!("2026-{:02}-{:02}", 1 + index % 12, 1 + (index * 3) % 28),
                notes: (index % 4 == 0).then(|| format!("Net 30. Ref PO-{}", 4400 + index)),
            }
        })
        .collect()
}

/// One page of `all`, shaped like a paginated API response.
pub fn server_page(all: &[Invoice], page: usize, per_page: usize) -> (Vec<Invoice>, PaginationMeta) {
    let per_page = per_page.max(1);
    let last_page = all.len().div_ceil(per_page).max(1);
    let current_page = page.clamp(1, last_page);
    let rows = all
        .iter()
        .skip((current_page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect();
    let meta = PaginationMeta {
        current_page,
        last_page,
        per_page,
        total: all.len(),
    };
    (rows, meta)
}

/// Invoices whose customer or number contains `query`, ignoring case, narrowed to `status`.
pub fn filter_invoices(all: &[Invoice], query: &str, status: Option<InvoiceStatus>) -> Vec<Invoice> {
    let needle = query.trim().to_lowercase();
    all.iter()
        .filter(|invoice| status.map_or(true, |status| invoice.status == status))
        .filter(|invoice| {
            needle.is_empty()
                || invoice.customer.to_lowercase().contains(&needle)
                || invoice.id.to_string().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Validation message for the customer field of the draft form.
pub fn customer_error(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        Some("Customer is required".to_string())
    } else if name.chars().count() < 3 {
        Some("Use at least 3 characters".to_string())
    } else {
        None
    }
}

/// Formats an amount as dollars with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}
