//! Results table rows
//!
//! Builds the Field/Value rows shown for one database tab.

use crate::messages::{CustomerRecord, DatabaseOutcome};

/// Placeholder for always-shown rows with no value
pub const NOT_AVAILABLE: &str = "N/A";

/// One Field/Value row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Rows for one database tab, or `None` when the database returned no record.
///
/// Customer Code, Database and Message are always present; the remaining
/// rows appear only for non-empty fields.
pub fn detail_rows(database: &str, outcome: &DatabaseOutcome) -> Option<Vec<DetailRow>> {
    let record = outcome.record.as_ref()?;

    let mut rows = vec![
        DetailRow::new("Customer Code", or_not_available(&record.customer_code)),
        DetailRow::new("Database", database),
        DetailRow::new("Message", or_not_available(&outcome.message)),
    ];

    rows.extend(
        optional_fields(record)
            .into_iter()
            .filter_map(|(label, value)| non_empty(value).map(|value| DetailRow::new(label, value))),
    );

    Some(rows)
}

fn optional_fields(record: &CustomerRecord) -> [(&'static str, &Option<String>); 8] {
    [
        ("Customer Name", &record.customer_name),
        ("Address", &record.customer_address),
        ("Email", &record.customer_email),
        ("Phone", &record.customer_phone),
        ("Contact Person", &record.customer_contact),
        ("Country", &record.customer_country_name),
        ("Currency", &record.customer_currency),
        ("VAT Number", &record.vat_reg_number),
    ]
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn or_not_available(value: &Option<String>) -> &str {
    non_empty(value).unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(rows: &[DetailRow]) -> Vec<&str> {
        rows.iter().map(|row| row.label).collect()
    }

    #[test]
    fn test_minimal_record() {
        let outcome = DatabaseOutcome::default()
            .with_message("ok")
            .with_record(CustomerRecord::with_code("C1"));

        let rows = detail_rows("DB1", &outcome).unwrap();
        assert_eq!(
            rows,
            vec![
                DetailRow::new("Customer Code", "C1"),
                DetailRow::new("Database", "DB1"),
                DetailRow::new("Message", "ok"),
            ]
        );
    }

    #[test]
    fn test_missing_code_and_message_show_placeholder() {
        let outcome = DatabaseOutcome::default().with_record(CustomerRecord {
            customer_code: Some(String::new()),
            ..CustomerRecord::default()
        });

        let rows = detail_rows("Finance", &outcome).unwrap();
        assert_eq!(rows[0].value, NOT_AVAILABLE);
        assert_eq!(rows[1].value, "Finance");
        assert_eq!(rows[2].value, NOT_AVAILABLE);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_full_record_row_order() {
        let record = CustomerRecord {
            customer_code: Some("C9".into()),
            customer_name: Some("Acme AB".into()),
            customer_address: Some("Storgatan 1, Lund".into()),
            customer_email: Some("billing@acme.example".into()),
            customer_phone: Some("+46 46 123 45".into()),
            customer_contact: Some("Eva Berg".into()),
            customer_country_name: Some("Sweden".into()),
            customer_currency: Some("SEK".into()),
            vat_reg_number: Some("SE556677889901".into()),
        };
        let outcome = DatabaseOutcome::default().with_message("updated").with_record(record);

        let rows = detail_rows("ERP", &outcome).unwrap();
        assert_eq!(
            labels(&rows),
            [
                "Customer Code",
                "Database",
                "Message",
                "Customer Name",
                "Address",
                "Email",
                "Phone",
                "Contact Person",
                "Country",
                "Currency",
                "VAT Number",
            ]
        );
        assert_eq!(rows[9].value, "SEK");
    }

    #[test]
    fn test_empty_optional_fields_are_omitted() {
        let record = CustomerRecord {
            customer_code: Some("C2".into()),
            customer_email: Some(String::new()),
            customer_country_name: Some("Norway".into()),
            ..CustomerRecord::default()
        };
        let outcome = DatabaseOutcome::default().with_record(record);

        let rows = detail_rows("DB2", &outcome).unwrap();
        assert_eq!(labels(&rows), ["Customer Code", "Database", "Message", "Country"]);
    }

    #[test]
    fn test_no_record_yields_none() {
        let outcome = DatabaseOutcome::default().with_message("skipped");
        assert!(detail_rows("DB3", &outcome).is_none());
    }
}
