use crate::format::format_cell;
use trackdeck_types::{Column, Record};

/// Keep the records whose projected columns contain the search term.
///
/// A blank term is the identity. Otherwise a record survives when at least
/// one projected column's formatted value contains the trimmed term,
/// case-insensitively. Original order is preserved and inputs are untouched.
pub fn filter_records<'a>(records: &'a [Record], columns: &[Column], term: &str) -> Vec<&'a Record> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return records.iter().collect();
    }

    let needle = trimmed.to_lowercase();
    records
        .iter()
        .filter(|record| {
            columns
                .iter()
                .any(|column| format_cell(record.get(column.key)).to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[Column] = &[
        Column {
            key: "company",
            label: "Company",
        },
        Column {
            key: "status",
            label: "Status",
        },
    ];

    fn job(id: i64, company: &str, status: &str) -> Record {
        Record::new()
            .with("id", id)
            .with("company", company)
            .with("status", status)
    }

    #[test]
    fn blank_term_is_identity() {
        let records = vec![job(1, "Acme", "applied"), job(2, "Globex", "offer")];

        let filtered = filter_records(&records, COLUMNS, "");
        assert_eq!(filtered.len(), 2);
        assert!(std::ptr::eq(filtered[0], &records[0]));
        assert!(std::ptr::eq(filtered[1], &records[1]));

        let filtered = filter_records(&records, COLUMNS, "   ");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn any_projected_column_can_match() {
        let records = vec![
            job(1, "Google", "applied"),
            job(2, "Acme", "interview"),
            job(3, "Initech", "Offer from Google recruiter"),
        ];

        let filtered = filter_records(&records, COLUMNS, "google");
        let ids: Vec<_> = filtered.iter().map(|r| r.id().unwrap().to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn unprojected_fields_do_not_match() {
        let records = vec![job(1, "Acme", "applied").with("notes", "met at Google booth")];

        assert!(filter_records(&records, COLUMNS, "google").is_empty());
    }

    #[test]
    fn formatted_values_are_searched() {
        const PROJECT_COLUMNS: &[Column] = &[
            Column {
                key: "active",
                label: "Active",
            },
            Column {
                key: "tech_stack",
                label: "Tech Stack",
            },
        ];

        let records = vec![
            Record::new().with("id", 1i64).with("active", true).with(
                "tech_stack",
                vec!["rust".to_string(), "postgres".to_string()],
            ),
            Record::new().with("id", 2i64).with("active", false),
        ];

        // Booleans are formatted to Yes/No before matching.
        let yes: Vec<_> = filter_records(&records, PROJECT_COLUMNS, "yes");
        assert_eq!(yes.len(), 1);
        assert_eq!(yes[0].id().unwrap().to_string(), "1");

        // Lists are formatted with ", " joins before matching.
        let joined = filter_records(&records, PROJECT_COLUMNS, "rust, post");
        assert_eq!(joined.len(), 1);
    }

    #[test]
    fn order_is_preserved() {
        let records = vec![
            job(3, "Acme Labs", "applied"),
            job(1, "Acme Corp", "offer"),
            job(2, "Acme West", "applied"),
        ];

        let filtered = filter_records(&records, COLUMNS, "acme");
        let ids: Vec<_> = filtered.iter().map(|r| r.id().unwrap().to_string()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
