//! Record filtering for the operations console.
//!
//! Pure functions over slices of records. The console applies the date
//! filter first; when no record matches the given date the date filter is
//! dropped entirely and all records are considered. This is a graceful
//! fallback, not a date-range query.

use crate::entities::OperationalRecord;
use crate::enums::StatusBucket;
use chrono::NaiveDate;

/// Case-insensitive substring match over the searchable fields of a record:
/// contact name, phone, record id, and slot text. An empty or
/// whitespace-only query matches every record.
pub fn record_matches_query(record: &OperationalRecord, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    record.contact_name.to_lowercase().contains(&query)
        || record.phone.to_lowercase().contains(&query)
        || record.record_id.to_lowercase().contains(&query)
        || record.slot.to_lowercase().contains(&query)
}

/// Filter records by date, free-text query, and status bucket.
///
/// Order matters: the date filter narrows the candidate set first, with
/// fallback to the full set when it matches nothing; query and bucket are
/// then ANDed over the candidates.
pub fn filter_records<'a>(
    records: &'a [OperationalRecord],
    query: &str,
    bucket: Option<StatusBucket>,
    date: Option<NaiveDate>,
) -> Vec<&'a OperationalRecord> {
    let by_date: Vec<&OperationalRecord> = match date {
        Some(date) => {
            let matched: Vec<&OperationalRecord> =
                records.iter().filter(|r| r.date == date).collect();
            if matched.is_empty() {
                records.iter().collect()
            } else {
                matched
            }
        }
        None => records.iter().collect(),
    };

    by_date
        .into_iter()
        .filter(|r| record_matches_query(r, query))
        .filter(|r| bucket.map_or(true, |b| r.status.bucket() == b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Percent;
    use crate::enums::RecordStatus;

    fn sample_record(
        id: &str,
        name: &str,
        date: NaiveDate,
        status: RecordStatus,
    ) -> OperationalRecord {
        OperationalRecord {
            record_id: id.to_string(),
            contact_name: name.to_string(),
            phone: "+44 7700 900123".to_string(),
            slot: "Thu 14:30 follow-up".to_string(),
            date,
            status,
            risk_score: Percent::new_const(20),
            timeline: vec![],
            notes: vec![],
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn empty_query_matches_all() {
        let record = sample_record("APT-001", "Priya Sharma", day(2), RecordStatus::Confirmed);
        assert!(record_matches_query(&record, ""));
        assert!(record_matches_query(&record, "   "));
    }

    #[test]
    fn query_is_case_insensitive_over_all_fields() {
        let record = sample_record("APT-001", "Priya Sharma", day(2), RecordStatus::Confirmed);
        assert!(record_matches_query(&record, "priya"));
        assert!(record_matches_query(&record, "apt-001"));
        assert!(record_matches_query(&record, "7700"));
        assert!(record_matches_query(&record, "FOLLOW-UP"));
        assert!(!record_matches_query(&record, "nonexistent"));
    }

    #[test]
    fn bucket_and_query_are_anded() {
        let records = vec![
            sample_record("APT-001", "Priya Sharma", day(2), RecordStatus::Confirmed),
            sample_record("APT-002", "Priya Patel", day(2), RecordStatus::Escalated),
            sample_record("APT-003", "Marcus Webb", day(2), RecordStatus::Confirmed),
        ];

        let hits = filter_records(&records, "priya", Some(StatusBucket::Resolved), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record_id, "APT-001");
    }

    #[test]
    fn date_filter_narrows_when_it_matches() {
        let records = vec![
            sample_record("APT-001", "Priya Sharma", day(2), RecordStatus::Confirmed),
            sample_record("APT-002", "Lena Moss", day(3), RecordStatus::Pending),
        ];

        let hits = filter_records(&records, "", None, Some(day(3)));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record_id, "APT-002");
    }

    #[test]
    fn date_filter_falls_back_to_full_list_on_zero_matches() {
        let records = vec![
            sample_record("APT-001", "Priya Sharma", day(2), RecordStatus::Confirmed),
            sample_record("APT-002", "Lena Moss", day(3), RecordStatus::Pending),
        ];

        let hits = filter_records(&records, "", None, Some(day(25)));
        assert_eq!(hits.len(), records.len());
    }

    #[test]
    fn fallback_still_applies_query_and_bucket() {
        let records = vec![
            sample_record("APT-001", "Priya Sharma", day(2), RecordStatus::Confirmed),
            sample_record("APT-002", "Lena Moss", day(3), RecordStatus::Pending),
        ];

        let hits = filter_records(&records, "moss", Some(StatusBucket::Pending), Some(day(25)));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record_id, "APT-002");
    }

    #[test]
    fn garbage_query_yields_empty_not_error() {
        let records = vec![sample_record(
            "APT-001",
            "Priya Sharma",
            day(2),
            RecordStatus::Confirmed,
        )];
        let hits = filter_records(&records, "@@##$$", None, None);
        assert!(hits.is_empty());
    }
}
