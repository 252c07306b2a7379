//! Row ordering

use crate::NormalizedRecord;

/// Sort records by upper-cased name. The sort is stable, so records with the
/// same name keep their input order.
pub fn order(mut records: Vec<NormalizedRecord>) -> Vec<NormalizedRecord> {
    records.sort_by_cached_key(|r| r.name.to_uppercase());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordKey;
    use pretty_assertions::assert_eq;

    fn record(row: usize, name: &str) -> NormalizedRecord {
        NormalizedRecord {
            key: RecordKey::Static(row),
            name: name.to_string(),
            start_first: 0.0,
            end_first: 0.0,
            start_second: 0.0,
            end_second: 0.0,
        }
    }

    fn names(records: &[NormalizedRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn case_insensitive() {
        let ordered = order(vec![record(0, "Basil"), record(1, "apple")]);
        assert_eq!(names(&ordered), vec!["apple", "Basil"]);
    }

    #[test]
    fn stable_for_equal_names() {
        let ordered = order(vec![
            record(0, "leek"),
            record(1, "Carrot"),
            record(2, "LEEK"),
            record(3, "Leek"),
        ]);
        let keys: Vec<RecordKey> = ordered.iter().map(|r| r.key).collect();
        assert_eq!(
            keys,
            vec![
                RecordKey::Static(1),
                RecordKey::Static(0),
                RecordKey::Static(2),
                RecordKey::Static(3),
            ]
        );
    }

    #[test]
    fn idempotent() {
        let input = vec![
            record(0, "okra"),
            record(1, ""),
            record(2, "Bean"),
            record(3, "bean"),
        ];
        let once = order(input);
        let twice = order(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_name_sorts_first() {
        let ordered = order(vec![record(0, "Yam"), record(1, "")]);
        assert_eq!(names(&ordered), vec!["", "Yam"]);
    }
}
