//! Grouping engine.
//!
//! # Responsibility
//! - Partition a record slice into keyed buckets for one axis mapping.
//! - Remember which bucket every input record landed in, so multi-axis
//!   builders can address cells without re-extracting keys.
//!
//! # Invariants
//! - Every input record lands in exactly one bucket.
//! - Buckets start in first-seen order; `sort` only reorders, never regroups.
//! - Records keep input order inside a bucket.

use crate::config::BucketOrder;
use crate::model::axis::{AxisKind, AxisMapping};
use crate::model::record::Record;
use crate::projection::extract::{
    extract_at, month_index, FACET_MONTH, PRIORITY_TIERS, UNKNOWN_KEY,
};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One keyed group of borrowed records.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<'a> {
    pub key: String,
    pub records: Vec<&'a Record>,
}

/// Buckets for one mapping plus the per-record bucket assignment.
#[derive(Debug, Clone)]
pub struct Grouping<'a> {
    mapping: AxisMapping,
    buckets: Vec<Bucket<'a>>,
    /// `assignments[i]` is the bucket index of `records[i]`.
    assignments: Vec<usize>,
}

impl<'a> Grouping<'a> {
    /// Groups `records` on `mapping` in one pass.
    pub fn build(records: &'a [Record], mapping: &AxisMapping, today: NaiveDate) -> Self {
        let mut buckets: Vec<Bucket<'a>> = Vec::new();
        let mut index_by_key: HashMap<String, usize> = HashMap::new();
        let mut assignments = Vec::with_capacity(records.len());

        for record in records {
            let key = extract_at(record, mapping, today);
            let index = match index_by_key.get(key.as_str()) {
                Some(&index) => index,
                None => {
                    let index = buckets.len();
                    index_by_key.insert(key.clone(), index);
                    buckets.push(Bucket {
                        key,
                        records: Vec::new(),
                    });
                    index
                }
            };
            buckets[index].records.push(record);
            assignments.push(index);
        }

        Self {
            mapping: mapping.clone(),
            buckets,
            assignments,
        }
    }

    pub fn mapping(&self) -> &AxisMapping {
        &self.mapping
    }

    pub fn buckets(&self) -> &[Bucket<'a>] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<Bucket<'a>> {
        self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bucket keys in current bucket order.
    pub fn keys(&self) -> Vec<String> {
        self.buckets.iter().map(|bucket| bucket.key.clone()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&Bucket<'a>> {
        self.buckets.iter().find(|bucket| bucket.key == key)
    }

    /// Bucket index of the record at `record_index` in the grouped slice.
    pub(crate) fn bucket_of(&self, record_index: usize) -> usize {
        self.assignments[record_index]
    }

    /// Reorders buckets under `order` and remaps record assignments.
    pub fn sort(&mut self, order: BucketOrder) {
        let mut permutation: Vec<usize> = (0..self.buckets.len()).collect();
        match order {
            BucketOrder::FirstSeen => return,
            BucketOrder::Lexical => permutation
                .sort_by(|&a, &b| self.buckets[a].key.cmp(&self.buckets[b].key)),
            BucketOrder::Natural => permutation.sort_by(|&a, &b| {
                compare_natural(&self.mapping, &self.buckets[a].key, &self.buckets[b].key)
            }),
        }

        let mut new_index = vec![0; permutation.len()];
        for (position, &old) in permutation.iter().enumerate() {
            new_index[old] = position;
        }

        let mut slots: Vec<Option<Bucket<'a>>> = self.buckets.drain(..).map(Some).collect();
        self.buckets = permutation
            .iter()
            .filter_map(|&old| slots[old].take())
            .collect();
        for assignment in &mut self.assignments {
            *assignment = new_index[*assignment];
        }
    }
}

/// Groups `records` on `mapping`, buckets in first-seen order.
pub fn group_by<'a>(records: &'a [Record], mapping: &AxisMapping) -> Vec<Bucket<'a>> {
    group_by_at(records, mapping, chrono::Local::now().date_naive())
}

/// Same as `group_by` with an explicit fallback date.
pub fn group_by_at<'a>(
    records: &'a [Record],
    mapping: &AxisMapping,
    today: NaiveDate,
) -> Vec<Bucket<'a>> {
    Grouping::build(records, mapping, today).into_buckets()
}

/// Domain order: `Unknown` last, then axis ordinal, then byte-wise.
fn compare_natural(mapping: &AxisMapping, a: &str, b: &str) -> Ordering {
    let rank = |key: &str| -> (bool, Option<i64>) {
        let ordinal = match (mapping.axis, mapping.facet.as_str()) {
            (AxisKind::Time, FACET_MONTH) => month_index(key).map(|index| index as i64),
            (AxisKind::Time, _) => key.parse::<i64>().ok(),
            (AxisKind::Hierarchy, _) => PRIORITY_TIERS
                .iter()
                .position(|tier| *tier == key)
                .map(|index| index as i64),
            _ => None,
        };
        (key == UNKNOWN_KEY, ordinal)
    };

    let (a_unknown, a_ordinal) = rank(a);
    let (b_unknown, b_ordinal) = rank(b);
    a_unknown
        .cmp(&b_unknown)
        .then_with(|| match (a_ordinal, b_ordinal) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::{group_by_at, Grouping};
    use crate::config::BucketOrder;
    use crate::model::axis::{AxisKind, AxisMapping, Plane};
    use crate::model::record::Record;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 1).expect("valid date")
    }

    fn status_mapping() -> AxisMapping {
        AxisMapping::new(Plane::X, AxisKind::Category, "status")
    }

    #[test]
    fn groups_in_first_seen_order() {
        let records = vec![
            Record::new("1").status("B"),
            Record::new("2").status("A"),
            Record::new("3").status("B"),
        ];

        let buckets = group_by_at(&records, &status_mapping(), today());

        let keys: Vec<&str> = buckets.iter().map(|bucket| bucket.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(buckets[0].records.len(), 2);
        assert_eq!(buckets[0].records[0].name, "1");
        assert_eq!(buckets[0].records[1].name, "3");
    }

    #[test]
    fn missing_values_share_the_unknown_bucket() {
        let records = vec![Record::new("1"), Record::new("2").status("A"), Record::new("3")];

        let grouping = Grouping::build(&records, &status_mapping(), today());

        assert_eq!(grouping.keys(), vec!["Unknown", "A"]);
        assert_eq!(grouping.get("Unknown").map(|b| b.records.len()), Some(2));
        assert_eq!(grouping.bucket_of(2), 0);
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        let records: Vec<Record> = Vec::new();
        let grouping = Grouping::build(&records, &status_mapping(), today());
        assert!(grouping.is_empty());
    }

    #[test]
    fn lexical_sort_remaps_assignments() {
        let records = vec![
            Record::new("1").status("C"),
            Record::new("2").status("A"),
            Record::new("3").status("B"),
        ];
        let mut grouping = Grouping::build(&records, &status_mapping(), today());

        grouping.sort(BucketOrder::Lexical);

        assert_eq!(grouping.keys(), vec!["A", "B", "C"]);
        assert_eq!(grouping.bucket_of(0), 2);
        assert_eq!(grouping.bucket_of(1), 0);
        assert_eq!(grouping.bucket_of(2), 1);
    }

    #[test]
    fn natural_sort_follows_domain_order() {
        let months = vec![
            Record::new("1").created_at("2024-10-01"),
            Record::new("2").created_at("2024-02-01"),
            Record::new("3").created_at("2024-07-01"),
        ];
        let mut by_month = Grouping::build(
            &months,
            &AxisMapping::new(Plane::Y, AxisKind::Time, "month"),
            today(),
        );
        by_month.sort(BucketOrder::Natural);
        assert_eq!(by_month.keys(), vec!["February", "July", "October"]);

        let priorities = vec![
            Record::new("1").priority(0.0),
            Record::new("2").priority(1.0),
            Record::new("3").priority(3.0),
        ];
        let mut by_priority = Grouping::build(
            &priorities,
            &AxisMapping::new(Plane::Y, AxisKind::Hierarchy, "priority"),
            today(),
        );
        by_priority.sort(BucketOrder::Natural);
        assert_eq!(by_priority.keys(), vec!["High", "Low", "None"]);

        let places = vec![
            Record::new("1"),
            Record::new("2").location("Zurich"),
            Record::new("3").location("Athens"),
        ];
        let mut by_place = Grouping::build(
            &places,
            &AxisMapping::new(Plane::X, AxisKind::Location, "city"),
            today(),
        );
        by_place.sort(BucketOrder::Natural);
        assert_eq!(by_place.keys(), vec!["Athens", "Zurich", "Unknown"]);
    }
}
