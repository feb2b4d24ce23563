use proptest::prelude::*;
use splist_core::{Entry, OperationKind, SparseEntryList, SplistError};

const DIM: usize = 6;

fn cells() -> impl Strategy<Value = Vec<(usize, usize, i64)>> {
    prop::collection::vec((0..DIM, 0..DIM, -50i64..50), 0..24)
}

fn matrix() -> impl Strategy<Value = SparseEntryList> {
    cells().prop_map(|cells| SparseEntryList::from_entries(DIM, DIM, cells))
}

fn sorted(list: &SparseEntryList) -> Vec<Entry> {
    let mut entries: Vec<Entry> = list.iter().collect();
    entries.sort_unstable_by_key(|entry| (entry.row, entry.col));
    entries
}

proptest! {
    #[test]
    fn set_then_get(mut list in matrix(), row in 0..DIM, col in 0..DIM, value in any::<i64>()) {
        list.set_element(row, col, value);
        prop_assert_eq!(list.get_element(row, col), value);
        if value == 0 {
            prop_assert!(list.iter().all(|entry| !entry.is_at(row, col)));
        }
    }

    #[test]
    fn set_is_idempotent(list in matrix(), row in 0..DIM, col in 0..DIM, value in -3i64..3) {
        let mut once = list.clone();
        once.set_element(row, col, value);
        let mut twice = list;
        twice.set_element(row, col, value);
        twice.set_element(row, col, value);
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn len_matches_iteration(ops in cells()) {
        let mut list = SparseEntryList::new(DIM, DIM);
        for (row, col, value) in ops {
            list.set_element(row, col, value);
            prop_assert_eq!(list.len(), list.iter().count());
            prop_assert!(list.iter().all(|entry| entry.value != 0));
        }
        let mut seen: Vec<(usize, usize)> = list.iter().map(|e| (e.row, e.col)).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), list.len());
    }

    #[test]
    fn add_is_commutative(a in matrix(), b in matrix()) {
        let ab = a.add(&b).unwrap();
        let ba = b.add(&a).unwrap();
        prop_assert_eq!(sorted(&ab), sorted(&ba));
    }

    #[test]
    fn add_matches_cellwise_sum(a in matrix(), b in matrix()) {
        let sum = a.add(&b).unwrap();
        for row in 0..DIM {
            for col in 0..DIM {
                prop_assert_eq!(
                    sum.get_element(row, col),
                    a.get_element(row, col) + b.get_element(row, col)
                );
            }
        }
    }

    #[test]
    fn subtract_self_is_empty(a in matrix()) {
        let diff = a.subtract(&a).unwrap();
        prop_assert!(diff.is_empty());
        prop_assert_eq!(diff.dimensions(), a.dimensions());
    }

    #[test]
    fn multiply_matches_dense_product(a in matrix(), b in matrix()) {
        let product = a.multiply(&b).unwrap();
        for row in 0..DIM {
            for col in 0..DIM {
                let expected: i64 = (0..DIM)
                    .map(|k| a.get_element(row, k) * b.get_element(k, col))
                    .sum();
                prop_assert_eq!(product.get_element(row, col), expected);
            }
        }
    }

    #[test]
    fn multiply_rejects_incompatible(rows in 1usize..5, inner in 1usize..5, other in 1usize..5) {
        prop_assume!(inner != other);
        let a = SparseEntryList::new(rows, inner);
        let b = SparseEntryList::new(other, rows);
        prop_assert_eq!(
            a.multiply(&b),
            Err(SplistError::DimensionMismatch(OperationKind::Multiplication))
        );
    }

    #[test]
    fn add_subtract_reject_mismatch(
        r1 in 0usize..5,
        c1 in 0usize..5,
        r2 in 0usize..5,
        c2 in 0usize..5
    ) {
        prop_assume!((r1, c1) != (r2, c2));
        let a = SparseEntryList::new(r1, c1);
        let b = SparseEntryList::new(r2, c2);
        prop_assert_eq!(a.add(&b), Err(SplistError::DimensionMismatch(OperationKind::Addition)));
        prop_assert_eq!(
            a.subtract(&b),
            Err(SplistError::DimensionMismatch(OperationKind::Subtraction))
        );
    }

    #[test]
    fn text_round_trip(a in matrix()) {
        let reloaded: SparseEntryList = a.to_string().parse().unwrap();
        prop_assert_eq!(reloaded.dimensions(), a.dimensions());
        prop_assert_eq!(sorted(&reloaded), sorted(&a));
    }
}

#[test]
fn malformed_inputs_are_format_errors() {
    let cases = [
        "rows=2\n",
        "rows=two\ncols=2\n",
        "rows=2\ncols=2\n(1,2)\n",
        "rows=2\ncols=2\n1,2,3\n",
    ];
    for source in cases {
        assert_eq!(SparseEntryList::from_source(source), Err(SplistError::Format));
    }
}
