//! Differential tests: random operation scripts applied to both the real
//! array and the `Vec<i32>` reference model must agree step by step.

use dynarray::{ArrayError, DynamicArray};
use dynarray_test_utils::strategies::{arb_ops, arb_sorted_values, arb_values};
use dynarray_test_utils::{ModelArray, Op};
use proptest::prelude::*;

fn apply(arr: &mut DynamicArray, model: &mut ModelArray, op: &Op) -> Result<(), TestCaseError> {
    match *op {
        Op::Add(v) => {
            arr.add_element(v);
            model.add_element(v);
        }
        Op::Get(i) => {
            prop_assert_eq!(arr.get(i).ok(), model.get(i));
        }
        Op::Set(i, v) => {
            let ok = arr.set(i, v).is_ok();
            prop_assert_eq!(ok, model.set(i, v));
        }
        Op::RemoveIndex(i) => match arr.remove_index(i) {
            Ok(removed) => {
                prop_assert_eq!(Some(removed), model.remove_index(i));
            }
            Err(err) => {
                prop_assert_eq!(
                    err,
                    ArrayError::IndexOutOfRange {
                        index: i,
                        len: model.len()
                    }
                );
                prop_assert_eq!(model.remove_index(i), None);
            }
        },
        Op::RemoveElement(v) => {
            prop_assert_eq!(arr.remove_element(v), model.remove_element(v));
        }
        Op::Reverse => {
            arr.reverse();
            model.reverse();
        }
        Op::Sort => {
            arr.sort();
            model.sort();
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn scripts_match_model(capacity in 0i64..6, ops in arb_ops(64)) {
        let mut arr = DynamicArray::with_capacity(capacity).unwrap();
        let mut model = ModelArray::with_capacity(capacity as usize);
        for op in &ops {
            apply(&mut arr, &mut model, op)?;
            prop_assert_eq!(arr.as_slice(), model.values());
            prop_assert_eq!(arr.capacity(), model.capacity());
            prop_assert!(arr.len() <= arr.capacity());
        }
    }

    #[test]
    fn bulk_construction_matches_model(values in arb_values(32), ops in arb_ops(32)) {
        let mut arr = DynamicArray::from_slice(&values);
        let mut model = ModelArray::from_slice(&values);
        prop_assert_eq!(arr.capacity(), values.len());
        for op in &ops {
            apply(&mut arr, &mut model, op)?;
        }
        prop_assert_eq!(arr.as_slice(), model.values());
        prop_assert_eq!(arr.capacity(), model.capacity());
    }

    #[test]
    fn display_matches_model(values in arb_values(16)) {
        let arr = DynamicArray::from_slice(&values);
        prop_assert_eq!(arr.to_string(), ModelArray::from_slice(&values).render());
    }

    #[test]
    fn binary_search_lands_on_a_match(values in arb_sorted_values(32), key in -8i32..8) {
        let arr = DynamicArray::from_slice(&values);
        let model = ModelArray::from_slice(&values);
        let hits = model.indices_of(key);
        match arr.binary_search(key) {
            Some(index) => prop_assert!(hits.contains(&index)),
            None => prop_assert!(hits.is_empty()),
        }
    }

    #[test]
    fn failed_operations_leave_state_unchanged(values in arb_values(16), extra in 0usize..8) {
        let mut arr = DynamicArray::from_slice(&values);
        let before = arr.clone();
        let index = values.len() + extra;
        prop_assert!(arr.get(index).is_err());
        prop_assert!(arr.set(index, 1).is_err());
        prop_assert!(arr.remove_index(index).is_err());
        prop_assert_eq!(&arr, &before);
        prop_assert_eq!(arr.capacity(), before.capacity());
    }

    #[test]
    fn reverse_twice_is_identity(values in arb_values(32)) {
        let mut arr = DynamicArray::from_slice(&values);
        arr.reverse();
        arr.reverse();
        prop_assert_eq!(arr.as_slice(), values.as_slice());
    }
}
