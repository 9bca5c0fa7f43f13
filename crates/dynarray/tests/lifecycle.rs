use dynarray::{ArrayConfig, ArrayError, ArrayMetrics, DynamicArray};

#[test]
fn construct_fill_sort_render() {
    let mut arr = DynamicArray::with_capacity(50).unwrap();
    for v in [3, 99, 278, -14] {
        arr.add_element(v);
    }
    let by_index: Vec<i32> = (0..arr.len()).map(|i| arr.get(i).unwrap()).collect();
    assert_eq!(by_index, vec![3, 99, 278, -14]);

    arr.sort();
    assert_eq!(arr.to_string(), "[-14, 3, 99, 278]");
    assert_eq!(arr.capacity(), 50);
}

#[test]
fn growth_is_amortised_doubling() {
    let mut arr = DynamicArray::with_capacity(1).unwrap();
    for v in 0..1024 {
        arr.add_element(v);
    }
    assert_eq!(arr.capacity(), 1024);
    // 1 -> 2 -> 4 -> ... -> 1024: ten reallocations copying 1 + 2 + ... + 512.
    assert_eq!(
        arr.metrics(),
        ArrayMetrics {
            reallocations: 10,
            elements_copied: 1023,
        }
    );
}

#[test]
fn removals_never_shrink_storage() {
    let mut arr: DynamicArray = (0..16).collect();
    let bytes = arr.memory_bytes();
    while !arr.is_empty() {
        arr.remove_index(0).unwrap();
    }
    assert_eq!(arr.capacity(), 16);
    assert_eq!(arr.memory_bytes(), bytes);

    // Refilling up to the old length needs no reallocation.
    arr.extend(0..16);
    assert_eq!(arr.metrics().reallocations, 0);
}

#[test]
fn config_and_constructor_agree() {
    let config = ArrayConfig::new(12).unwrap();
    let arr = DynamicArray::from_config(&config).unwrap();
    assert_eq!(arr.capacity(), 12);
    assert_eq!(arr.memory_bytes(), config.buffer_bytes());
}

#[test]
fn try_add_element_succeeds_below_maximum() {
    let mut arr = DynamicArray::with_capacity(0).unwrap();
    assert_eq!(arr.try_add_element(5), Ok(()));
    assert_eq!(arr, [5]);
}

#[test]
fn errors_are_reportable() {
    let err = DynamicArray::with_capacity(-1).unwrap_err();
    let boxed: Box<dyn std::error::Error> = Box::new(err.clone());
    assert_eq!(boxed.to_string(), err.to_string());
    assert!(matches!(err, ArrayError::InvalidArgument { .. }));
}

#[test]
fn conversions_preserve_order() {
    let from_vec = DynamicArray::from(vec![1, 2, 3]);
    let from_array = DynamicArray::from([1, 2, 3]);
    let from_slice = DynamicArray::from(&[1, 2, 3][..]);
    assert_eq!(from_vec, from_array);
    assert_eq!(from_array, from_slice);
    assert_eq!(from_vec, vec![1, 2, 3]);
    assert_eq!(from_vec.as_ref(), &[1, 2, 3]);
}

#[test]
fn iterate_by_reference_in_for_loop() {
    let arr = DynamicArray::from_slice(&[1, 2, 3]);
    let mut sum = 0;
    for v in &arr {
        sum += v;
    }
    assert_eq!(sum, 6);
    assert_eq!(arr.len(), 3);
}
