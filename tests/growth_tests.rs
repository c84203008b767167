use dynarray::DynArray;

#[test]
fn test_new_does_not_allocate() {
    let arr: DynArray<u64> = DynArray::new();

    assert_eq!(arr.capacity(), 0);
}

#[test]
fn test_first_push_allocates_one_slot() {
    let mut arr = DynArray::new();

    arr.push(1u64).unwrap();

    assert_eq!(arr.capacity(), 1);
    assert_eq!(arr.len(), 1);
}

#[test]
fn test_capacity_doubles_on_growth() {
    let mut arr = DynArray::new();

    // Each reallocation doubles the previous size: 1, 2, 4, 8
    arr.push(0).unwrap();
    assert_eq!(arr.capacity(), 1);

    arr.push(1).unwrap();
    assert_eq!(arr.capacity(), 2);

    arr.push(2).unwrap();
    assert_eq!(arr.capacity(), 4);

    arr.push(3).unwrap();
    assert_eq!(arr.capacity(), 4);

    arr.push(4).unwrap();
    assert_eq!(arr.capacity(), 8);
}

#[test]
fn test_growth_preserves_contents() {
    let mut arr = DynArray::new();

    for i in 0..100 {
        arr.push(i).unwrap();
    }

    assert_eq!(arr.len(), 100);
    for i in 0..100 {
        assert_eq!(arr.get(i), Some(&i));
    }
}

#[test]
fn test_reserve_allocates_exactly() {
    let mut arr: DynArray<i32> = DynArray::new();

    arr.reserve(100).unwrap();

    assert_eq!(arr.capacity(), 100);
    assert_eq!(arr.len(), 0);
}

#[test]
fn test_reserve_preserves_contents() {
    let mut arr = DynArray::new();

    arr.push(9).unwrap();
    arr.push(2).unwrap();

    arr.reserve(100).unwrap();

    assert_eq!(arr.capacity(), 100);
    assert_eq!(arr.as_slice(), &[9, 2]);
}

#[test]
fn test_reserve_is_noop_when_sufficient() {
    let mut arr = DynArray::new();

    arr.push(1).unwrap();
    arr.reserve(10).unwrap();
    let base = arr.as_ptr();

    // Smaller and equal requests must not reallocate
    arr.reserve(5).unwrap();
    assert_eq!(arr.capacity(), 10);
    assert_eq!(arr.as_ptr(), base);

    arr.reserve(10).unwrap();
    assert_eq!(arr.capacity(), 10);
    assert_eq!(arr.as_ptr(), base);
}

#[test]
fn test_reserve_migrates_to_new_buffer() {
    let mut arr = DynArray::new();

    arr.push(7).unwrap();
    let before = arr.as_ptr();

    arr.reserve(64).unwrap();

    // The new buffer was allocated while the old one was still live,
    // so the base address must have changed
    assert_ne!(arr.as_ptr(), before);
    assert_eq!(arr.as_slice(), &[7]);
}

#[test]
fn test_push_after_reserve_does_not_reallocate() {
    let mut arr = DynArray::new();

    arr.reserve(8).unwrap();
    let base = arr.as_ptr();

    for i in 0..8 {
        arr.push(i).unwrap();
    }

    assert_eq!(arr.capacity(), 8);
    assert_eq!(arr.as_ptr(), base);
}

#[test]
fn test_resize_grows_with_default_values() {
    let mut arr = DynArray::new();

    arr.push(1).unwrap();
    arr.push(2).unwrap();

    arr.resize(5).unwrap();

    assert_eq!(arr.as_slice(), &[1, 2, 0, 0, 0]);
}

#[test]
fn test_resize_shrinks() {
    let mut arr = DynArray::new();

    arr.push(1).unwrap();
    arr.push(2).unwrap();
    arr.push(3).unwrap();

    arr.resize(1).unwrap();
    assert_eq!(arr.as_slice(), &[1]);

    arr.resize(0).unwrap();
    assert!(arr.is_empty());
}

#[test]
fn test_resize_to_current_length_is_noop() {
    let mut arr = DynArray::new();

    arr.push(1).unwrap();
    arr.push(2).unwrap();
    let capacity = arr.capacity();

    arr.resize(2).unwrap();

    assert_eq!(arr.as_slice(), &[1, 2]);
    assert_eq!(arr.capacity(), capacity);
}

#[test]
fn test_truncate_drops_tail() {
    let mut arr = DynArray::new();

    for i in 0..5 {
        arr.push(i).unwrap();
    }
    let capacity = arr.capacity();

    arr.truncate(2);

    assert_eq!(arr.as_slice(), &[0, 1]);
    assert_eq!(arr.capacity(), capacity);
}

#[test]
fn test_truncate_beyond_length_is_noop() {
    let mut arr = DynArray::new();

    arr.push(1).unwrap();

    arr.truncate(10);

    assert_eq!(arr.as_slice(), &[1]);
}

#[test]
fn test_filled_constructs_clones() {
    let arr = DynArray::filled(4, 7).unwrap();

    assert_eq!(arr.as_slice(), &[7, 7, 7, 7]);
    // Sized exactly, not doubled
    assert_eq!(arr.capacity(), 4);
}

#[test]
fn test_filled_zero_count_stays_unallocated() {
    let arr = DynArray::filled(0, 7).unwrap();

    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), 0);
}

#[test]
fn test_filled_with_owned_values() {
    let arr = DynArray::filled(3, String::from("x")).unwrap();

    assert_eq!(arr.len(), 3);
    for i in 0..3 {
        assert_eq!(arr.get(i).unwrap(), "x");
    }
}

#[test]
fn test_try_from_iter_collects_in_order() {
    let arr = DynArray::try_from_iter(0..10).unwrap();

    assert_eq!(arr.len(), 10);
    assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_try_extend_appends() {
    let mut arr = DynArray::new();

    arr.push(1).unwrap();
    arr.try_extend([2, 3, 4]).unwrap();

    assert_eq!(arr.as_slice(), &[1, 2, 3, 4]);
}
