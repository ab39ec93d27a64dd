#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

#[test]
fn test_create() {
    let arr = DynamicArray::<i32>::create(10).throw();
    assert_eq!(arr.capacity(), 10);
    assert_eq!(arr.length(), 0);
    assert_eq!(arr.element_size(), 4);

    let empty = DynamicArray::<i32>::create(0).throw();
    assert_eq!(empty.capacity(), 0, "A zero capacity DynamicArray should be usable.");
    assert_eq!(empty.length(), 0);
    assert!(empty.is_empty());
}

#[test]
fn test_create_overflow() {
    assert!(
        DynamicArray::<u64>::create(usize::MAX).unwrap_err().is_capacity_overflow(),
        "An impossible capacity should be reported as an error."
    );
}

#[test]
fn test_resize() {
    let mut arr = DynamicArray::<i32>::create(10).throw();

    arr.resize(10).throw();
    assert_eq!(arr.capacity(), 10, "Resizing to the same capacity should change nothing.");

    arr.resize(5).throw();
    assert_eq!(arr.capacity(), 5);

    arr.resize(100).throw();
    assert_eq!(arr.capacity(), 100);

    for i in 0..50 {
        arr.append(i).throw();
    }
    arr.resize(60).throw();
    assert_eq!(&*arr, (0..50).collect::<Vec<_>>(), "Resizing should preserve live elements.");

    arr.resize(20).throw();
    assert_eq!(arr.capacity(), 20);
    assert_eq!(arr.length(), 20, "Shrinking below the length should clamp the length.");
    assert_eq!(&*arr, (0..20).collect::<Vec<_>>());

    arr.resize(0).throw();
    assert_eq!(arr.capacity(), 0);
    assert!(arr.is_empty());
}

#[test]
fn test_resize_drops_truncated() {
    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::create(10).throw();
    for item in iter::repeat_with(|| counter.clone()).take(10) {
        arr.append(item).throw();
    }

    arr.resize(4).throw();
    assert_eq!(
        counter.count(),
        6,
        "6 elements should have been dropped during shrinking reallocation."
    );

    drop(arr);
    assert_eq!(counter.count(), 10, "The remaining elements should be dropped with the array.");
}

#[test]
fn test_append() {
    let mut arr = DynamicArray::<i32>::create(0).throw();

    for i in 0..10 {
        arr.append(i * i).throw();
    }

    assert_eq!(arr.length(), 10);
    for i in 0..10 {
        assert_eq!(arr[i], (i * i) as i32);
        assert_eq!(arr.at(i).copied(), Some((i * i) as i32));
    }
}

#[test]
fn test_growth_policy() {
    let mut arr = DynamicArray::<u16>::new();
    let mut expected_cap = 0;

    for n in 1..=1000_u16 {
        arr.append(n).throw();

        if usize::from(n) > expected_cap {
            expected_cap = if expected_cap == 0 { 1 } else { expected_cap * 2 };
        }
        assert_eq!(arr.length(), usize::from(n));
        assert_eq!(
            arr.capacity(),
            expected_cap,
            "Capacity should double from 1 and only when the array is full."
        );
        assert!(arr.capacity().is_power_of_two());
    }
}

#[test]
fn test_append_round_trip() {
    let mut arr = DynamicArray::new();
    for i in 0..100_u64 {
        let value = i.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        arr.append(value).throw();
        assert_eq!(
            arr.at(arr.length() - 1).copied(),
            Some(value),
            "The newest element should read back as it was appended."
        );
    }
}

#[test]
fn test_at() {
    let mut arr = DynamicArray::new();
    for i in 0..5 {
        arr.append(i).throw();
    }

    assert_eq!(arr.at(0), Some(&0));
    assert_eq!(arr.at(4), Some(&4));
    assert_eq!(arr.at(5), None, "The slot past the end should be out of bounds.");
    assert_eq!(arr.at(usize::MAX), None);

    let spare = DynamicArray::<i32>::create(10).throw();
    assert_eq!(spare.at(0), None, "Allocated but unused slots should be out of bounds.");

    assert_eq!(arr.try_at(7).unwrap_err(), IndexOutOfBounds { index: 7, len: 5 });

    *arr.at_mut(2).throw_none() = 20;
    assert_eq!(&*arr, &[0, 1, 20, 3, 4]);
    assert!(arr.at_mut(5).is_none());
}

#[test]
fn test_find() {
    let mut arr = DynamicArray::<i32>::create(0).throw();
    for i in 0..10 {
        arr.append(i * i).throw();
    }

    assert_eq!(arr.find(&16), Some(4));
    assert_eq!(arr.find(&999), None);
    assert_eq!(arr.find(&-1), None);

    arr.append(16).throw();
    assert_eq!(arr.find(&16), Some(4), "The lowest matching index should be returned.");

    assert_eq!(DynamicArray::<i32>::new().find(&0), None, "Nothing is found in an empty array.");
}

#[test]
fn test_find_structs() {
    #[derive(Debug, PartialEq, Eq)]
    struct Point {
        x: i64,
        y: i8,
    }

    let mut arr = DynamicArray::new();
    for i in 0..5 {
        arr.append(Point { x: i, y: -(i as i8) }).throw();
    }

    assert_eq!(arr.element_size(), size_of::<Point>());
    assert_eq!(arr.find(&Point { x: 3, y: -3 }), Some(3));
    assert_eq!(arr.find(&Point { x: 3, y: 3 }), None);
}

#[test]
fn test_map() {
    let mut arr = DynamicArray::new();
    for i in 0..10 {
        arr.append(i).throw();
    }

    let mut visited = 0;
    arr.map(|element| {
        assert_eq!(*element, visited, "Elements should be visited in index order.");
        visited += 1;
        *element *= 3;
    });

    assert_eq!(visited, 10);
    assert_eq!(&*arr, (0..10).map(|i| i * 3).collect::<Vec<_>>());
}

#[test]
fn test_pop_and_clear() {
    let mut arr = DynamicArray::new();
    for i in 0..5 {
        arr.append(i).throw();
    }

    for i in (0..5).rev() {
        assert_eq!(arr.pop(), Some(i));
    }
    assert_eq!(arr.pop(), None);
    assert_eq!(arr.capacity(), 8, "Popping shouldn't release capacity.");

    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::new();
    for item in iter::repeat_with(|| counter.clone()).take(7) {
        arr.append(item).throw();
    }
    arr.clear();
    assert_eq!(counter.count(), 7, "Clearing should drop every element.");
    assert!(arr.is_empty());
}

#[test]
fn test_reserve() {
    let mut arr = DynamicArray::<u8>::new();
    arr.reserve(10).throw();
    assert_eq!(arr.capacity(), 10);

    arr.reserve(5).throw();
    assert_eq!(arr.capacity(), 10, "Reserving within capacity shouldn't reallocate.");

    arr.append(1).throw();
    assert!(arr.reserve(usize::MAX).unwrap_err().is_capacity_overflow());
    assert_eq!(arr.capacity(), 10);
}

#[test]
fn test_zst_support() {
    let mut arr = DynamicArray::new();
    for _ in 0..10 {
        arr.append(ZeroSizedType).throw();
    }

    assert_eq!(arr.length(), 10);
    assert_eq!(arr.capacity(), 16);
    assert_eq!(arr.element_size(), 0);
    assert_eq!(arr.find(&ZeroSizedType), Some(0));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::new();
    for item in iter::repeat_with(|| counter.clone()).take(10) {
        arr.append(item).throw();
    }

    arr.free();
    assert_eq!(counter.count(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let mut a = DynamicArray::create(2).throw();
    let mut b = DynamicArray::create(20).throw();
    for i in 0..5_usize {
        a.append(i).throw();
        b.append(i).throw();
    }

    assert_eq!(a, b, "Equality shouldn't depend on capacity.");
    assert_eq!(&*a, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&a),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Hashing should match the equivalent slice."
    );

    b.append(5).throw();
    assert_ne!(a, b);
}

#[test]
fn test_debug() {
    let mut arr = DynamicArray::create(4).throw();
    arr.append(1_u8).throw();
    arr.append(2).throw();
    assert_eq!(
        format!("{arr:?}"),
        "DynamicArray { contents: [1, 2], len: 2, cap: 4 }"
    );
}
