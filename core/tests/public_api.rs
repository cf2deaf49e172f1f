//! Integration tests for the public API.
//!
//! These walk through the documented scenarios using only what the crate
//! exports.

use growlist_core::{
    AllocationError, ArrayOptions, BASE_CAPACITY, DEFAULT_GROWTH_FACTOR, GrowableArray,
};
use pretty_assertions::assert_eq;

#[test]
fn test_default_construction_and_first_growth() -> Result<(), AllocationError> {
    let mut list = GrowableArray::new()?;
    assert_eq!(list.capacity(), 4);

    for value in [10, 20, 30, 40, 50] {
        list.append(value)?;
    }

    assert_eq!(list.capacity(), 8);
    assert_eq!(list.len(), 5);
    assert_eq!(list.get(4), Some(&50));
    Ok(())
}

#[test]
fn test_zero_capacity_matches_default() -> Result<(), AllocationError> {
    let explicit = GrowableArray::<i32>::with_capacity(0)?;
    assert_eq!(explicit.capacity(), BASE_CAPACITY);
    assert_eq!(explicit.growth_factor(), DEFAULT_GROWTH_FACTOR);
    Ok(())
}

#[test]
fn test_empty_array_reads() -> Result<(), AllocationError> {
    let mut list = GrowableArray::<i32>::new()?;
    assert_eq!(list.top(), None);
    assert_eq!(list.pop(), None);
    assert_eq!(list.get(0), None);
    assert_eq!(list.len(), 0);
    Ok(())
}

#[test]
fn test_set_in_and_out_of_range() -> Result<(), AllocationError> {
    let mut list = GrowableArray::new()?;
    list.extend_from_slice(&[1, 2, 3])?;

    list.set(2, 99);
    assert_eq!(list.as_slice(), &[1, 2, 99]);

    list.set(5, 99);
    assert_eq!(list.as_slice(), &[1, 2, 99]);
    Ok(())
}

#[test]
fn test_stack_usage() -> Result<(), AllocationError> {
    let mut stack = GrowableArray::new()?;
    for word in ["a", "b", "c"] {
        stack.append(word)?;
    }

    let mut drained = Vec::new();
    while let Some(word) = stack.pop() {
        drained.push(word);
    }
    assert_eq!(drained, vec!["c", "b", "a"]);
    assert!(stack.is_empty());
    Ok(())
}

#[test]
fn test_growth_factor_configuration() -> Result<(), AllocationError> {
    let options = ArrayOptions::default().with_growth_factor(3.0);
    let mut list = GrowableArray::with_options(options)?;
    for i in 0..5 {
        list.append(i)?;
    }
    assert_eq!(list.capacity(), 12);

    list.set_growth_factor(-4.0);
    assert_eq!(list.growth_factor(), 2.0);
    Ok(())
}

#[test]
fn test_shared_behind_external_mutex() -> Result<(), AllocationError> {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let shared = Arc::new(Mutex::new(GrowableArray::new()?));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..25 {
                    shared.lock().unwrap().append(t * 100 + i).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let list = shared.lock().unwrap();
    assert_eq!(list.len(), 100);
    assert!(list.capacity() >= 100);
    Ok(())
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>() {}
    assert_error::<AllocationError>();
}
