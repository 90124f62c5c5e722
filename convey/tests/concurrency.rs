//! Shared use of one registry across threads.

use convey::{DuplicatePolicy, MapperRegistry, Registered};
use std::sync::{Arc, Barrier};
use std::thread;

mod common;
use common::{PersonDto, PersonEntity, entity, entity_to_dto};

#[test]
fn test_concurrent_registration_inserts_once() {
    let registry = Arc::new(MapperRegistry::new());
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry
                    .register_fn::<PersonDto, PersonEntity>(entity_to_dto)
                    .unwrap()
            })
        })
        .collect();

    let inserted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|outcome| *outcome == Registered::Inserted)
        .count();
    assert_eq!(inserted, 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_concurrent_strict_registration_one_winner() {
    let registry = Arc::new(MapperRegistry::with_policy(DuplicatePolicy::Strict));
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.register_fn::<PersonDto, PersonEntity>(entity_to_dto)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(results.iter().filter(|r| r.is_err()).count(), threads - 1);
}

#[test]
fn test_concurrent_conversions() {
    let registry = Arc::new(MapperRegistry::new());
    registry
        .register_fn::<PersonDto, PersonEntity>(entity_to_dto)
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..100 {
                    let name = format!("p{t}-{i}");
                    let dto: PersonDto = registry.convert(entity(&name)).unwrap();
                    assert_eq!(dto.name, name);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
