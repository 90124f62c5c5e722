//! End-to-end registry behaviour through the public facade.

use convey::{
    AnyValue, Args, ConvertError, DuplicatePolicy, FnConverter, Level, MapperRegistry, Registered,
    RegistryError, TypePairKey, args, testing::RecordingSink,
};

mod common;
use common::{
    Greeting, PersonDto, PersonEntity, entity, entity_to_dto, entity_to_dto_upper,
    person_registry,
};

#[test]
fn test_never_registered_pairs_are_not_found() {
    let registry = MapperRegistry::new();

    let err = registry.convert::<PersonDto, _>(entity("Ada")).unwrap_err();
    assert!(matches!(err, ConvertError::NoMapperFound(_)));

    let err = registry.convert::<String, _>(42u64).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_person_end_to_end() {
    let registry = person_registry();

    let dto: PersonDto = registry.convert(entity("Ada")).unwrap();
    assert_eq!(
        dto,
        PersonDto {
            name: "Ada".to_string()
        }
    );
}

#[test]
fn test_convert_matches_direct_call() {
    let registry = person_registry();
    let dto = PersonDto {
        name: "Grace".to_string(),
    };

    let plain: Greeting = registry.convert(dto.clone()).unwrap();
    assert_eq!(plain, common::greet(dto.clone(), &Args::new()));

    let french: Greeting = registry.convert_with(dto.clone(), &args!["fr"]).unwrap();
    assert_eq!(french, common::greet(dto, &args!["fr"]));
    assert_eq!(french.0, "Bonjour, Grace");
}

#[test]
fn test_lenient_reregistration_keeps_first() {
    let registry = person_registry();
    let sink = RecordingSink::new();
    registry.set_sink(sink.clone());

    let outcome = registry
        .register_fn::<PersonDto, PersonEntity>(entity_to_dto_upper)
        .unwrap();
    assert_eq!(outcome, Registered::KeptExisting);

    let dto: PersonDto = registry.convert(entity("Ada")).unwrap();
    assert_eq!(dto.name, "Ada");

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, Level::Warn);
    assert!(messages[0].1.contains("PersonEntity"));
}

#[test]
fn test_strict_reregistration_fails_and_keeps_first() {
    let registry = MapperRegistry::with_policy(DuplicatePolicy::Strict);
    registry
        .register_fn::<PersonDto, PersonEntity>(entity_to_dto)
        .unwrap();

    let err = registry
        .register_fn::<PersonDto, PersonEntity>(entity_to_dto_upper)
        .unwrap_err();
    let RegistryError::DuplicateMapping(key) = err;
    assert_eq!(key, TypePairKey::of::<PersonDto, PersonEntity>());

    let dto: PersonDto = registry.convert(entity("Ada")).unwrap();
    assert_eq!(dto.name, "Ada");
}

#[test]
fn test_remove_then_convert_fails() {
    let registry = person_registry();

    assert!(registry.remove::<PersonDto, PersonEntity>());
    let err = registry.convert::<PersonDto, _>(entity("Ada")).unwrap_err();
    assert!(err.is_not_found());

    // the other mapper is untouched
    assert!(registry.contains::<Greeting, PersonDto>());
}

#[test]
fn test_remove_absent_is_noop() {
    let registry = MapperRegistry::new();
    assert!(!registry.remove::<PersonDto, PersonEntity>());
    assert!(!registry.remove_key(&TypePairKey::of::<u8, u8>()));
    assert!(registry.is_empty());
}

#[test]
fn test_replace_via_remove_and_register() {
    let registry = MapperRegistry::builder()
        .strict()
        .register_fn::<PersonDto, PersonEntity>(entity_to_dto)
        .build()
        .unwrap();

    registry.remove::<PersonDto, PersonEntity>();
    registry
        .register_fn::<PersonDto, PersonEntity>(entity_to_dto_upper)
        .unwrap();

    let dto: PersonDto = registry.convert(entity("Ada")).unwrap();
    assert_eq!(dto.name, "ADA");
}

#[test]
fn test_wrong_result_type_at_conversion_not_registration() {
    let registry = MapperRegistry::with_policy(DuplicatePolicy::Strict);
    let key = TypePairKey::of::<PersonDto, PersonEntity>();

    // claims to produce a PersonDto but actually returns a String
    let converter = FnConverter::new(|value: AnyValue, _: &Args| {
        let entity = value
            .downcast::<PersonEntity>()
            .map_err(|_| ConvertError::WrongSourceType {
                expected: "PersonEntity",
            })?;
        Ok(Box::new(entity.full_name) as AnyValue)
    });
    assert_eq!(
        registry.register_erased(key, converter).unwrap(),
        Registered::Inserted
    );

    let err = registry.convert::<PersonDto, _>(entity("Ada")).unwrap_err();
    match err {
        ConvertError::WrongResultType { key: reported } => {
            assert_eq!(reported, key);
            assert!(
                ConvertError::WrongResultType { key }
                    .to_string()
                    .contains("PersonDto")
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mapper_error_is_reported_not_defaulted() {
    let registry = MapperRegistry::new();
    registry
        .try_register::<PersonDto, PersonEntity, _>(|e, _| {
            if e.full_name.is_empty() {
                Err("empty name")
            } else {
                Ok(entity_to_dto(e))
            }
        })
        .unwrap();

    assert!(registry.convert::<PersonDto, _>(entity("Ada")).is_ok());
    let err = registry.convert::<PersonDto, _>(entity("")).unwrap_err();
    assert!(matches!(err, ConvertError::Failed(_)));
    assert_eq!(
        std::error::Error::source(&err).map(ToString::to_string),
        Some("empty name".to_string())
    );
}

#[test]
fn test_sink_is_observational_only() {
    let with_sink = person_registry();
    let sink = RecordingSink::new();
    with_sink.set_sink(sink.clone());
    let without_sink = person_registry();

    for registry in [&with_sink, &without_sink] {
        assert!(registry.convert::<String, _>(1u8).is_err());
        assert_eq!(
            registry.convert::<PersonDto, _>(entity("Ada")).unwrap().name,
            "Ada"
        );
    }
    assert_eq!(sink.count_at(Level::Debug), 1);
}

#[test]
fn test_closure_sink() {
    use std::sync::{Arc, Mutex};

    let seen = Arc::new(Mutex::new(Vec::new()));
    let registry = MapperRegistry::new();
    let sink_seen = Arc::clone(&seen);
    registry.set_sink(move |level: Level, message: &str| {
        sink_seen.lock().unwrap().push(format!("{level}: {message}"));
    });

    let _ = registry.convert::<String, _>(1u8);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with("DEBUG: no mapper registered for"));
}
