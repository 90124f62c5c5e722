#![allow(dead_code)]

use convey::{Args, MapperRegistry};

// ============================================================================
// Test Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct PersonEntity {
    pub full_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PersonDto {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Greeting(pub String);

pub fn entity(name: &str) -> PersonEntity {
    PersonEntity {
        full_name: name.to_string(),
    }
}

// ============================================================================
// Test Mappers
// ============================================================================

pub fn entity_to_dto(entity: PersonEntity) -> PersonDto {
    PersonDto {
        name: entity.full_name,
    }
}

pub fn entity_to_dto_upper(entity: PersonEntity) -> PersonDto {
    PersonDto {
        name: entity.full_name.to_uppercase(),
    }
}

/// Greets in the language passed as the first extra argument, English otherwise.
pub fn greet(dto: PersonDto, args: &Args) -> Greeting {
    let salutation = match args.get::<&str>(0).copied() {
        Some("fr") => "Bonjour",
        Some("de") => "Hallo",
        _ => "Hello",
    };
    Greeting(format!("{salutation}, {}", dto.name))
}

pub fn person_registry() -> MapperRegistry {
    let registry = MapperRegistry::new();
    registry
        .register_fn::<PersonDto, PersonEntity>(entity_to_dto)
        .unwrap();
    registry.register::<Greeting, PersonDto>(greet).unwrap();
    registry
}
