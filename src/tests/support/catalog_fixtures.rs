use serde_json::{json, Value};

use crate::catalog::application::domain::{CatalogEntity, CatalogKind};
use crate::system::application::domain::{SystemContent, SystemDocument, SystemReferences};

pub fn locale_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "A life of service to a temple",
        "skillProficiencies": ["Insight", "Religion"]
    })
}

/// Valid replacement body for kinds using the described-entry schema.
pub fn described_payload(name: &str) -> Value {
    json!({ "en": locale_body(name), "pt": locale_body(name) })
}

pub fn catalog_entity(kind: CatalogKind, active: bool) -> CatalogEntity {
    let mut entity = CatalogEntity::new(kind, locale_body("Acolyte"), locale_body("Acólito"));
    entity.active = active;
    entity
}

pub fn system(active: bool) -> SystemDocument {
    let mut document = SystemDocument::new(
        "Dungeons & Dragons 5e".to_string(),
        SystemContent::default(),
        SystemReferences {
            srd: "https://dnd.wizards.com/resources/systems-reference-document".to_string(),
            icon: "https://cdn.tablerise.test/dnd5e/icon.png".to_string(),
            cover: "https://cdn.tablerise.test/dnd5e/cover.png".to_string(),
        },
    );
    document.active = active;
    document
}
