use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use super::catalog_kind::CatalogKind;
use crate::shared::validation::{Schema, SchemaViolation};

pub const LOCALES: [&str; 2] = ["en", "pt"];

/// Shape shared by most reference entries. Anything beyond the required
/// fields is kept as-is.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DescribedEntry {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SpellEntry {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub description: Option<String>,
    #[validate(required)]
    pub r#type: Option<String>,
    #[validate(required, range(min = 0, max = 9))]
    pub level: Option<u8>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MonsterEntry {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub stats: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WikiEntry {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Validates both locale bodies of `payload` against `B`, reporting every
/// violation with its full path (`["en", "name"]`).
pub fn validate_locales<B: Schema>(payload: &Value) -> Result<(), SchemaViolation> {
    let mut violation = SchemaViolation {
        details: Vec::new(),
    };

    for locale in LOCALES {
        match payload.get(locale) {
            None | Some(Value::Null) => {
                violation.merge(SchemaViolation::single(&[locale], "Required"));
            }
            Some(body) => {
                if let Err(e) = B::from_payload(body.clone()) {
                    violation.merge(e.nested_under(locale));
                }
            }
        }
    }

    if violation.details.is_empty() {
        Ok(())
    } else {
        Err(violation)
    }
}

impl CatalogKind {
    /// Validation gate for a full `{en, pt}` replacement body.
    pub fn validate(&self, payload: &Value) -> Result<(), SchemaViolation> {
        match self {
            CatalogKind::Spells => validate_locales::<SpellEntry>(payload),
            CatalogKind::Monsters => validate_locales::<MonsterEntry>(payload),
            CatalogKind::Wikis => validate_locales::<WikiEntry>(payload),
            CatalogKind::Races
            | CatalogKind::Classes
            | CatalogKind::Items
            | CatalogKind::Backgrounds
            | CatalogKind::Gods
            | CatalogKind::Realms
            | CatalogKind::Feats
            | CatalogKind::Weapons
            | CatalogKind::Armors
            | CatalogKind::MagicItems => validate_locales::<DescribedEntry>(payload),
        }
    }
}
