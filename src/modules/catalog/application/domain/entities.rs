use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::catalog_kind::CatalogKind;

/// A bilingual reference document. Locale bodies stay opaque JSON once they
/// have passed the kind's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntity {
    pub id: Uuid,
    #[serde(skip)]
    pub kind: CatalogKind,
    pub active: bool,
    pub en: Value,
    pub pt: Value,
}

impl CatalogEntity {
    pub fn new(kind: CatalogKind, en: Value, pt: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            active: true,
            en,
            pt,
        }
    }
}
