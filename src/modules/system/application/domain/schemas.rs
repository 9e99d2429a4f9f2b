use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entities::{SystemContent, SystemReferences};
use crate::shared::reference_list::ReferenceMethod;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContentPayload {
    #[validate(required)]
    pub races: Option<Vec<String>>,
    #[validate(required)]
    pub classes: Option<Vec<String>>,
    #[validate(required)]
    pub spells: Option<Vec<String>>,
    #[validate(required)]
    pub items: Option<Vec<String>>,
    #[validate(required)]
    pub weapons: Option<Vec<String>>,
    #[validate(required)]
    pub armors: Option<Vec<String>>,
    #[validate(required)]
    pub feats: Option<Vec<String>>,
    #[validate(required)]
    pub realms: Option<Vec<String>>,
    #[validate(required)]
    pub gods: Option<Vec<String>>,
    #[validate(required)]
    pub monsters: Option<Vec<String>>,
}

impl From<ContentPayload> for SystemContent {
    fn from(payload: ContentPayload) -> Self {
        Self {
            races: payload.races.unwrap_or_default(),
            classes: payload.classes.unwrap_or_default(),
            spells: payload.spells.unwrap_or_default(),
            items: payload.items.unwrap_or_default(),
            weapons: payload.weapons.unwrap_or_default(),
            armors: payload.armors.unwrap_or_default(),
            feats: payload.feats.unwrap_or_default(),
            realms: payload.realms.unwrap_or_default(),
            gods: payload.gods.unwrap_or_default(),
            monsters: payload.monsters.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReferencesPayload {
    #[validate(required)]
    pub srd: Option<String>,
    #[validate(required)]
    pub icon: Option<String>,
    #[validate(required)]
    pub cover: Option<String>,
}

impl From<ReferencesPayload> for SystemReferences {
    fn from(payload: ReferencesPayload) -> Self {
        Self {
            srd: payload.srd.unwrap_or_default(),
            icon: payload.icon.unwrap_or_default(),
            cover: payload.cover.unwrap_or_default(),
        }
    }
}

/// Body of `PUT /dnd5e/system/{id}`. Only `content` is mandatory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SystemUpdatePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(required, nested)]
    pub content: Option<ContentPayload>,
    #[validate(nested)]
    pub references: Option<ReferencesPayload>,
}

/// Body of the content-reference mutator. Field names are the wire names so
/// violations are reported at `newID`.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContentPayload {
    #[validate(required)]
    pub method: Option<ReferenceMethod>,
    #[validate(required, length(min = 1))]
    pub newID: Option<String>,
}
