use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Ids of the catalog entities a game system ships with, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemContent {
    pub races: Vec<String>,
    pub classes: Vec<String>,
    pub spells: Vec<String>,
    pub items: Vec<String>,
    pub weapons: Vec<String>,
    pub armors: Vec<String>,
    pub feats: Vec<String>,
    pub realms: Vec<String>,
    pub gods: Vec<String>,
    pub monsters: Vec<String>,
}

impl SystemContent {
    pub fn field_mut(&mut self, field: ContentField) -> &mut Vec<String> {
        match field {
            ContentField::Races => &mut self.races,
            ContentField::Classes => &mut self.classes,
            ContentField::Spells => &mut self.spells,
            ContentField::Items => &mut self.items,
            ContentField::Weapons => &mut self.weapons,
            ContentField::Armors => &mut self.armors,
            ContentField::Feats => &mut self.feats,
            ContentField::Realms => &mut self.realms,
            ContentField::Gods => &mut self.gods,
            ContentField::Monsters => &mut self.monsters,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemReferences {
    pub srd: String,
    pub icon: String,
    pub cover: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemDocument {
    pub id: Uuid,
    pub name: String,
    pub content: SystemContent,
    pub references: SystemReferences,
    pub active: bool,
}

impl SystemDocument {
    pub fn new(name: String, content: SystemContent, references: SystemReferences) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            content,
            references,
            active: true,
        }
    }
}

/// Name of one content array, as sent in the `entity` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentField {
    Races,
    Classes,
    Spells,
    Items,
    Weapons,
    Armors,
    Feats,
    Realms,
    Gods,
    Monsters,
}

impl ContentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentField::Races => "races",
            ContentField::Classes => "classes",
            ContentField::Spells => "spells",
            ContentField::Items => "items",
            ContentField::Weapons => "weapons",
            ContentField::Armors => "armors",
            ContentField::Feats => "feats",
            ContentField::Realms => "realms",
            ContentField::Gods => "gods",
            ContentField::Monsters => "monsters",
        }
    }
}

impl fmt::Display for ContentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid entity field")]
pub struct UnknownContentField(pub String);

impl FromStr for ContentField {
    type Err = UnknownContentField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "races" => Ok(ContentField::Races),
            "classes" => Ok(ContentField::Classes),
            "spells" => Ok(ContentField::Spells),
            "items" => Ok(ContentField::Items),
            "weapons" => Ok(ContentField::Weapons),
            "armors" => Ok(ContentField::Armors),
            "feats" => Ok(ContentField::Feats),
            "realms" => Ok(ContentField::Realms),
            "gods" => Ok(ContentField::Gods),
            "monsters" => Ok(ContentField::Monsters),
            other => Err(UnknownContentField(other.to_string())),
        }
    }
}
