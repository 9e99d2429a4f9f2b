use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every reference collection served under its own route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Monsters,
    Races,
    Classes,
    Spells,
    Items,
    Backgrounds,
    Gods,
    Realms,
    Feats,
    Weapons,
    Armors,
    MagicItems,
    Wikis,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 13] = [
        CatalogKind::Monsters,
        CatalogKind::Races,
        CatalogKind::Classes,
        CatalogKind::Spells,
        CatalogKind::Items,
        CatalogKind::Backgrounds,
        CatalogKind::Gods,
        CatalogKind::Realms,
        CatalogKind::Feats,
        CatalogKind::Weapons,
        CatalogKind::Armors,
        CatalogKind::MagicItems,
        CatalogKind::Wikis,
    ];

    /// Route segment and stored discriminator.
    pub fn segment(&self) -> &'static str {
        match self {
            CatalogKind::Monsters => "monsters",
            CatalogKind::Races => "races",
            CatalogKind::Classes => "classes",
            CatalogKind::Spells => "spells",
            CatalogKind::Items => "items",
            CatalogKind::Backgrounds => "backgrounds",
            CatalogKind::Gods => "gods",
            CatalogKind::Realms => "realms",
            CatalogKind::Feats => "feats",
            CatalogKind::Weapons => "weapons",
            CatalogKind::Armors => "armors",
            CatalogKind::MagicItems => "magicitems",
            CatalogKind::Wikis => "wikis",
        }
    }

    /// Singular name used in availability messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogKind::Monsters => "Monster",
            CatalogKind::Races => "Race",
            CatalogKind::Classes => "Class",
            CatalogKind::Spells => "Spell",
            CatalogKind::Items => "Item",
            CatalogKind::Backgrounds => "Background",
            CatalogKind::Gods => "God",
            CatalogKind::Realms => "Realm",
            CatalogKind::Feats => "Feat",
            CatalogKind::Weapons => "Weapon",
            CatalogKind::Armors => "Armor",
            CatalogKind::MagicItems => "Magic item",
            CatalogKind::Wikis => "Wiki",
        }
    }

    pub fn supports_delete(&self) -> bool {
        matches!(
            self,
            CatalogKind::Races | CatalogKind::Items | CatalogKind::Feats | CatalogKind::Realms
        )
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogKind::ALL
            .into_iter()
            .find(|kind| kind.segment() == s)
            .ok_or_else(|| format!("Unknown catalog kind: {}", s))
    }
}
