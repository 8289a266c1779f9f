//! Add-on manifest served at `/manifest.json`.

use crate::catalog::CatalogKind;
use crate::mapper::ID_PREFIX;
use serde::Serialize;
use shared::CONTENT_TYPE;

pub const ADDON_ID: &str = "org.example.dattebayo";
pub const ADDON_NAME: &str = "Dattebayo";
pub const ADDON_DESCRIPTION: &str = "Dattebayo pulls anime catalogs directly from AniList, \
    including Trending Now and Popular This Season lists, with search and meta info.";
pub const ADDON_LOGO: &str = "https://i.ibb.co/xqzS72WY/dattebayo-logo.png";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub id_prefixes: Vec<String>,
    pub logo: String,
    pub catalogs: Vec<ManifestCatalog>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestCatalog {
    #[serde(rename = "type")]
    pub content_type: String,
    pub id: String,
    pub name: String,
    pub extra: Vec<ExtraField>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraField {
    pub name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_required: bool,
}

impl ExtraField {
    fn optional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_required: false,
        }
    }

    fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_required: true,
        }
    }
}

impl ManifestCatalog {
    fn for_kind(kind: CatalogKind) -> Self {
        let extra = match kind {
            CatalogKind::Search => vec![ExtraField::required("search"), ExtraField::optional("skip")],
            CatalogKind::Trending | CatalogKind::PopularSeason => vec![ExtraField::optional("skip")],
        };

        Self {
            content_type: CONTENT_TYPE.to_string(),
            id: kind.id().to_string(),
            name: kind.name().to_string(),
            extra,
        }
    }
}

impl Manifest {
    pub fn new() -> Self {
        Self {
            id: ADDON_ID.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: ADDON_NAME.to_string(),
            description: ADDON_DESCRIPTION.to_string(),
            resources: vec!["catalog".to_string(), "meta".to_string()],
            types: vec![CONTENT_TYPE.to_string()],
            id_prefixes: vec![ID_PREFIX.to_string()],
            logo: ADDON_LOGO.to_string(),
            catalogs: CatalogKind::ALL.into_iter().map(ManifestCatalog::for_kind).collect(),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}
