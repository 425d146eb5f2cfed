//! Serialized catalog document.
//!
//! Items are nested under their group in the document, so the item-to-group
//! relationship is structural. Validation of ids happens when the document is
//! converted into a [`Catalog`].

use crate::error::Result;
use crate::model::{Catalog, Facet, Item};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Declared facets; either bare ids or `{id, label}` records
    #[serde(default, alias = "tags")]
    pub facets: Vec<FacetEntry>,
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
}

/// A declared facet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetEntry {
    Id(#[serde(deserialize_with = "deserialize_scalar_id")] String),
    Labeled {
        #[serde(deserialize_with = "deserialize_scalar_id")]
        id: String,
        #[serde(default, alias = "name")]
        label: Option<String>,
    },
}

/// A group with its items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupEntry {
    #[serde(deserialize_with = "deserialize_scalar_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

/// An item and the facets it carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    #[serde(deserialize_with = "deserialize_scalar_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `null` entries are kept so that validation reports them
    #[serde(default, alias = "tags", deserialize_with = "deserialize_facet_refs")]
    pub facets: Vec<Option<String>>,
}

/// An id written as any scalar; `200` and `"200"` name the same facet.
struct ScalarId(String);

struct ScalarIdVisitor;

impl Visitor<'_> for ScalarIdVisitor {
    type Value = ScalarId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or number id")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ScalarId(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ScalarId(v))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ScalarId(v.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ScalarId(v.to_string()))
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ScalarId(v.to_string()))
    }

    fn visit_bool<E>(self, v: bool) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ScalarId(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for ScalarId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarIdVisitor)
    }
}

fn deserialize_scalar_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    ScalarId::deserialize(deserializer).map(|ScalarId(id)| id)
}

fn deserialize_facet_refs<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let refs = Vec::<Option<ScalarId>>::deserialize(deserializer)?;
    Ok(refs
        .into_iter()
        .map(|id| id.map(|ScalarId(id)| id))
        .collect())
}

impl CatalogDocument {
    /// Validate the document and build a catalog from it
    pub fn into_catalog(self) -> Result<Catalog> {
        let mut builder = Catalog::builder();

        for entry in self.facets {
            let facet = match entry {
                FacetEntry::Id(id) => Facet::new(id),
                FacetEntry::Labeled { id, label: None } => Facet::new(id),
                FacetEntry::Labeled {
                    id,
                    label: Some(label),
                } => Facet::new(id).with_label(label),
            };
            builder.push_facet(facet);
        }

        for group in self.groups {
            builder.push_group(group.id.clone(), group.name);
            for entry in group.items {
                let mut item = Item::new(entry.id, group.id.clone())
                    .with_facets(entry.facets.into_iter().map(Option::unwrap_or_default));
                item.name = entry.name;
                builder.push_item(item);
            }
        }

        builder.build()
    }
}
