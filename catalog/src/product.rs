//! Wire types for catalog products.
//!
//! DESIGN
//! ======
//! Field names mirror the catalog backend exactly (`_id`, `liveLink`) so serde
//! round-trips stay lossless. Decoding is lenient where stored records are
//! known to drift: prices saved as text and single-object list responses.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted catalog product. `id` is assigned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(rename = "liveLink", default, deserialize_with = "deserialize_link")]
    pub live_link: Option<String>,
    /// Image URLs in display order; the first is the card thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Attach a server id to a draft.
    #[must_use]
    pub fn from_draft(id: impl Into<String>, draft: ProductDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            category: draft.category,
            description: draft.description,
            price: draft.price,
            live_link: draft.live_link,
            images: draft.images,
        }
    }

    /// Every field except `id`.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            price: self.price,
            live_link: self.live_link.clone(),
            images: self.images.clone(),
        }
    }

    /// First image, used as the card thumbnail.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A product that has not been persisted yet, or the replacement body of an
/// update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(rename = "liveLink", default, skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Decode a list response. The backend answers with a bare object instead of
/// an array when the collection holds a single record.
///
/// Array entries that do not decode as a product are logged and skipped, so
/// one drifted record cannot hide the rest of the catalog.
///
/// # Errors
///
/// Returns the serde error when the body is not JSON, is neither an array nor
/// an object, or is a lone object that is not a product.
pub fn parse_collection(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    match serde_json::from_str::<serde_json::Value>(body)? {
        serde_json::Value::Array(entries) => Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match Product::deserialize(&entry) {
                Ok(product) => Some(product),
                Err(e) => {
                    let id = entry.get("_id").and_then(serde_json::Value::as_str).unwrap_or("?");
                    log::warn!("skipping product record {index} (id {id}): {e}");
                    None
                }
            })
            .collect()),
        single @ serde_json::Value::Object(_) => Product::deserialize(&single).map(|product| vec![product]),
        _ => Err(serde_json::Error::custom("expected a product or an array of products")),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let price = match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("price out of range"))?,
        serde_json::Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("price {text:?} is not numeric")))?,
        _ => return Err(D::Error::custom("expected price as number or numeric string")),
    };
    if !price.is_finite() || price < 0.0 {
        return Err(D::Error::custom(format!("price {price} must be a non-negative number")));
    }
    Ok(price)
}

fn deserialize_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let link = Option::<String>::deserialize(deserializer)?;
    Ok(link.filter(|l| !l.trim().is_empty()))
}
