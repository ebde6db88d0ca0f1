use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::variant::models::{finish::Finish, variant_result::VariantResult};

/// A site-local printing variant recorded in an external data store.
///
/// Prices are carried through untouched; the engine never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomVariant {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// The standard finish this variant replaces on presentation, if any.
    #[serde(default)]
    pub replaces: Option<Finish>,
    pub active: bool,
    #[serde(default)]
    pub source_product: Option<String>,
    #[serde(default)]
    pub prices: Option<serde_json::Value>,
}

/// Standard variants with the custom variants applied on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVariants {
    pub standard: VariantResult,
    pub custom: Vec<CustomVariant>,
}
