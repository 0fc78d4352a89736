use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};
use serde_json::Value;
use tessera_protocol::{Entity, FeatureSetId, FrequencyId, Reference, TextId, TokenId, UnitId};

use crate::error::{Result, TokenError};

/// Reference-free snapshot of a token, as handed to storage or transport.
///
/// Every reference field holds the referenced id or null. Feature attributes
/// are only present when the token was enriched.
#[derive(Debug, Clone, PartialEq, Default, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
#[archive(check_bytes)]
pub struct TokenRecord {
    pub id: Option<TokenId>,
    pub text: Option<TextId>,
    pub index: Option<u32>,
    pub display: Option<String>,
    pub feature_set: Option<FeatureSetId>,
    pub line: Option<UnitId>,
    pub phrase: Option<UnitId>,
    pub frequency: Option<FrequencyId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemmata: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<Vec<String>>,
}

impl TokenRecord {
    /// JSON object form of the record with the `exclude`d keys removed.
    /// Names that are not record fields are ignored.
    pub fn to_json(&self, exclude: &[&str]) -> Result<Value> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            for key in exclude {
                map.remove(*key);
            }
        }
        Ok(value)
    }

    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Natural key of a token within the store: its text and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerdeSerialize, SerdeDeserialize)]
pub struct UniqueValues {
    pub text: Option<TextId>,
    pub index: Option<u32>,
}

pub(crate) fn reference_id<T: Entity>(
    field: &'static str,
    reference: &Option<Reference<T>>,
) -> Result<Option<T::Id>> {
    match reference {
        None => Ok(None),
        Some(r) => r
            .id()
            .map(Some)
            .ok_or(TokenError::InvalidReferenceType { field }),
    }
}
