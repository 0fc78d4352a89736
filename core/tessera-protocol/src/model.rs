use rkyv::{Archive, Deserialize, Serialize};
use crate::entity::{Entity, Reference};
use crate::ids::{FeatureSetId, FrequencyId, TextId, UnitId};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, PartialEq, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Text {
    pub id: Option<TextId>,
    pub title: String,
    pub author: String,
    pub language: String,
}

/// Normalized linguistic features of one token, stored apart from it.
#[derive(Debug, Clone, PartialEq, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct FeatureSet {
    pub id: Option<FeatureSetId>,
    pub language: String,
    pub form: String,
    pub lemmata: Vec<String>,
    pub semantic: Vec<String>,
    pub sound: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum UnitKind {
    Line = 0,
    Phrase = 1,
}

/// A line or phrase of a text.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Unit {
    pub id: Option<UnitId>,
    pub text: Option<TextId>,
    pub index: u32,
    pub kind: UnitKind,
}

#[derive(Debug, Clone, PartialEq, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Frequency {
    pub id: Option<FrequencyId>,
    pub text: Option<TextId>,
    pub feature: String,
    pub value: f64,
}

macro_rules! impl_entity {
    ($entity:ty, $id:ty, $collection:expr) => {
        impl Entity for $entity {
            const COLLECTION: &'static str = $collection;
            type Id = $id;

            fn id(&self) -> Option<$id> {
                self.id
            }
        }

        impl From<$id> for Reference<$entity> {
            fn from(id: $id) -> Self {
                Reference::Id(id)
            }
        }
    };
}

impl_entity!(Text, TextId, "texts");
impl_entity!(FeatureSet, FeatureSetId, "features");
impl_entity!(Unit, UnitId, "units");
impl_entity!(Frequency, FrequencyId, "frequencies");
