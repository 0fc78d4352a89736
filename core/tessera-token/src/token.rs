use serde_json::Value;
use tessera_protocol::{Entity, FeatureSet, Frequency, Reference, Text, TokenId, Unit};

use crate::error::{Result, TokenError};
use crate::features::{EnrichedToken, Features};
use crate::record::{reference_id, TokenRecord, UniqueValues};

/// One occurrence of a word-like unit at a position in a text.
///
/// A freshly built token carries only identity, position and references.
/// Linguistic features are attached by [`Token::enrich`], which is what makes
/// the token comparable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Token {
    /// Set by the persistence layer on insert, never locally.
    pub id: Option<TokenId>,
    /// The text containing this token.
    pub text: Option<Reference<Text>>,
    /// Zero-based order of this token within its text.
    pub index: Option<u32>,
    /// The un-altered form as it appears in the source text.
    pub display: Option<String>,
    /// Normalized features associated with this token.
    pub feature_set: Option<Reference<FeatureSet>>,
    /// Line unit containing this token.
    pub line: Option<Reference<Unit>>,
    /// Phrase unit containing this token.
    pub phrase: Option<Reference<Unit>>,
    pub frequency: Option<Reference<Frequency>>,
}

impl Entity for Token {
    const COLLECTION: &'static str = "tokens";
    type Id = TokenId;

    fn id(&self) -> Option<TokenId> {
        self.id
    }
}

impl Token {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: TokenId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_text(mut self, text: impl Into<Reference<Text>>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn with_feature_set(mut self, feature_set: impl Into<Reference<FeatureSet>>) -> Self {
        self.feature_set = Some(feature_set.into());
        self
    }

    pub fn with_line(mut self, line: impl Into<Reference<Unit>>) -> Self {
        self.line = Some(line.into());
        self
    }

    pub fn with_phrase(mut self, phrase: impl Into<Reference<Unit>>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }

    pub fn with_frequency(mut self, frequency: impl Into<Reference<Frequency>>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    /// Records the id handed out by the store. An id is assigned once.
    pub fn assign_id(&mut self, id: TokenId) -> Result<()> {
        if let Some(existing) = self.id {
            return Err(TokenError::IdAlreadyAssigned { existing });
        }
        self.id = Some(id);
        Ok(())
    }

    pub fn enrich(self, features: Features) -> EnrichedToken {
        EnrichedToken::new(self, features)
    }

    /// Enriches from the token's own feature bundle, which must be loaded.
    pub fn enrich_from_feature_set(self) -> Result<EnrichedToken> {
        let features = match self.feature_set.as_ref().and_then(Reference::as_loaded) {
            Some(feature_set) => Features::from_feature_set(feature_set),
            None => return Err(TokenError::MissingFeatureData { feature: "feature_set" }),
        };
        Ok(self.enrich(features))
    }

    /// Text and index, the key the store deduplicates tokens on.
    pub fn unique_values(&self) -> UniqueValues {
        UniqueValues {
            text: self.text.as_ref().and_then(Reference::id),
            index: self.index,
        }
    }

    /// Snapshot with every reference replaced by its id. The token itself is
    /// left untouched whether or not this succeeds.
    pub fn to_record(&self) -> Result<TokenRecord> {
        Ok(TokenRecord {
            id: self.id,
            text: reference_id("text", &self.text)?,
            index: self.index,
            display: self.display.clone(),
            feature_set: reference_id("feature_set", &self.feature_set)?,
            line: reference_id("line", &self.line)?,
            phrase: reference_id("phrase", &self.phrase)?,
            frequency: reference_id("frequency", &self.frequency)?,
            ..TokenRecord::default()
        })
    }

    pub fn json_encode(&self, exclude: &[&str]) -> Result<Value> {
        self.to_record()?.to_json(exclude)
    }

    /// Feature attributes present in `value` are ignored; use
    /// [`EnrichedToken::json_decode`] to keep them.
    pub fn json_decode(value: Value) -> Result<Self> {
        Ok(Self::from(TokenRecord::from_json(value)?))
    }
}

impl From<TokenRecord> for Token {
    fn from(record: TokenRecord) -> Self {
        Self {
            id: record.id,
            text: record.text.map(Reference::Id),
            index: record.index,
            display: record.display,
            feature_set: record.feature_set.map(Reference::Id),
            line: record.line.map(Reference::Id),
            phrase: record.phrase.map(Reference::Id),
            frequency: record.frequency.map(Reference::Id),
        }
    }
}
