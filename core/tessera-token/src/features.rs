use std::collections::BTreeSet;
use std::ops::Deref;

use serde_json::Value;
use tessera_protocol::{FeatureAxes, FeatureSet};

use crate::error::{Result, TokenError};
use crate::record::TokenRecord;
use crate::token::Token;

/// Feature attributes filled in by the enrichment step.
///
/// Any of them may be missing when the source language has no data for that
/// feature; a match consulting a missing one fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Features {
    pub form: Option<String>,
    pub lemmata: Option<BTreeSet<String>>,
    pub semantic: Option<BTreeSet<String>>,
    pub sound: Option<BTreeSet<String>>,
}

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    pub fn lemmata<I, S>(mut self, lemmata: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lemmata = Some(lemmata.into_iter().map(Into::into).collect());
        self
    }

    pub fn semantic<I, S>(mut self, semantic: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.semantic = Some(semantic.into_iter().map(Into::into).collect());
        self
    }

    pub fn sound<I, S>(mut self, sound: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sound = Some(sound.into_iter().map(Into::into).collect());
        self
    }

    pub fn from_feature_set(feature_set: &FeatureSet) -> Self {
        Self::new()
            .form(feature_set.form.as_str())
            .lemmata(feature_set.lemmata.iter().cloned())
            .semantic(feature_set.semantic.iter().cloned())
            .sound(feature_set.sound.iter().cloned())
    }

    fn write_into(&self, record: &mut TokenRecord) {
        record.form = self.form.clone();
        record.lemmata = self.lemmata.as_ref().map(|s| s.iter().cloned().collect());
        record.semantic = self.semantic.as_ref().map(|s| s.iter().cloned().collect());
        record.sound = self.sound.as_ref().map(|s| s.iter().cloned().collect());
    }

    fn read_from(record: &mut TokenRecord) -> Self {
        Self {
            form: record.form.take(),
            lemmata: record.lemmata.take().map(|v| v.into_iter().collect()),
            semantic: record.semantic.take().map(|v| v.into_iter().collect()),
            sound: record.sound.take().map(|v| v.into_iter().collect()),
        }
    }
}

fn populated<'a, T>(value: &'a Option<T>, feature: &'static str) -> Result<&'a T> {
    value.as_ref().ok_or(TokenError::MissingFeatureData { feature })
}

fn share_any(
    left: &Option<BTreeSet<String>>,
    right: &Option<BTreeSet<String>>,
    feature: &'static str,
) -> Result<bool> {
    let left = populated(left, feature)?;
    let right = populated(right, feature)?;
    Ok(left.intersection(right).next().is_some())
}

/// A token whose feature attributes have been populated; only these match.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedToken {
    token: Token,
    features: Features,
}

impl EnrichedToken {
    pub fn new(token: Token, features: Features) -> Self {
        Self { token, features }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn into_parts(self) -> (Token, Features) {
        (self.token, self.features)
    }

    /// Whether `self` and `other` agree on every axis in `axes`.
    ///
    /// Axes are checked in the order word, lemmata, semantic, sound and
    /// checking stops at the first one that disagrees, so a later axis may
    /// be unpopulated without error.
    pub fn matches(&self, other: &EnrichedToken, axes: FeatureAxes) -> Result<bool> {
        let (a, b) = (&self.features, &other.features);

        if axes.contains(FeatureAxes::WORD)
            && populated(&a.form, "form")? != populated(&b.form, "form")?
        {
            return Ok(false);
        }
        if axes.contains(FeatureAxes::LEMMATA) && !share_any(&a.lemmata, &b.lemmata, "lemmata")? {
            return Ok(false);
        }
        if axes.contains(FeatureAxes::SEMANTIC)
            && !share_any(&a.semantic, &b.semantic, "semantic")?
        {
            return Ok(false);
        }
        if axes.contains(FeatureAxes::SOUND) && !share_any(&a.sound, &b.sound, "sound")? {
            return Ok(false);
        }
        Ok(true)
    }

    /// [`EnrichedToken::matches`] on a feature name such as `"lemmata"`.
    /// Unrecognized names compare lemmata and semantic together.
    pub fn match_feature(&self, other: &EnrichedToken, feature: &str) -> Result<bool> {
        self.matches(other, FeatureAxes::from_feature_name(feature))
    }

    pub fn to_record(&self) -> Result<TokenRecord> {
        let mut record = self.token.to_record()?;
        self.features.write_into(&mut record);
        Ok(record)
    }

    pub fn json_encode(&self, exclude: &[&str]) -> Result<Value> {
        self.to_record()?.to_json(exclude)
    }

    pub fn json_decode(value: Value) -> Result<Self> {
        Ok(Self::from(TokenRecord::from_json(value)?))
    }
}

impl Deref for EnrichedToken {
    type Target = Token;

    fn deref(&self) -> &Token {
        &self.token
    }
}

impl From<TokenRecord> for EnrichedToken {
    fn from(mut record: TokenRecord) -> Self {
        let features = Features::read_from(&mut record);
        Self::new(Token::from(record), features)
    }
}
