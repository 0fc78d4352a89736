use bitflags::bitflags;

bitflags! {
    /// Axes along which two tokens can be compared.
    /// Several axes at once must all match.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureAxes: u8 {
        /// Exact equality of the normalized form.
        const WORD = 1;
        const LEMMATA = 2;
        const SEMANTIC = 4;
        const SOUND = 8;
    }
}

impl FeatureAxes {
    /// Used for `"lemmata + semantic"` and for every name not listed in
    /// [`FeatureAxes::from_feature_name`].
    pub const FALLBACK: Self = Self::LEMMATA.union(Self::SEMANTIC);

    /// Maps a feature name to its axes. Unrecognized names, including
    /// `"form"`, fall back to [`FeatureAxes::FALLBACK`].
    pub fn from_feature_name(name: &str) -> Self {
        match name {
            "word" => Self::WORD,
            "lemmata" => Self::LEMMATA,
            "semantic" => Self::SEMANTIC,
            "sound" => Self::SOUND,
            _ => Self::FALLBACK,
        }
    }

    /// Whether `from_feature_name` resolves `name` deliberately rather than by fallback.
    pub fn is_known_name(name: &str) -> bool {
        matches!(name, "word" | "lemmata" | "semantic" | "sound" | "lemmata + semantic")
    }
}
