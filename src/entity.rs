//! Domain representation of a translation item.

/// A word/translation pair. Identity is the `id`, assigned by the store on
/// insert; callers creating an item leave it zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationItem {
    pub id: i64,
    pub word: String,
    pub translation: String,
}
