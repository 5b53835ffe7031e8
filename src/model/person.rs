use chrono::NaiveDate;

/// The flat demo domain used by the token-stream codecs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    /// Tri-state: `Some(true)`, `Some(false)`, or `None` for unset. Decoding
    /// this field is best-effort and never fails.
    pub enabled: Option<bool>,
}
