use serde::Serialize;

/// A spending category. A default set is seeded at `init`; new ones are
/// created on demand when recording an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
