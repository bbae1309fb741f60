/// An author record as held by the store.
///
/// Identifiers are `i32` because the GraphQL `Int` type is signed 32-bit.
/// Records are append-only: once created they are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl Author {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
