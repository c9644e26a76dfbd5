use nutype::nutype;
use serde::Serialize;

/// Stable identifier of a catalog item.
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
))]
pub struct ItemId(u64);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ItemName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Category(String);

/// Non-negative, finite price.
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Price(f64);

/// One searchable product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: ItemName,
    pub category: Category,
    pub price: Price,
}

impl CatalogItem {
    pub fn new(id: ItemId, name: ItemName, category: Category, price: Price) -> Self {
        Self {
            id,
            name,
            category,
            price,
        }
    }

    /// Identity rule used by the recently-viewed store.
    pub fn same_id(&self, other: &CatalogItem) -> bool {
        self.id == other.id
    }
}
