use crate::enums::card_product_kind::CardProductKind;
use serde::{Deserialize, Serialize};

/// A sellable gift-card product offered by a vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftCardProduct {
    pub id: String,
    pub vendor_id: String,
    pub kind: CardProductKind,
    pub label: String,
    pub price_cents: i64,
}
