//! The curtain record and its column widths.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type CurtainId = i32;

pub const NAME_MAX_LEN: usize = 100;
pub const MATERIAL_MAX_LEN: usize = 50;
pub const COLOR_MAX_LEN: usize = 30;

/// `NUMERIC(10, 2)`: two fractional digits, eight integer digits.
pub const PRICE_SCALE: u32 = 2;
pub const PRICE_INTEGER_DIGITS: u32 = 8;

/// One priced inventory item. The caller supplies `id`; `price` keeps two
/// fractional digits in storage and is serialized as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Curtain {
    pub id: CurtainId,
    #[schema(example = "Velvet Red", max_length = 100)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(value_type = String, example = "1200.00")]
    pub price: Decimal,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    #[schema(max_length = 50)]
    pub material: Option<String>,
    #[serde(default)]
    #[schema(max_length = 30)]
    pub color: Option<String>,
}

impl Curtain {
    /// Record with only the required fields set.
    pub fn new(id: CurtainId, name: impl Into<String>, price: Decimal) -> Self {
        Curtain {
            id,
            name: name.into(),
            description: None,
            price,
            stock_quantity: 0,
            material: None,
            color: None,
        }
    }
}
