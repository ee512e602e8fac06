//! Purchase record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fontspace_core::{FontId, Price, PurchaseId, UserId};

use super::Font;

/// A premium font bought by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: PurchaseId,
    pub user_id: UserId,
    pub font_id: FontId,
    pub amount: Price,
    pub purchase_date: NaiveDate,
    /// Whether the purchase is listed on the buyer's public profile.
    pub public: bool,
}

/// A purchase with its font joined in at read time.
///
/// `font` is `None` when the purchased font no longer exists in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseWithFont {
    #[serde(flatten)]
    pub purchase: Purchase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}
