//! Order placement types.
//!
//! Orders are constructed on demand from the request payload and never
//! stored; the response is the payload echoed back with a generated
//! identifier, a date stamp, and a fabricated settlement token.

use chrono::{DateTime, Utc};
use pizza_stand_core::{FranchiseId, MenuItemId, OrderId, StoreId};
use serde::{Deserialize, Serialize};

/// Order payload submitted by the front-end.
///
/// Every field is optional; the fixture performs no stock, pricing, or
/// payment validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub franchise_id: Option<FranchiseId>,
    pub store_id: Option<StoreId>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_id: MenuItemId,
    pub description: String,
    pub price: f64,
}

/// A placed order: the submitted payload plus generated fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub franchise_id: Option<FranchiseId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
    pub items: Vec<OrderItem>,
    pub date: DateTime<Utc>,
}

/// Response of `POST /api/order`: the order plus its settlement token.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub order: Order,
    pub jwt: String,
}

impl OrderDraft {
    /// Promote the draft into a placed order.
    #[must_use]
    pub fn into_order(self, id: OrderId, date: DateTime<Utc>) -> Order {
        Order {
            id,
            franchise_id: self.franchise_id,
            store_id: self.store_id,
            items: self.items,
            date,
        }
    }
}
