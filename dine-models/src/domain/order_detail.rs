use crate::{
    domain::common::PageParams,
    entities::order_detail::ActiveModel,
};
use sea_orm::{DeriveIntoActiveModel, Set};
use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

/// Payload to add a menu item to an order.
///
/// When the order already holds the menu item the amount is added to the
/// existing line instead of creating a second one.
#[derive(Clone, Debug, PartialEq, Eq, DeriveIntoActiveModel, Validate, Serialize, Deserialize)]
pub struct NewOrderDetail {
    #[validate(range(min = 1, message = "order_id must be positive"))]
    pub order_id: i32,
    #[validate(range(min = 1, message = "menu_item_id must be positive"))]
    pub menu_item_id: i32,
    #[validate(range(min = 1, message = "amount must be at least 1"))]
    pub amount: i32,
}

/// Partial update of an order detail; absent fields are left unchanged
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate, Serialize, Deserialize)]
pub struct UpdateOrderDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "order_id must be positive"))]
    pub order_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "menu_item_id must be positive"))]
    pub menu_item_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "amount must be at least 1"))]
    pub amount: Option<i32>,
}

impl UpdateOrderDetail {
    /// True when the payload carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.order_id.is_none() && self.menu_item_id.is_none() && self.amount.is_none()
    }

    /// Set the present fields on `active`.
    pub fn apply(self, active: &mut ActiveModel) {
        if let Some(order_id) = self.order_id {
            active.order_id = Set(order_id);
        }
        if let Some(menu_item_id) = self.menu_item_id {
            active.menu_item_id = Set(menu_item_id);
        }
        if let Some(amount) = self.amount {
            active.amount = Set(amount);
        }
    }
}

/// Query params for paging order details
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderDetailPageParams {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub order_id: Option<i32>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}
