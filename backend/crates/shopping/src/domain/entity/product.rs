//! Product Entity
//!
//! A catalog item put on a group's list.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    GroupId, ProductId, ProductNameId, UserId,
    amount::{Price, Quantity},
    product_status::ProductStatus,
};

#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    pub group_id: GroupId,
    pub product_name_id: ProductNameId,
    pub price: Option<Price>,
    pub quantity: Quantity,
    pub status: ProductStatus,
    /// User who put the product on the list
    pub added_by: UserId,
    /// User who bought it; only set while the status is `Closed`
    pub bought_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Apply an edit made by `editor`. Closing stamps the editor as the
    /// buyer; reopening clears the buyer.
    pub fn apply_update(
        &mut self,
        editor: UserId,
        price: Option<Price>,
        quantity: Quantity,
        status: ProductStatus,
    ) {
        self.price = price;
        self.quantity = quantity;
        self.status = status;
        self.bought_by = match status {
            ProductStatus::Closed => Some(editor),
            ProductStatus::Open => None,
        };
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub group_id: GroupId,
    pub product_name_id: ProductNameId,
    pub quantity: Quantity,
    pub added_by: UserId,
}

/// Product row of a group's list, resolved for display.
#[derive(Debug, Clone)]
pub struct GroupProduct {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: String,
    pub price: Option<Price>,
    pub quantity: Quantity,
    pub status: ProductStatus,
    pub added_by: String,
    pub bought_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            product_id: ProductId::from_raw(1),
            group_id: GroupId::from_raw(1),
            product_name_id: ProductNameId::from_raw(7),
            price: None,
            quantity: Quantity::new(2).unwrap(),
            status: ProductStatus::Open,
            added_by: UserId::from_raw(1),
            bought_by: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_closing_stamps_buyer() {
        let mut p = product();
        let buyer = UserId::from_raw(2);
        p.apply_update(buyer, Some(Price::new(3.5).unwrap()), p.quantity, ProductStatus::Closed);

        assert_eq!(p.status, ProductStatus::Closed);
        assert_eq!(p.bought_by, Some(buyer));
        assert_eq!(p.price.map(|x| x.get()), Some(3.5));
    }

    #[test]
    fn test_open_edit_leaves_no_buyer() {
        let mut p = product();
        p.apply_update(UserId::from_raw(2), None, Quantity::new(5).unwrap(), ProductStatus::Open);
        assert_eq!(p.bought_by, None);
        assert_eq!(p.quantity.get(), 5);

        p.apply_update(UserId::from_raw(2), None, p.quantity, ProductStatus::Closed);
        p.apply_update(UserId::from_raw(3), None, p.quantity, ProductStatus::Open);
        assert_eq!(p.bought_by, None);
    }
}
