//! Cart / order builder
//!
//! Accumulates selected products with quantities and complement selections
//! and computes prices before an order is submitted. Pricing runs in
//! `Decimal` and is rounded to 2 decimal places at the edges.

use rust_decimal::prelude::*;
use shared::models::{ComplementGroup, ComplementItem, Product};
use shared::order::{
    FulfillmentType, Order, OrderItem, OrderStatus, PaymentMethod, SelectedComplement,
};
use shared::util::{now_millis, order_id};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::money::{line_total, to_decimal, to_f64};

/// Cart errors: user-facing validation failures, corrected by re-input
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    #[error("Selections for group '{group_name}' incomplete: {selected} of {needed} required")]
    GroupUnsatisfied {
        group_name: String,
        needed: u32,
        selected: u32,
    },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Per-group selection state while configuring one product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplementSelection {
    groups: Vec<(String, Vec<ComplementItem>)>,
}

impl ComplementSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one item within a group:
    /// - already selected: deselect
    /// - below capacity: append
    /// - at capacity, single-choice group: replace the current selection
    /// - at capacity, multi-choice group: no-op
    pub fn toggle(&mut self, group: &ComplementGroup, item: &ComplementItem) {
        let idx = match self.groups.iter().position(|(gid, _)| gid == &group.id) {
            Some(idx) => idx,
            None => {
                self.groups.push((group.id.clone(), Vec::new()));
                self.groups.len() - 1
            }
        };
        let entry = &mut self.groups[idx].1;

        if let Some(pos) = entry.iter().position(|i| i.id == item.id) {
            entry.remove(pos);
            return;
        }
        if (entry.len() as u32) < group.max_choices {
            entry.push(item.clone());
            return;
        }
        if group.is_single_choice() {
            entry.clear();
            entry.push(item.clone());
        }
        // multi-choice group at capacity: ignore
    }

    pub fn selected(&self, group_id: &str) -> &[ComplementItem] {
        self.groups
            .iter()
            .find(|(gid, _)| gid == group_id)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_count(&self, group_id: &str) -> u32 {
        self.selected(group_id).len() as u32
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &[ComplementItem])> {
        self.groups
            .iter()
            .map(|(gid, items)| (gid.as_str(), items.as_slice()))
    }
}

/// Per-unit price: product base price plus every selected complement price
/// across all groups
pub fn unit_price(product: &Product, selection: &ComplementSelection) -> f64 {
    let mut price = to_decimal(product.price);
    for (_, items) in selection.iter() {
        for item in items {
            price += to_decimal(item.price);
        }
    }
    to_f64(price)
}

/// Every complement group referenced by the product must meet its
/// `min_choices`. Violations block submission; the caller reports which
/// group is unsatisfied.
pub fn validate_selections(
    product: &Product,
    catalog: &Catalog,
    selection: &ComplementSelection,
) -> Result<(), CartError> {
    for group in catalog.product_groups(product) {
        let selected = selection.selected_count(&group.id);
        if selected < group.min_choices {
            return Err(CartError::GroupUnsatisfied {
                group_name: group.name.clone(),
                needed: group.min_choices,
                selected,
            });
        }
    }
    Ok(())
}

/// One cart line: product snapshot plus quantity
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub product_id: String,
    pub name: String,
    /// Per-unit price including complements
    pub unit_price: f64,
    pub quantity: i32,
    pub selections: Option<Vec<SelectedComplement>>,
}

impl CartEntry {
    /// unit_price × quantity
    pub fn total(&self) -> f64 {
        line_total(self.unit_price, self.quantity)
    }
}

/// Transient per-session order builder
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> i32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Add one unit of a product. Products that declare complement groups
    /// require satisfied selections; identical product-plus-selection lines
    /// merge into one entry.
    pub fn add_item(
        &mut self,
        product: &Product,
        catalog: &Catalog,
        selection: &ComplementSelection,
    ) -> Result<(), CartError> {
        validate_selections(product, catalog, selection)?;
        let snapshot = selection_snapshot(catalog, selection);

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.product_id == product.id && e.selections == snapshot)
        {
            entry.quantity += 1;
            return Ok(());
        }

        self.entries.push(CartEntry {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: unit_price(product, selection),
            quantity: 1,
            selections: snapshot,
        });
        Ok(())
    }

    /// Remove one unit of the first line for a product: quantity >= 2
    /// decrements, the last unit deletes the line.
    pub fn remove_one(&mut self, product_id: &str) {
        if let Some(pos) = self.entries.iter().position(|e| e.product_id == product_id) {
            if self.entries[pos].quantity > 1 {
                self.entries[pos].quantity -= 1;
            } else {
                self.entries.remove(pos);
            }
        }
    }

    /// Order total = sum of unit_price × quantity over all lines
    pub fn total(&self) -> f64 {
        let sum: Decimal = self
            .entries
            .iter()
            .map(|e| to_decimal(e.unit_price) * Decimal::from(e.quantity))
            .sum();
        to_f64(sum)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Build the order snapshot and empty the cart. The cart must be
    /// non-empty.
    pub fn checkout(
        &mut self,
        order_number: String,
        customer_name: impl Into<String>,
        payment_method: PaymentMethod,
        fulfillment: FulfillmentType,
    ) -> Result<Order, CartError> {
        if self.entries.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let items: Vec<OrderItem> = self
            .entries
            .iter()
            .map(|e| OrderItem {
                product_id: e.product_id.clone(),
                name: e.name.clone(),
                quantity: e.quantity,
                unit_price: e.unit_price,
                total_price: e.total(),
                selected_complements: e.selections.clone(),
            })
            .collect();

        let subtotal = self.total();
        let tax = 0.0;
        let total = to_f64(to_decimal(subtotal) + to_decimal(tax));
        let now = now_millis();

        let order = Order {
            id: order_id(),
            order_number,
            customer_name: customer_name.into(),
            items,
            subtotal,
            tax,
            total,
            status: OrderStatus::default(),
            payment_method,
            fulfillment,
            created_at: now,
            updated_at: now,
        };
        self.entries.clear();
        Ok(order)
    }
}

/// Snapshot the selections for the order item: group-name copies plus chosen
/// items. Groups with nothing selected are omitted; `None` when nothing at
/// all is selected.
fn selection_snapshot(
    catalog: &Catalog,
    selection: &ComplementSelection,
) -> Option<Vec<SelectedComplement>> {
    let selected: Vec<SelectedComplement> = selection
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(gid, items)| SelectedComplement {
            group_name: catalog
                .group(gid)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| gid.to_string()),
            items: items.to_vec(),
        })
        .collect();
    if selected.is_empty() { None } else { Some(selected) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ComplementGroupCreate, ProductCategory, ProductCreate};

    fn comp(id: &str, name: &str, price: f64) -> ComplementItem {
        ComplementItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }

    fn plain_product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Produto {id}"),
            description: String::new(),
            price,
            category: ProductCategory::Fritos,
            image: String::new(),
            recipe: Vec::new(),
            complement_group_ids: Vec::new(),
            combo_items: None,
        }
    }

    /// Catalog with one product attached to one group
    fn catalog_with_group(min: u32, max: u32) -> (Catalog, String, String) {
        let mut catalog = Catalog::new();
        let gid = catalog
            .create_group(ComplementGroupCreate {
                name: "Molhos".to_string(),
                min_choices: min,
                max_choices: max,
                items: vec![
                    comp("c1", "Ketchup", 0.0),
                    comp("c2", "Maionese Verde", 1.50),
                    comp("c3", "Pimenta da Casa", 2.00),
                ],
            })
            .unwrap();
        let pid = catalog
            .create_product(ProductCreate {
                name: "Coxinha Premium".to_string(),
                description: None,
                price: 10.0,
                category: ProductCategory::Fritos,
                image: None,
                recipe: Vec::new(),
                complement_group_ids: vec![gid.clone()],
                combo_items: None,
            })
            .unwrap();
        (catalog, pid, gid)
    }

    #[test]
    fn total_is_sum_of_lines() {
        let catalog = Catalog::new();
        let mut cart = Cart::new();
        let p1 = plain_product("p1", 8.50);
        let p2 = plain_product("p2", 7.90);
        let empty = ComplementSelection::new();

        cart.add_item(&p1, &catalog, &empty).unwrap();
        cart.add_item(&p1, &catalog, &empty).unwrap();
        cart.add_item(&p2, &catalog, &empty).unwrap();

        assert_eq!(cart.entries().len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), 8.50 * 2.0 + 7.90);
    }

    #[test]
    fn add_then_remove_round_trips_total() {
        let catalog = Catalog::new();
        let mut cart = Cart::new();
        let p1 = plain_product("p1", 8.50);
        let empty = ComplementSelection::new();

        cart.add_item(&p1, &catalog, &empty).unwrap();
        let before = cart.total();

        cart.add_item(&p1, &catalog, &empty).unwrap();
        cart.remove_one("p1");
        assert_eq!(cart.total(), before);

        cart.remove_one("p1");
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn unit_price_includes_selected_complements() {
        let (catalog, pid, gid) = catalog_with_group(0, 3);
        let product = catalog.product(&pid).unwrap();
        let group = catalog.group(&gid).unwrap();

        let mut selection = ComplementSelection::new();
        selection.toggle(group, &group.items[1]); // +1.50
        selection.toggle(group, &group.items[2]); // +2.00

        assert_eq!(unit_price(product, &selection), 13.50);
    }

    #[test]
    fn min_choices_two_rejects_below_and_accepts_at() {
        let (catalog, pid, gid) = catalog_with_group(2, 3);
        let product = catalog.product(&pid).unwrap().clone();
        let group = catalog.group(&gid).unwrap().clone();
        let mut cart = Cart::new();

        let mut selection = ComplementSelection::new();
        selection.toggle(&group, &group.items[0]);
        let err = cart.add_item(&product, &catalog, &selection).unwrap_err();
        assert_eq!(
            err,
            CartError::GroupUnsatisfied {
                group_name: "Molhos".to_string(),
                needed: 2,
                selected: 1,
            }
        );

        selection.toggle(&group, &group.items[1]);
        assert!(cart.add_item(&product, &catalog, &selection).is_ok());

        selection.toggle(&group, &group.items[2]);
        assert!(cart.add_item(&product, &catalog, &selection).is_ok());
    }

    #[test]
    fn single_choice_group_replaces_on_distinct_selection() {
        let (catalog, _, gid) = catalog_with_group(1, 1);
        let group = catalog.group(&gid).unwrap();

        let mut selection = ComplementSelection::new();
        selection.toggle(group, &group.items[0]);
        assert_eq!(selection.selected_count(&group.id), 1);
        assert_eq!(selection.selected(&group.id)[0].id, "c1");

        // distinct selection at capacity replaces
        selection.toggle(group, &group.items[1]);
        assert_eq!(selection.selected_count(&group.id), 1);
        assert_eq!(selection.selected(&group.id)[0].id, "c2");
    }

    #[test]
    fn reselecting_same_item_deselects_it() {
        let (catalog, _, gid) = catalog_with_group(1, 1);
        let group = catalog.group(&gid).unwrap();

        let mut selection = ComplementSelection::new();
        selection.toggle(group, &group.items[0]);
        selection.toggle(group, &group.items[0]);
        assert!(selection.selected(&group.id).is_empty());
    }

    #[test]
    fn multi_choice_group_at_capacity_ignores_new_selection() {
        let (catalog, _, gid) = catalog_with_group(0, 2);
        let group = catalog.group(&gid).unwrap();

        let mut selection = ComplementSelection::new();
        selection.toggle(group, &group.items[0]);
        selection.toggle(group, &group.items[1]);
        selection.toggle(group, &group.items[2]); // at capacity, ignored
        assert_eq!(selection.selected_count(&group.id), 2);
        assert!(selection.selected(&group.id).iter().all(|i| i.id != "c3"));
    }

    #[test]
    fn identical_selections_merge_into_one_line() {
        let (catalog, pid, gid) = catalog_with_group(1, 2);
        let product = catalog.product(&pid).unwrap().clone();
        let group = catalog.group(&gid).unwrap().clone();
        let mut cart = Cart::new();

        let mut selection = ComplementSelection::new();
        selection.toggle(&group, &group.items[1]);

        cart.add_item(&product, &catalog, &selection).unwrap();
        cart.add_item(&product, &catalog, &selection).unwrap();
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].quantity, 2);

        // a different selection opens a new line
        let mut other = ComplementSelection::new();
        other.toggle(&group, &group.items[0]);
        cart.add_item(&product, &catalog, &other).unwrap();
        assert_eq!(cart.entries().len(), 2);
    }

    #[test]
    fn checkout_rejects_empty_cart() {
        let mut cart = Cart::new();
        let err = cart
            .checkout(
                "PED1".to_string(),
                "Maria",
                PaymentMethod::Cash,
                FulfillmentType::DineIn,
            )
            .unwrap_err();
        assert_eq!(err, CartError::EmptyCart);
    }

    #[test]
    fn checkout_snapshots_items_and_clears_cart() {
        let (catalog, pid, gid) = catalog_with_group(1, 2);
        let product = catalog.product(&pid).unwrap().clone();
        let group = catalog.group(&gid).unwrap().clone();
        let mut cart = Cart::new();

        let mut selection = ComplementSelection::new();
        selection.toggle(&group, &group.items[1]); // +1.50
        cart.add_item(&product, &catalog, &selection).unwrap();
        cart.add_item(&product, &catalog, &selection).unwrap();

        let order = cart
            .checkout(
                "PED1".to_string(),
                "Maria",
                PaymentMethod::Pix,
                FulfillmentType::Pickup,
            )
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.status, OrderStatus::Received);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].unit_price, 11.50);
        assert_eq!(order.items[0].total_price, 23.0);
        assert_eq!(order.subtotal, 23.0);
        assert_eq!(order.tax, 0.0);
        assert_eq!(order.total, order.subtotal + order.tax);
        assert_eq!(order.created_at, order.updated_at);

        let complements = order.items[0].selected_complements.as_ref().unwrap();
        assert_eq!(complements.len(), 1);
        assert_eq!(complements[0].group_name, "Molhos");
        assert_eq!(complements[0].items[0].name, "Maionese Verde");
    }
}
