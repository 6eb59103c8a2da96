//! Catalog - products and complement groups
//!
//! Static lookup data, read-only during normal operation and mutated only
//! through admin create/delete actions. Products reference complement groups
//! by ID (weak reference); group deletion does not cascade into products or
//! existing orders.

mod seed;

use shared::models::{ComplementGroup, ComplementGroupCreate, Product, ProductCreate};
use shared::util::snowflake_id;
use validator::Validate;

use crate::core::{AppError, AppResult};

/// Product / complement-group catalog
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    complement_groups: Vec<ComplementGroup>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog populated with the startup menu
    pub fn seeded() -> Self {
        Self {
            products: seed::products(),
            complement_groups: Vec::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn groups(&self) -> &[ComplementGroup] {
        &self.complement_groups
    }

    pub fn group(&self, id: &str) -> Option<&ComplementGroup> {
        self.complement_groups.iter().find(|g| g.id == id)
    }

    /// Complement groups referenced by a product.
    ///
    /// Dangling references (group deleted after the product was created) are
    /// skipped with a warning.
    pub fn product_groups(&self, product: &Product) -> Vec<&ComplementGroup> {
        product
            .complement_group_ids
            .iter()
            .filter_map(|gid| {
                let group = self.group(gid);
                if group.is_none() {
                    tracing::warn!(
                        product_id = %product.id,
                        group_id = %gid,
                        "Product references missing complement group, skipped"
                    );
                }
                group
            })
            .collect()
    }

    /// Create a product; referenced complement groups must exist at creation
    /// time. Returns the new product ID.
    pub fn create_product(&mut self, payload: ProductCreate) -> AppResult<String> {
        payload.validate()?;
        for gid in &payload.complement_group_ids {
            if self.group(gid).is_none() {
                return Err(AppError::NotFound(format!("complement group {gid}")));
            }
        }

        let id = format!("p{}", snowflake_id());
        let product = Product {
            id: id.clone(),
            name: payload.name,
            description: payload.description.unwrap_or_default(),
            price: payload.price,
            category: payload.category,
            image: payload.image.unwrap_or_default(),
            recipe: payload.recipe,
            complement_group_ids: payload.complement_group_ids,
            combo_items: payload.combo_items,
        };
        tracing::info!(product_id = %id, name = %product.name, "Product created");
        self.products.push(product);
        Ok(id)
    }

    /// Delete a product. Orders keep their snapshots; nothing cascades.
    pub fn delete_product(&mut self, id: &str) -> AppResult<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(AppError::NotFound(format!("product {id}")));
        }
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Create a complement group, enforcing
    /// `0 <= min_choices <= max_choices <= items.len()`.
    /// Returns the new group ID.
    pub fn create_group(&mut self, payload: ComplementGroupCreate) -> AppResult<String> {
        payload.validate()?;
        if payload.min_choices > payload.max_choices {
            return Err(AppError::Validation(format!(
                "min_choices {} exceeds max_choices {}",
                payload.min_choices, payload.max_choices
            )));
        }
        if payload.max_choices as usize > payload.items.len() {
            return Err(AppError::Validation(format!(
                "max_choices {} exceeds item count {}",
                payload.max_choices,
                payload.items.len()
            )));
        }

        let id = format!("g{}", snowflake_id());
        let group = ComplementGroup {
            id: id.clone(),
            name: payload.name,
            min_choices: payload.min_choices,
            max_choices: payload.max_choices,
            items: payload.items,
        };
        tracing::info!(group_id = %id, name = %group.name, "Complement group created");
        self.complement_groups.push(group);
        Ok(id)
    }

    /// Delete a complement group. Products referencing it keep the dangling
    /// ID; lookups skip it.
    pub fn delete_group(&mut self, id: &str) -> AppResult<()> {
        let before = self.complement_groups.len();
        self.complement_groups.retain(|g| g.id != id);
        if self.complement_groups.len() == before {
            return Err(AppError::NotFound(format!("complement group {id}")));
        }
        tracing::info!(group_id = %id, "Complement group deleted");
        Ok(())
    }
}
