//! Startup stock seed data

use shared::models::{Ingredient, StockUnit};

fn ingredient(id: &str, name: &str, unit: StockUnit, current: f64, min: f64, cost: f64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        unit,
        current_stock: current,
        min_stock: min,
        cost_price: cost,
    }
}

/// The fixed startup stock levels
pub fn ingredients() -> Vec<Ingredient> {
    vec![
        ingredient("i1", "Massa Base", StockUnit::Kg, 50.0, 10.0, 5.50),
        ingredient("i2", "Frango Desfiado", StockUnit::Kg, 30.0, 5.0, 18.00),
        ingredient("i3", "Óleo Vegetal", StockUnit::Lt, 20.0, 4.0, 8.00),
        ingredient("i4", "Embalagem Combo", StockUnit::Un, 500.0, 100.0, 0.45),
        ingredient("i5", "Carne Bovina", StockUnit::Kg, 25.0, 5.0, 32.00),
    ]
}
