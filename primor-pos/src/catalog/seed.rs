//! Startup menu seed data

use shared::models::{Product, ProductCategory, RecipeEntry};

fn recipe(entries: &[(&str, f64)]) -> Vec<RecipeEntry> {
    entries
        .iter()
        .map(|(id, qty)| RecipeEntry {
            ingredient_id: (*id).to_string(),
            quantity: *qty,
        })
        .collect()
}

/// The fixed startup menu
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Coxinha Suprema".to_string(),
            description: "Massa de batata especial com recheio de frango e catupiry.".to_string(),
            price: 8.50,
            category: ProductCategory::Fritos,
            image: "https://images.unsplash.com/photo-1626082927389-6cd097cdc6ec?auto=format&fit=crop&q=80&w=400".to_string(),
            recipe: recipe(&[("i1", 0.1), ("i2", 0.05)]),
            complement_group_ids: Vec::new(),
            combo_items: None,
        },
        Product {
            id: "p2".to_string(),
            name: "Combo Galera (100 Salgados)".to_string(),
            description: "100 salgados mini variados + 2 Refrigerantes 2L.".to_string(),
            price: 119.90,
            category: ProductCategory::Combos,
            image: "https://images.unsplash.com/photo-1541592106381-b31e9677c0e5?auto=format&fit=crop&q=80&w=400".to_string(),
            recipe: recipe(&[("i4", 1.0)]),
            complement_group_ids: Vec::new(),
            combo_items: Some(vec![
                "50 Mini Coxinhas".to_string(),
                "50 Mini Quibes".to_string(),
                "2L Coca-Cola".to_string(),
                "2L Guaraná".to_string(),
            ]),
        },
        Product {
            id: "p3".to_string(),
            name: "Kibe com Queijo".to_string(),
            description: "Kibe tradicional frito recheado com mussarela argentina.".to_string(),
            price: 7.90,
            category: ProductCategory::Fritos,
            image: "https://images.unsplash.com/photo-1606331123988-97bc1b2a7439?auto=format&fit=crop&q=80&w=400".to_string(),
            recipe: recipe(&[("i1", 0.1)]),
            complement_group_ids: Vec::new(),
            combo_items: None,
        },
        Product {
            id: "p4".to_string(),
            name: "Suco Natural Laranja".to_string(),
            description: "Suco de laranja 100% natural espremido na hora.".to_string(),
            price: 9.00,
            category: ProductCategory::Bebidas,
            image: "https://images.unsplash.com/photo-1621506289937-a8e4df240d0b?auto=format&fit=crop&q=80&w=400".to_string(),
            recipe: Vec::new(),
            complement_group_ids: Vec::new(),
            combo_items: None,
        },
        Product {
            id: "p5".to_string(),
            name: "Combo Duplo Snack".to_string(),
            description: "2 Salgados Grandes + 1 Suco 300ml.".to_string(),
            price: 24.90,
            category: ProductCategory::Combos,
            image: "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?auto=format&fit=crop&q=80&w=400".to_string(),
            recipe: recipe(&[("i4", 1.0)]),
            complement_group_ids: Vec::new(),
            combo_items: Some(vec![
                "1 Coxinha".to_string(),
                "1 Kibe".to_string(),
                "1 Suco Laranja".to_string(),
            ]),
        },
        Product {
            id: "p6".to_string(),
            name: "Pão de Queijo Mineiro".to_string(),
            description: "O verdadeiro pão de queijo com queijo canastra.".to_string(),
            price: 4.50,
            category: ProductCategory::Assados,
            image: "https://images.unsplash.com/photo-1598143102012-4097b059a7a7?auto=format&fit=crop&q=80&w=400".to_string(),
            recipe: recipe(&[("i1", 0.05)]),
            complement_group_ids: Vec::new(),
            combo_items: None,
        },
    ]
}
