//! Property-based tests for the cart and catalog.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated operation sequences.

use std::sync::Arc;

use proptest::prelude::*;

use storefront_core::{CartStore, Catalog, CoreError, ProductId};

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(u32),
    Decrease(u32),
    Remove(u32),
}

/// Ids 0..=8 cover every demo product plus ids the catalog does not know.
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..=8).prop_map(Op::Add),
        (0u32..=8).prop_map(Op::Decrease),
        (0u32..=8).prop_map(Op::Remove),
    ]
}

fn apply(cart: &mut CartStore, op: Op) {
    match op {
        Op::Add(id) => {
            let _ = cart.add(ProductId::new(id));
        }
        Op::Decrease(id) => {
            cart.decrease(ProductId::new(id));
        }
        Op::Remove(id) => {
            cart.remove(ProductId::new(id));
        }
    }
}

fn cart_after(ops: &[Op]) -> CartStore {
    let mut cart = CartStore::new(Arc::new(Catalog::demo()));
    for op in ops {
        apply(&mut cart, *op);
    }
    cart
}

proptest! {
    #[test]
    fn quantities_are_always_positive(ops in prop::collection::vec(op(), 0..64)) {
        let cart = cart_after(&ops);

        for (id, qty) in cart.snapshot() {
            prop_assert!(qty >= 1, "product {} stored with quantity {}", id, qty);
            prop_assert!(cart.catalog().contains(id));
        }
    }

    #[test]
    fn add_then_decrease_is_identity(
        ops in prop::collection::vec(op(), 0..32),
        id in 0u32..=8,
    ) {
        let mut cart = cart_after(&ops);
        let before = cart.snapshot();
        let product_id = ProductId::new(id);

        match cart.add(product_id) {
            Ok(quantity) => {
                prop_assert!(cart.catalog().contains(product_id));
                prop_assert_eq!(quantity, before.get(&product_id).copied().unwrap_or(0) + 1);
            }
            Err(err) => {
                prop_assert!(!cart.catalog().contains(product_id));
                prop_assert_eq!(err, CoreError::InvalidProductId(product_id));
                prop_assert_eq!(cart.snapshot(), before.clone());
            }
        }
        cart.decrease(product_id);

        prop_assert_eq!(cart.snapshot(), before);
    }

    #[test]
    fn totals_match_line_items(ops in prop::collection::vec(op(), 0..64)) {
        let cart = cart_after(&ops);
        let lines = cart.line_items();

        let count: u64 = lines.iter().map(|l| u64::from(l.quantity)).sum();
        let amount: i64 = lines
            .iter()
            .map(|l| l.product.price.minor() * i64::from(l.quantity))
            .sum();

        prop_assert_eq!(cart.total_item_count(), count);
        prop_assert_eq!(cart.total_amount().minor(), amount);
        if cart.is_empty() {
            prop_assert_eq!(cart.total_item_count(), 0);
            prop_assert!(cart.total_amount().is_zero());
        }
    }

    #[test]
    fn checkout_never_mutates(ops in prop::collection::vec(op(), 0..32)) {
        let cart = cart_after(&ops);
        let before = cart.snapshot();

        match cart.checkout() {
            Ok(summary) => {
                prop_assert_eq!(summary.item_count, cart.total_item_count());
                prop_assert_eq!(summary.total_amount, cart.total_amount());
            }
            Err(err) => {
                prop_assert_eq!(err, CoreError::EmptyCart);
                prop_assert!(before.is_empty());
            }
        }

        prop_assert_eq!(cart.snapshot(), before);
    }

    #[test]
    fn filter_is_case_and_whitespace_insensitive(
        pad_left in " {0,3}",
        pad_right in " {0,3}",
        upper in any::<bool>(),
    ) {
        let catalog = Catalog::demo();
        let core = if upper { "SHOES" } else { "shoes" };
        let term = format!("{pad_left}{core}{pad_right}");

        let hits = catalog.filter(&term, "All");
        prop_assert_eq!(hits.len(), 1);
        prop_assert_eq!(hits[0].name.as_str(), "Running Shoes");
    }

    #[test]
    fn filter_results_are_a_subsequence_of_the_catalog(
        term in "[a-zA-Z ]{0,6}",
        category in prop_oneof![
            Just("All".to_string()),
            Just("Electronics".to_string()),
            Just("Fashion".to_string()),
            Just("Garden".to_string()),
        ],
    ) {
        let catalog = Catalog::demo();
        let hits: Vec<u32> = catalog
            .filter(&term, &category)
            .iter()
            .map(|p| p.id.get())
            .collect();

        let mut sorted = hits.clone();
        sorted.sort_unstable();
        prop_assert_eq!(hits, sorted);
    }
}

#[test]
fn filter_empty_term_all_category_returns_catalog() {
    let catalog = Catalog::demo();
    let ids: Vec<u32> = catalog.filter("", "All").iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn electronics_are_products_one_and_two() {
    let catalog = Catalog::demo();
    let ids: Vec<u32> = catalog
        .filter("", "Electronics")
        .iter()
        .map(|p| p.id.get())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}
