//! Tests for bundle pricing and display-name parsing

use psyche_core::bundle::{display_name, quote, DEFAULT_BUNDLE_ICON};
use psyche_core::{Bundle, CatalogItem, ItemStatus};

fn item(id: &str, price: f64) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: id.to_uppercase(),
        symbol: None,
        keywords: Vec::new(),
        doctrine: String::new(),
        preview_content: String::new(),
        full_content: String::new(),
        price,
        status: ItemStatus::Available,
        order_index: None,
    }
}

fn bundle(ids: &[&str], price: f64) -> Bundle {
    Bundle {
        id: "bundle".to_string(),
        name: "Bundle".to_string(),
        description: String::new(),
        price,
        discount_percent: 0,
        metaphor_ids: ids.iter().map(|s| s.to_string()).collect(),
    }
}

// --- quote ---

#[test]
fn empty_item_set_is_a_subscription() {
    let q = quote(&bundle(&[], 9.99), &[item("a", 5.0)]);
    assert!(q.is_subscription);
    assert_eq!(q.original_price, 0.0);
    assert_eq!(q.final_price, 9.99);
    assert!(!q.shows_savings);
}

#[test]
fn original_price_sums_referenced_items() {
    let catalog = [item("a", 5.0), item("b", 5.0), item("c", 7.0)];
    let q = quote(&bundle(&["a", "b"], 8.0), &catalog);
    assert!(!q.is_subscription);
    assert_eq!(q.original_price, 10.0);
    assert!(q.shows_savings);
}

#[test]
fn missing_ids_contribute_zero_without_error() {
    let catalog = [item("a", 5.0)];
    let q = quote(&bundle(&["a", "ghost"], 3.0), &catalog);
    assert_eq!(q.original_price, 5.0);
    assert!(q.shows_savings);
}

#[test]
fn all_missing_ids_sum_to_zero() {
    let q = quote(&bundle(&["ghost", "phantom"], 3.0), &[]);
    assert!(!q.is_subscription);
    assert_eq!(q.original_price, 0.0);
    assert!(!q.shows_savings, "no savings shown when the sum understates");
}

#[test]
fn no_savings_when_bundle_is_not_cheaper() {
    let catalog = [item("a", 4.0), item("b", 4.0)];
    let q = quote(&bundle(&["a", "b"], 8.0), &catalog);
    assert_eq!(q.original_price, 8.0);
    assert!(!q.shows_savings);
}

#[test]
fn discount_percent_carries_through() {
    let q = quote(
        &Bundle {
            discount_percent: 20,
            ..bundle(&["a"], 4.0)
        },
        &[item("a", 5.0)],
    );
    assert_eq!(q.discount_percent, 20);
}

// --- display_name ---

#[test]
fn glyph_and_space_splits() {
    let (icon, name) = display_name("📚 Complete Library");
    assert_eq!(icon, "📚");
    assert_eq!(name, "Complete Library");
}

#[test]
fn glyph_and_dot_separator_splits() {
    let (icon, name) = display_name("🎵. Frequency Pass");
    assert_eq!(icon, "🎵");
    assert_eq!(name, "Frequency Pass");
}

#[test]
fn plain_name_gets_default_icon() {
    let (icon, name) = display_name("Starter Pack");
    assert_eq!(icon, DEFAULT_BUNDLE_ICON);
    assert_eq!(name, "Starter Pack");
}

#[test]
fn glyph_without_separator_is_left_alone() {
    let (icon, name) = display_name("★Special");
    assert_eq!(icon, DEFAULT_BUNDLE_ICON);
    assert_eq!(name, "★Special");
}

#[test]
fn glyph_only_name_is_left_alone() {
    let (icon, name) = display_name("📚");
    assert_eq!(icon, DEFAULT_BUNDLE_ICON);
    assert_eq!(name, "📚");
}

#[test]
fn empty_name_gets_default_icon() {
    let (icon, name) = display_name("");
    assert_eq!(icon, DEFAULT_BUNDLE_ICON);
    assert_eq!(name, "");
}
