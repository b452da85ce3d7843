//! Terminal output formatting

use colored::Colorize;
use psyche_core::{Access, BundleView, ContentView, ItemView, StorefrontView};

const DEFAULT_SYMBOL: &str = "✦";

/// One catalog card as a block of lines.
pub fn format_item_card(view: &ItemView) -> String {
    let item = &view.item;
    let symbol = item.symbol.as_deref().unwrap_or(DEFAULT_SYMBOL);
    let keywords = item.keywords.join(" · ");

    let affordance = match view.access {
        Access::ComingSoon => "Coming Soon".dimmed().to_string(),
        Access::Owned => format!("{}  psyche read {}", "owned".green(), item.id),
        Access::Locked => format!("${:.2}  psyche buy {}", item.price, item.id),
    };

    let mut lines = vec![format!("  {symbol} {}", item.title.bold())];
    if !keywords.is_empty() {
        lines.push(format!("    {}", keywords.dimmed()));
    }
    if !item.doctrine.is_empty() {
        lines.push(format!("    {}", item.doctrine.italic()));
    }
    lines.push(format!("    {affordance}"));
    lines.join("\n")
}

/// One bundle card as a block of lines.
pub fn format_bundle_card(view: &BundleView) -> String {
    let quote = &view.quote;

    let price = if quote.is_subscription {
        format!("${:.2}/mo", quote.final_price)
    } else if quote.shows_savings {
        format!(
            "${:.2} {}",
            quote.final_price,
            format!("${:.2}", quote.original_price).strikethrough().dimmed()
        )
    } else {
        format!("${:.2}", quote.final_price)
    };

    let mut lines = vec![format!("  {} {}", view.icon, view.display_name.bold())];
    if !view.bundle.description.is_empty() {
        lines.push(format!("    {}", view.bundle.description.dimmed()));
    }
    lines.push(format!("    {price}"));
    if quote.discount_percent > 0 {
        lines.push(format!(
            "    {}",
            format!("Save {}%", quote.discount_percent).green()
        ));
    }
    let action = if quote.is_subscription { "Subscribe" } else { "Purchase" };
    lines.push(format!("    {action}: psyche buy --bundle {}", view.bundle.id));
    lines.join("\n")
}

/// Renders the full storefront view.
pub fn render_view(view: &StorefrontView) {
    if view.degraded {
        eprintln!(
            "  {} Catalog service unreachable — showing the built-in library.",
            "\u{26a1}".yellow()
        );
        eprintln!();
    }

    let (available, coming): (Vec<&ItemView>, Vec<&ItemView>) = view
        .items
        .iter()
        .partition(|i| i.access != Access::ComingSoon);

    println!("{}", "  METAPHOR LIBRARY".bold());
    println!();
    for item in &available {
        println!("{}", format_item_card(item));
        println!();
    }

    if !coming.is_empty() {
        println!("{}", "  EXPANDING SOON".bold());
        println!();
        for item in &coming {
            println!("{}", format_item_card(item));
            println!();
        }
    }

    if !view.bundles.is_empty() {
        println!("{}", "  BUNDLES".bold());
        println!();
        for bundle in &view.bundles {
            println!("{}", format_bundle_card(bundle));
            println!();
        }
    }
}

/// Renders a content view, noting when only the preview was available.
pub fn render_content(view: &ContentView, requested_full: bool) {
    println!("{}", view.title.bold());
    println!();
    println!("{}", view.content);
    if requested_full && !view.has_access {
        println!();
        eprintln!(
            "  {} Preview shown — unlock the full text with {}.",
            "\u{26a1}".yellow(),
            "psyche buy".bold()
        );
    }
}
