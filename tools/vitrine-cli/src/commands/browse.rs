//! The `browse` command: run the filter/sort pipeline over the seeded
//! catalog and print the grid.

use crate::seed;
use anyhow::{bail, Result};
use clap::Args;
use console::style;
use vitrine_commerce::prelude::*;

/// Arguments for `vitrine browse`.
#[derive(Args)]
pub struct BrowseArgs {
    /// Free-text search against product names
    #[arg(short, long, default_value = "")]
    search: String,

    /// Keep only these categories (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Keep only these sub-categories (repeatable)
    #[arg(long = "sub-category")]
    sub_categories: Vec<String>,

    /// Keep products available in these sizes (repeatable)
    #[arg(long = "size")]
    sizes: Vec<String>,

    /// Keep only these materials (repeatable)
    #[arg(long = "material")]
    materials: Vec<String>,

    /// Minimum price in dollars
    #[arg(long)]
    min_price: Option<f64>,

    /// Maximum price in dollars
    #[arg(long)]
    max_price: Option<f64>,

    /// Sort order: newest, oldest, price-asc, price-desc, name-asc, name-desc
    #[arg(long, default_value = "newest")]
    sort: String,

    /// Drop products missing a price or date instead of treating them as zero
    #[arg(long)]
    exclude_incomplete: bool,

    /// Print the available facets instead of products
    #[arg(long)]
    facets: bool,
}

pub fn run(args: BrowseArgs) -> Result<()> {
    let catalog = seed::catalog();

    if args.facets {
        return print_facets(&catalog);
    }

    let Some(sort) = SortKey::from_str(&args.sort) else {
        bail!("unknown sort key: {}", args.sort);
    };

    let mut criteria = FilterCriteria::new()
        .with_search(args.search)
        .with_sort(sort);
    criteria.categories = args.categories;
    criteria.sub_categories = args.sub_categories;
    criteria.sizes = args.sizes.into_iter().map(Size::new).collect();
    criteria.materials = args.materials;
    if args.exclude_incomplete {
        criteria.missing_values = MissingValuePolicy::Exclude;
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let min = Money::from_decimal(args.min_price.unwrap_or(0.0), Currency::USD);
        let max = Money::from_decimal(args.max_price.unwrap_or(1_000_000.0), Currency::USD);
        criteria.price_range = Some((min, max));
    }

    let shown = criteria.apply(catalog.products());
    println!(
        "{}",
        style(format!("{} Products", shown.len())).bold().underlined()
    );
    for product in shown {
        let price = product
            .price
            .map(|m| m.display())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<18} {:>9}  {} / {}  [{}]",
            style(&product.name).bold(),
            price,
            product.category,
            product.sub_category,
            product
                .sizes
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    Ok(())
}

fn print_facets(catalog: &Catalog) -> Result<()> {
    let facets = FacetSummary::from_products(catalog.products());
    println!("{}", style("Facets").bold().underlined());
    println!("  Categories:     {}", facets.categories.join(", "));
    println!("  Sub-categories: {}", facets.sub_categories.join(", "));
    println!(
        "  Sizes:          {}",
        facets
            .sizes
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Materials:      {}", facets.materials.join(", "));
    if let (Some(min), Some(max)) = (facets.min_price, facets.max_price) {
        println!("  Price:          {} - {}", min.display(), max.display());
    }
    Ok(())
}
