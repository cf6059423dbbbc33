//! Fixture catalog for the demo commands.

use vitrine_commerce::prelude::*;

/// A small seeded catalog covering every filterable dimension.
pub fn catalog() -> Catalog {
    Catalog::from_products(vec![
        Product::new("p1", "Classic Shirt", "Women", "Topwear")
            .with_price(Money::new(2500, Currency::USD))
            .with_sizes(["S", "M", "L"])
            .with_material("Cotton")
            .with_created_at(1_714_000_000)
            .with_description("A well-developed, thoughtful classic.")
            .with_image("https://img.example/classic-shirt.jpg"),
        Product::new("p2", "Wool Pant", "Women", "Bottomwear")
            .with_price(Money::new(5400, Currency::USD))
            .with_sizes(["M", "L"])
            .with_material("Wool")
            .with_created_at(1_716_000_000)
            .with_image("https://img.example/wool-pant.jpg"),
        Product::new("p3", "Gloomy Sweater", "Women", "Topwear")
            .with_price(Money::new(6900, Currency::USD))
            .with_sizes(["S", "M"])
            .with_material("Wool")
            .with_created_at(1_712_000_000)
            .with_image("https://img.example/gloomy-sweater.jpg"),
        Product::new("p4", "Seamless Sweater", "Men", "Topwear")
            .with_price(Money::new(7200, Currency::USD))
            .with_sizes(["M", "L", "XL"])
            .with_material("Merino")
            .with_created_at(1_718_000_000)
            .with_image("https://img.example/seamless-sweater.jpg"),
        Product::new("p5", "Hoche Pant", "Men", "Bottomwear")
            .with_price(Money::new(4800, Currency::USD))
            .with_sizes(["L", "XL"])
            .with_material("Cotton")
            .with_created_at(1_710_000_000)
            .with_image("https://img.example/hoche-pant.jpg"),
        Product::new("p6", "Brutus Sweater", "Men", "Topwear")
            .with_price(Money::new(8100, Currency::USD))
            .with_sizes(["S", "M", "L"])
            .with_material("Wool")
            .with_created_at(1_719_000_000)
            .with_image("https://img.example/brutus-sweater.jpg"),
        // Archive piece without a price or date; exercises the
        // missing-value policy.
        Product::new("p7", "Archive Tee", "Men", "Topwear")
            .with_sizes(["M"])
            .with_image("https://img.example/archive-tee.jpg"),
    ])
}
