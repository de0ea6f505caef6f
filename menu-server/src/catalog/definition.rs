//! Catalog Definition
//!
//! The hand-authored house menu: the single source of truth for a full
//! reload. Pure data, no behavior. Grouped drink entries (alcohol, soft
//! drinks) model each brand as an option with an absolute price.

use serde::{Deserialize, Serialize};

/// One menu entry as authored, before it gets a store identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub base_price: i64,
    pub options: Vec<OptionDef>,
}

/// A priced variant of an entry; `price` is absolute, not a delta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDef {
    pub label: String,
    pub price: i64,
    pub sort_order: i32,
}

fn entry(
    code: &str,
    name: &str,
    category: &str,
    description: &str,
    base_price: i64,
    options: Vec<OptionDef>,
) -> CatalogEntry {
    CatalogEntry {
        code: code.into(),
        name: name.into(),
        category: category.into(),
        description: description.into(),
        base_price,
        options,
    }
}

fn opt(label: &str, price: i64, sort_order: i32) -> OptionDef {
    OptionDef {
        label: label.into(),
        price,
        sort_order,
    }
}

/// The full house menu
///
/// Entry order only affects log reporting order during a reload.
pub fn house_menu() -> Vec<CatalogEntry> {
    vec![
        // ========== Grilled Meat ==========
        entry(
            "G1",
            "Hungarian",
            "grilled",
            "Grilled Hungarian sausage",
            95,
            vec![
                opt("Plain", 95, 1),
                opt("With Rice", 115, 2),
                opt("With Small Fries", 175, 3),
                opt("With Medium Fries", 225, 4),
            ],
        ),
        entry(
            "G2",
            "Chicken",
            "grilled",
            "Grilled chicken",
            150,
            vec![
                opt("Plain", 150, 1),
                opt("With Rice", 170, 2),
                opt("With Small Fries", 230, 3),
                opt("With Medium Fries", 280, 4),
            ],
        ),
        entry(
            "G3",
            "Pork Chop",
            "grilled",
            "Grilled pork chop",
            150,
            vec![
                opt("Plain", 150, 1),
                opt("With Rice", 170, 2),
                opt("With Small Fries", 230, 3),
                opt("With Medium Fries", 280, 4),
            ],
        ),
        entry(
            "G4",
            "Liempo",
            "grilled",
            "Grilled pork belly",
            180,
            vec![
                opt("Plain", 180, 1),
                opt("With Rice", 200, 2),
                opt("With Small Fries", 260, 3),
                opt("With Medium Fries", 310, 4),
            ],
        ),
        // ========== Best Sellers ==========
        entry(
            "S1",
            "Pork Bopis",
            "bestsellers",
            "Minced pork lung & heart cooked with onions, garlic & chili peppers",
            220,
            vec![],
        ),
        entry(
            "S2",
            "Chicken Feet",
            "bestsellers",
            "Fried, boiled, steamed & seasoned with authentic Chinese spices",
            230,
            vec![],
        ),
        entry(
            "S3",
            "Pork Dinuguan",
            "bestsellers",
            "Savory stew of pork meat and pig's blood with mild spicy-sour taste",
            220,
            vec![],
        ),
        entry(
            "S4",
            "Sizzling Hungarian",
            "bestsellers",
            "Hungarian sausage (2 pcs) served on a sizzling plate",
            220,
            vec![],
        ),
        entry(
            "S5",
            "Pork Sisig",
            "bestsellers",
            "Choice of Pork or Chicken",
            230,
            vec![],
        ),
        entry(
            "S6",
            "Sizzling Hotdog",
            "bestsellers",
            "Tender Juicy Hotdog on a sizzling plate",
            175,
            vec![],
        ),
        entry("S7", "Chicken Feet Dimsum", "bestsellers", "", 190, vec![]),
        // ========== Seafood ==========
        entry(
            "CAJUN",
            "Cajun Mix Seafood",
            "seafood",
            "Mixed seafood in Cajun sauce",
            290,
            vec![
                opt("With Rice", 290, 1),
                opt("Small", 320, 2),
                opt("Medium", 630, 3),
                opt("Large", 940, 4),
                opt("X-Large", 1250, 5),
            ],
        ),
        entry(
            "F1",
            "Garlic Butter Shrimp",
            "seafood",
            "Shrimp in garlic butter sauce",
            260,
            vec![
                opt("Small", 260, 1),
                opt("Medium", 510, 2),
                opt("Large", 760, 3),
                opt("X-Large", 1020, 4),
            ],
        ),
        entry(
            "F2",
            "Bangus (Milkfish)",
            "seafood",
            "Marinated & grilled with tomatoes & onion toppings",
            270,
            vec![opt("Plain", 270, 1), opt("With Rice", 290, 2)],
        ),
        entry(
            "F3",
            "Boneless Bangus",
            "seafood",
            "Boneless milkfish with rice",
            190,
            vec![opt("With Rice", 190, 1)],
        ),
        entry(
            "F4",
            "Tilapia",
            "seafood",
            "Fried; served with soy-chili-calamansi dip",
            170,
            vec![opt("Plain", 170, 1), opt("With Rice", 190, 2)],
        ),
        entry(
            "F5",
            "Squid / Pusit",
            "seafood",
            "Grilled and stuffed with tomato & onion",
            180,
            vec![opt("Plain", 180, 1), opt("With Rice", 200, 2)],
        ),
        // ========== Noodles / Pancit ==========
        entry(
            "C1",
            "Pancit Guisado",
            "noodles",
            "Sautéed bihon with chicken & fresh veggies.",
            220,
            vec![
                opt("S", 220, 1),
                opt("M", 430, 2),
                opt("L", 640, 3),
                opt("XL", 850, 4),
            ],
        ),
        entry(
            "C2",
            "Beef Pigar-Pigar",
            "noodles",
            "Marinated beef sautéed with cabbage & onion.",
            260,
            vec![
                opt("S", 260, 1),
                opt("M", 510, 2),
                opt("L", 760, 3),
                opt("XL", 1020, 4),
            ],
        ),
        entry(
            "C3",
            "Sautéed Veggies",
            "noodles",
            "Base price for vegetables. Add ₱30 for Chicken.",
            0,
            vec![opt("Veggies Only", 180, 1), opt("With Chicken", 210, 2)],
        ),
        // ========== Silog Meals ==========
        entry(
            "B1",
            "Corned Beef Silog",
            "silog",
            "Corned beef with garlic rice and egg",
            180,
            vec![],
        ),
        entry(
            "B2",
            "Tapsilog",
            "silog",
            "Beef tapa with garlic rice and egg",
            180,
            vec![],
        ),
        entry(
            "B3",
            "Spam Silog",
            "silog",
            "Spam with garlic rice and egg",
            230,
            vec![],
        ),
        entry(
            "B4",
            "Sisig Silog",
            "silog",
            "Sisig with garlic rice and egg - Best Seller!",
            170,
            vec![],
        ),
        entry(
            "B5",
            "Bacon Silog",
            "silog",
            "Bacon with garlic rice and egg",
            170,
            vec![],
        ),
        entry(
            "B6",
            "Long Silog",
            "silog",
            "Longanisa with garlic rice and egg",
            170,
            vec![],
        ),
        entry(
            "B7",
            "Hot Silog",
            "silog",
            "Hotdog with garlic rice and egg",
            130,
            vec![],
        ),
        entry(
            "B8",
            "Bang Silog",
            "silog",
            "Boneless Bangus with garlic rice and egg",
            160,
            vec![],
        ),
        entry(
            "B9",
            "Hung Silog",
            "silog",
            "Hungarian sausage with garlic rice and egg",
            145,
            vec![],
        ),
        // ========== Appetizers / Sides ==========
        entry(
            "A1",
            "French Fries",
            "appetizers",
            "Crispy golden fries",
            80,
            vec![
                opt("Small", 80, 1),
                opt("Medium", 130, 2),
                opt("Large", 200, 3),
                opt("X-Large", 340, 4),
            ],
        ),
        entry(
            "A2",
            "Chicken Nuggets",
            "appetizers",
            "Crispy chicken nuggets",
            145,
            vec![
                opt("6 pcs", 145, 1),
                opt("12 pcs", 280, 2),
                opt("18 pcs", 425, 3),
                opt("24 pcs", 570, 4),
            ],
        ),
        entry(
            "A3",
            "Calamari",
            "appetizers",
            "Fried squid rings",
            220,
            vec![],
        ),
        entry(
            "A4",
            "Shanghai Rolls",
            "appetizers",
            "Filipino-style spring rolls",
            195,
            vec![
                opt("10 pcs", 195, 1),
                opt("20 pcs", 380, 2),
                opt("30 pcs", 570, 3),
                opt("40 pcs", 760, 4),
            ],
        ),
        entry(
            "A5",
            "Garlic Longanisa",
            "appetizers",
            "Garlic-flavored native sausage",
            220,
            vec![
                opt("6 pcs", 220, 1),
                opt("12 pcs", 430, 2),
                opt("18 pcs", 640, 3),
                opt("24 pcs", 850, 4),
            ],
        ),
        entry(
            "A6",
            "Chicken Skin",
            "appetizers",
            "Crispy fried chicken skin (Limited availability)",
            195,
            vec![],
        ),
        // ========== Soup ==========
        entry(
            "SOP1",
            "Pork Sinigang",
            "soup",
            "Sour and savory tamarind broth with pork.",
            360,
            vec![],
        ),
        entry(
            "SOP2",
            "Beef Bulalo",
            "soup",
            "Light colored beef soup with bone marrow.",
            380,
            vec![],
        ),
        entry(
            "SOP3",
            "Sotanghon Soup",
            "soup",
            "Vermicelli noodles with chicken & veggies.",
            220,
            vec![],
        ),
        entry(
            "SOP4",
            "Korean Ramyeon",
            "soup",
            "Spicy Korean instant noodles.",
            150,
            vec![],
        ),
        entry(
            "SOP5",
            "Jjapagheti",
            "soup",
            "Korean black bean instant noodles.",
            150,
            vec![],
        ),
        // ========== Lemonade ==========
        entry("L1", "Lemon Tea", "lemonade", "Refreshing lemon tea", 85, vec![]),
        entry("L2", "Lemonade", "lemonade", "Classic lemonade", 100, vec![]),
        entry(
            "L3",
            "Cucumber Lemonade",
            "lemonade",
            "Lemonade with cucumber",
            120,
            vec![],
        ),
        entry(
            "L4",
            "Apple Cucumber Lemonade",
            "lemonade",
            "Lemonade with apple and cucumber",
            140,
            vec![],
        ),
        entry(
            "L5",
            "Mango Lemonade",
            "lemonade",
            "Lemonade with mango",
            150,
            vec![],
        ),
        entry(
            "L6",
            "Apple Mango Cucumber Lemonade",
            "lemonade",
            "Ultimate fruit lemonade blend",
            170,
            vec![],
        ),
        entry(
            "D2",
            "Ginger Lemonade",
            "lemonade",
            "Refreshing lemonade with a ginger kick.",
            95,
            vec![],
        ),
        entry(
            "D3",
            "Ginger Tea Lemonade",
            "lemonade",
            "Tea and lemonade infused with ginger.",
            120,
            vec![],
        ),
        entry(
            "D4",
            "Ginger Cucumber Lemonade",
            "lemonade",
            "A cooling and refreshing mix.",
            140,
            vec![],
        ),
        entry(
            "D5",
            "Ginger Apple Cucumber Lemonade",
            "lemonade",
            "A complex mix of fruits and ginger.",
            160,
            vec![],
        ),
        entry(
            "D6",
            "Ginger Carrot Apple Cucumber Lemonade",
            "lemonade",
            "The ultimate healthy blend.",
            180,
            vec![],
        ),
        // ========== Smoothies ==========
        entry(
            "SM1",
            "Mango Milkshake",
            "smoothies",
            "Fresh mango milkshake",
            150,
            vec![],
        ),
        entry(
            "SM2",
            "Banana Milkshake",
            "smoothies",
            "Fresh banana milkshake",
            150,
            vec![],
        ),
        entry(
            "SM3",
            "Mango Banana Milkshake",
            "smoothies",
            "Blend of mango and banana",
            160,
            vec![],
        ),
        entry(
            "SM4",
            "Strawberry Milkshake",
            "smoothies",
            "Fresh strawberry milkshake",
            135,
            vec![],
        ),
        entry(
            "SM5",
            "Cookies & Cream Milkshake",
            "smoothies",
            "Classic cookies and cream",
            135,
            vec![],
        ),
        entry(
            "SM6",
            "Blueberry Milkshake",
            "smoothies",
            "Refreshing blueberry flavor",
            135,
            vec![],
        ),
        entry(
            "SM7",
            "Mango Apple Banana Milkshake",
            "smoothies",
            "Tropical fruit blend",
            170,
            vec![],
        ),
        entry(
            "SM8",
            "Mango Strawberry Milkshake",
            "smoothies",
            "Sweet and tart blend",
            170,
            vec![],
        ),
        entry(
            "SM9",
            "Mango Graham Milkshake",
            "smoothies",
            "Filipino dessert-style shake",
            150,
            vec![],
        ),
        // ========== Coffee & Tea ==========
        entry(
            "CF1",
            "Coffee Latte",
            "coffee",
            "Espresso with steamed milk.",
            120,
            vec![],
        ),
        entry(
            "CF2",
            "Spanish Latte",
            "coffee",
            "Sweetened condensed milk latte.",
            125,
            vec![],
        ),
        entry(
            "CF3",
            "Cappuccino",
            "coffee",
            "Espresso, steamed milk, and milk foam.",
            125,
            vec![],
        ),
        entry(
            "CF4",
            "Americano",
            "coffee",
            "Espresso diluted with hot water.",
            125,
            vec![],
        ),
        entry(
            "CF5",
            "Espresso",
            "coffee",
            "A shot of concentrated coffee.",
            85,
            vec![],
        ),
        entry("CF6", "Black Tea", "coffee", "Classic black tea.", 80, vec![]),
        entry(
            "CF7",
            "Ginger Tea with Lemon",
            "coffee",
            "Soothing ginger tea.",
            80,
            vec![],
        ),
        // ========== Alcoholic Drinks (grouped entries) ==========
        entry(
            "ALC1",
            "Shots & Tequila (Group)",
            "alcohol",
            "A variety of shots and tequilas.",
            80,
            vec![
                opt("Tequila", 80, 1),
                opt("El Hombre Gold", 140, 2),
                opt("Jose Cuervo", 140, 3),
                opt("Tequila Rose", 190, 4),
            ],
        ),
        entry(
            "ALC2",
            "Beers (Group)",
            "alcohol",
            "Selection of popular local and imported beers.",
            80,
            vec![
                opt("Red Horse", 80, 1),
                opt("San Mig Light", 80, 2),
                opt("San Mig Apple", 80, 3),
                opt("San Mig Pilsen", 80, 4),
                opt("San Mig Zero", 90, 5),
                opt("Tanduay Ice", 90, 6),
                opt("Smirnoff Mule", 120, 7),
                opt("German Beer", 170, 8),
            ],
        ),
        entry(
            "ALC3",
            "Whiskey (Group)",
            "alcohol",
            "Selection of whiskeys.",
            80,
            vec![
                opt("Embassy", 80, 1),
                opt("Scottish Legacy", 100, 2),
                opt("Captain Morgan", 100, 3),
                opt("Jim Beam", 120, 4),
                opt("Johnnie Walker Black", 150, 5),
                opt("Jameson", 140, 6),
                opt("Fireball", 150, 7),
                opt("Jack Daniel", 170, 8),
                opt("Jack Daniel Coke Can", 150, 9),
                opt("Jack Daniel Coke", 180, 10),
            ],
        ),
        entry(
            "ALC4",
            "Vodka, Rhum & Gin (Group)",
            "alcohol",
            "Selection of white spirits and liqueurs.",
            80,
            vec![
                opt("Toska Vodka", 80, 1),
                opt("Smirnoff Vodka", 130, 2),
                opt("Tanduay Rhum", 80, 3),
                opt("Malibu", 85, 4),
                opt("Zaffiro Gin", 80, 5),
                opt("Jägermeister", 130, 6),
                opt("Bailey's", 140, 7),
            ],
        ),
        entry(
            "ALC5",
            "Mixed Drinks (Group)",
            "alcohol",
            "Classic bar mixed drinks.",
            100,
            vec![
                opt("Gin Tonic", 100, 1),
                opt("Rhum Coke", 100, 2),
                opt("Vodka Tonic / Soda", 100, 3),
                opt("Cranberry Rhum / Vodka", 100, 4),
                opt("Black Russian", 100, 5),
                opt("Malibu Pineapple", 150, 6),
                opt("Jager Bomb", 150, 7),
            ],
        ),
        // ========== Non-Alcoholic Drinks (grouped entry) ==========
        entry(
            "NALC1",
            "Soft Drinks & Juices (Group)",
            "nonalcohol",
            "Various sodas, bottled juices, and water.",
            30,
            vec![
                opt("Water 500ml", 30, 1),
                opt("Pocari Sweat", 70, 2),
                opt("Coke (orig/zero)", 70, 3),
                opt("Sprite / Royal", 70, 4),
                opt("Mango Juice", 70, 5),
                opt("Pineapple Juice", 70, 6),
                opt("Four Seasons", 70, 7),
                opt("Smart C +", 70, 8),
                opt("Iced Tea Pitcher", 100, 9),
                opt("Red Bull Supreme", 90, 10),
                opt("Red Bull Can 250ml", 160, 11),
                opt("Coke 1.5L", 130, 12),
            ],
        ),
        // ========== Buckets ==========
        entry(
            "BKT1",
            "Bucket (6 beers)",
            "buckets",
            "Choice of Red Horse, San Mig Apple, San Mig Light, San Mig Pilsen + Free Karaoke!",
            450,
            vec![],
        ),
        entry(
            "BKT2",
            "Bucket Set 1",
            "buckets",
            "1 Bucket + Pulutan (French Fries or 6 pcs Nuggets or Sizzling Hotdog)",
            570,
            vec![],
        ),
        entry(
            "BKT3",
            "Bucket Set 2",
            "buckets",
            "1 Bucket + Pulutan (choice same as above)",
            610,
            vec![],
        ),
        entry(
            "BKT4",
            "Bucket Set 3",
            "buckets",
            "1 Bucket + Pulutan (Sisig / Bopis / Dinuguan / Chicken Feet)",
            660,
            vec![],
        ),
        entry(
            "BKT5",
            "Alfonso 1L + Coke",
            "buckets",
            "1 Liter bottle of Alfonso with Coke mixer.",
            700,
            vec![],
        ),
        entry(
            "BKT6",
            "Bottle of Wine",
            "buckets",
            "House wine bottle.",
            650,
            vec![],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn house_menu_codes_are_unique() {
        let menu = house_menu();
        let codes: HashSet<&str> = menu.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes.len(), menu.len());
    }

    #[test]
    fn house_menu_covers_all_categories() {
        let menu = house_menu();
        let categories: HashSet<&str> = menu.iter().map(|e| e.category.as_str()).collect();
        for expected in [
            "grilled",
            "bestsellers",
            "seafood",
            "noodles",
            "silog",
            "appetizers",
            "soup",
            "lemonade",
            "smoothies",
            "coffee",
            "alcohol",
            "nonalcohol",
            "buckets",
        ] {
            assert!(categories.contains(expected), "missing {expected}");
        }
        assert_eq!(categories.len(), 13);
    }

    #[test]
    fn grilled_entries_keep_code_order() {
        let menu = house_menu();
        let grilled: Vec<&str> = menu
            .iter()
            .filter(|e| e.category == "grilled")
            .map(|e| e.code.as_str())
            .collect();
        assert_eq!(grilled, ["G1", "G2", "G3", "G4"]);
    }

    #[test]
    fn option_prices_are_absolute_amounts() {
        // Grouped alcohol entries carry a placeholder base_price; every
        // option still has a standalone positive price
        let menu = house_menu();
        for e in &menu {
            for o in &e.options {
                assert!(o.price > 0, "{} / {}", e.code, o.label);
                assert!(o.sort_order >= 0);
            }
        }
    }

    #[test]
    fn single_priced_entries_have_no_options() {
        let menu = house_menu();
        let silog = menu.iter().filter(|e| e.category == "silog");
        for e in silog {
            assert!(e.options.is_empty());
            assert!(e.base_price > 0);
        }
    }
}
