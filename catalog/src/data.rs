//! Built-in catalog data.
//!
//! This is the shop's reference catalog: it seeds the configurator when no
//! remote catalog endpoint is configured and serves as the fallback when
//! the remote fetch fails.

use crate::money::Money;
use crate::types::{Flower, FlowerFamily, FlowerId, PresetBouquet, PresetFlower};

fn flower(
    id: &str,
    name: &str,
    family: &str,
    color: &str,
    cents: i64,
    category: &str,
    image_url: &str,
    description: &str,
) -> Flower {
    Flower {
        id: FlowerId::new(id),
        name: name.to_string(),
        family: family.to_string(),
        color: color.to_string(),
        price: Money::from_cents(cents),
        category: category.to_string(),
        image_url: image_url.to_string(),
        description: description.to_string(),
    }
}

/// The built-in flower catalog
#[must_use]
#[allow(clippy::too_many_lines)] // flat data table
pub fn builtin_flowers() -> Vec<Flower> {
    vec![
        // Roses
        flower("rose-red", "Red Rose", "roses", "red", 350, "roses", "/assets/custom/roses/red.png", "Classic red rose"),
        flower("rose-white", "White Rose", "roses", "white", 350, "roses", "/assets/custom/roses/white.png", "Pure white rose"),
        flower("rose-pink", "Pink Rose", "roses", "pink", 350, "roses", "/assets/custom/roses/pink.png", "Soft pink rose"),
        flower("rose-yellow", "Yellow Rose", "roses", "yellow", 350, "roses", "/assets/custom/roses/yellow.png", "Bright yellow rose"),
        flower("rose-blue", "Blue Rose", "roses", "blue", 350, "roses", "/assets/custom/roses/blue.png", "Elegant blue rose"),
        flower("rose-peach", "Peach Rose", "roses", "peach", 350, "roses", "/assets/custom/roses/peach.png", "Soft peach rose"),
        // Tulips
        flower("tulip-red", "Red Tulip", "tulips", "red", 300, "tulips", "/assets/custom/tulips/red.png", "Romantic red tulip"),
        flower("tulip-white", "White Tulip", "tulips", "white", 300, "tulips", "/assets/custom/tulips/white.png", "Elegant white tulip"),
        flower("tulip-pink", "Pink Tulip", "tulips", "pink", 300, "tulips", "/assets/custom/tulips/pink.png", "Playful pink tulip"),
        flower("tulip-yellow", "Yellow Tulip", "tulips", "yellow", 300, "tulips", "/assets/custom/tulips/yellow.png", "Sunny yellow tulip"),
        flower("tulip-blue", "Blue Tulip", "tulips", "blue", 300, "tulips", "/assets/custom/tulips/blue.png", "Beautiful blue tulip"),
        flower("tulip-peach", "Peach Tulip", "tulips", "peach", 300, "tulips", "/assets/custom/tulips/peach.png", "Soft peach tulip"),
        // Peonies
        flower("peony-pink", "Pink Peony", "peonies", "pink", 600, "seasonal", "/assets/custom/peonies/pink.png", "Lush pink peony"),
        flower("peony-fushia", "Fushia Peony", "peonies", "fushia", 600, "seasonal", "/assets/custom/peonies/fushia.png", "Bold fushia peony"),
        flower("peony-white", "White Peony", "peonies", "white", 600, "seasonal", "/assets/custom/peonies/white.png", "Delicate white peony"),
        // Chrysanthemums
        flower("chrys-white", "White Chrysanthemum", "chrysanthemum", "white", 250, "seasonal", "/assets/custom/chrysanthemum/white.png", "Classic white mum"),
        flower("chrys-yellow", "Yellow Chrysanthemum", "chrysanthemum", "yellow", 250, "seasonal", "/assets/custom/chrysanthemum/yellow.png", "Golden yellow mum"),
        flower("chrys-orange", "Orange Chrysanthemum", "chrysanthemum", "orange", 250, "seasonal", "/assets/custom/chrysanthemum/orange.png", "Warm orange mum"),
        flower("chrys-purple", "Purple Chrysanthemum", "chrysanthemum", "purple", 250, "seasonal", "/assets/custom/chrysanthemum/purple.png", "Deep purple mum"),
        // Gypsum
        flower("gypsum-white", "White Gypsum", "gypsum", "white", 200, "wildflowers", "/assets/flowers/gypsum-white.png", "Snowy white baby's breath"),
        flower("gypsum-pink", "Pink Gypsum", "gypsum", "pink", 250, "wildflowers", "/assets/flowers/gypsum-pink.png", "Soft pink baby's breath"),
        flower("gypsum-blue", "Blue Gypsum", "gypsum", "blue", 250, "wildflowers", "/assets/flowers/gypsum-blue.png", "Dreamy blue baby's breath"),
        // Daisies
        flower("daisy-white", "White Daisy", "daisies", "white", 200, "wildflowers", "/assets/flowers/daisy-white.png", "Classic white daisy"),
        flower("daisy-yellow", "Yellow Daisy", "daisies", "yellow", 200, "wildflowers", "/assets/flowers/daisy-yellow.png", "Sunshine yellow daisy"),
        // Sunflowers
        flower("sunflower-big", "Big Sunflower", "sunflower", "yellow", 400, "seasonal", "/assets/flowers/sunflower-big.png", "Large radiant sunflower"),
        flower("sunflower-baby", "Baby Sunflower", "sunflower", "yellow", 300, "seasonal", "/assets/flowers/sunflower-baby.png", "Petite sunflower"),
        // Lilies
        flower("lily-white", "White Lily", "lily", "white", 500, "lilies", "/assets/flowers/lily-white.png", "Elegant white lily"),
        flower("lily-pink", "Pink Lily", "lily", "pink", 500, "lilies", "/assets/flowers/lily-pink.png", "Lovely pink lily"),
        flower("lily-yellow", "Yellow Lily", "lily", "yellow", 500, "lilies", "/assets/flowers/lily-yellow.png", "Bright yellow lily"),
        flower("lily-orange", "Orange Lily", "lily", "orange", 500, "lilies", "/assets/flowers/lily-orange.png", "Fiery orange lily"),
        // Orchids
        flower("orchid-white", "White Orchid", "orchid", "white", 800, "exotic", "/assets/flowers/orchid-white.png", "Sophisticated white orchid"),
        flower("orchid-pink", "Pink Orchid", "orchid", "pink", 800, "exotic", "/assets/flowers/orchid-pink.png", "Vibrant pink orchid"),
        flower("orchid-blue", "Blue Orchid", "orchid", "blue", 900, "exotic", "/assets/flowers/orchid-blue.png", "Rare blue orchid"),
        // Hydrangeas
        flower("hydrangea-white", "White Hydrangea", "hydrangea", "white", 600, "seasonal", "/assets/flowers/hydrangea-white.png", "Cloud-like white hydrangea"),
        flower("hydrangea-pink", "Pink Hydrangea", "hydrangea", "pink", 600, "seasonal", "/assets/flowers/hydrangea-pink.png", "Blooming pink hydrangea"),
        flower("hydrangea-blue", "Blue Hydrangea", "hydrangea", "blue", 600, "seasonal", "/assets/flowers/hydrangea-blue.png", "Deep blue hydrangea"),
        // Gerberas
        flower("gerbera-red", "Red Gerbera", "gerbera", "red", 300, "wildflowers", "/assets/flowers/gerbera-red.png", "Bold red gerbera"),
        flower("gerbera-yellow", "Yellow Gerbera", "gerbera", "yellow", 300, "wildflowers", "/assets/flowers/gerbera-yellow.png", "Happy yellow gerbera"),
        flower("gerbera-orange", "Orange Gerbera", "gerbera", "orange", 300, "wildflowers", "/assets/flowers/gerbera-orange.png", "Zesty orange gerbera"),
        // Lavender
        flower("lavender", "Lavender", "lavender", "purple", 400, "herbs", "/assets/flowers/lavender.png", "Aromatic lavender bundle"),
        // Carnations
        flower("carnation-red", "Red Carnation", "carnation", "red", 200, "carnations", "/assets/flowers/carnation-red.png", "Deep red carnation"),
        flower("carnation-white", "White Carnation", "carnation", "white", 200, "carnations", "/assets/flowers/carnation-white.png", "Pure white carnation"),
        flower("carnation-pink", "Pink Carnation", "carnation", "pink", 200, "carnations", "/assets/flowers/carnation-pink.png", "Sweet pink carnation"),
        flower("carnation-purple", "Purple Carnation", "carnation", "purple", 200, "carnations", "/assets/flowers/carnation-purple.png", "Royal purple carnation"),
        flower("carnation-yellow", "Yellow Carnation", "carnation", "yellow", 200, "carnations", "/assets/flowers/carnation-yellow.png", "Bright yellow carnation"),
    ]
}

fn family(id: &str, name: &str, icon: &str) -> FlowerFamily {
    FlowerFamily {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    }
}

/// The flower families offered in the configurator
#[must_use]
pub fn builtin_families() -> Vec<FlowerFamily> {
    vec![
        family("roses", "Roses", "🌹"),
        family("tulips", "Tulips", "🌷"),
        family("peonies", "Peonies", "🌸"),
        family("chrysanthemum", "Chrysanthemums", "🌼"),
        family("gypsum", "Gypsum", "🌫️"),
        family("daisies", "Daisies", "🌼"),
        family("sunflower", "Sunflowers", "🌻"),
        family("lily", "Lilies", "🌺"),
        family("orchid", "Orchids", "🌸"),
        family("hydrangea", "Hydrangeas", "💠"),
        family("gerbera", "Gerberas", "🌻"),
        family("lavender", "Lavender", "🌿"),
        family("carnation", "Carnations", "🌺"),
    ]
}

fn preset(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    flowers: Vec<PresetFlower>,
) -> PresetBouquet {
    PresetBouquet {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        flowers,
        category: category.to_string(),
    }
}

/// The built-in preset bouquets ("pre-designed" shortcuts)
#[must_use]
pub fn builtin_presets() -> Vec<PresetBouquet> {
    vec![
        preset(
            "valentines",
            "Valentine's Day",
            "Romantic red roses arrangement",
            "occasion",
            vec![
                PresetFlower::new("rose-red", 12),
                PresetFlower::new("rose-pink", 6),
                PresetFlower::new("tulip-red", 3),
            ],
        ),
        preset(
            "wedding",
            "Wedding",
            "Elegant bridal arrangement",
            "occasion",
            vec![
                PresetFlower::new("rose-white", 10),
                PresetFlower::new("peony-white", 5),
                PresetFlower::new("orchid-white", 3),
                PresetFlower::new("lily-white", 2),
            ],
        ),
        preset(
            "birthday",
            "Birthday",
            "Colorful celebration bouquet",
            "occasion",
            vec![
                PresetFlower::new("gerbera-yellow", 5),
                PresetFlower::new("sunflower-big", 3),
                PresetFlower::new("tulip-yellow", 5),
                PresetFlower::new("rose-pink", 4),
            ],
        ),
        preset(
            "sympathy",
            "Sympathy",
            "Peaceful memorial arrangement",
            "occasion",
            vec![
                PresetFlower::new("lily-white", 6),
                PresetFlower::new("rose-white", 6),
                PresetFlower::new("chrys-white", 4),
                PresetFlower::new("carnation-white", 4),
            ],
        ),
        preset(
            "spring-garden",
            "Spring Garden",
            "Fresh spring blooms",
            "season",
            vec![
                PresetFlower::new("tulip-pink", 6),
                PresetFlower::new("tulip-yellow", 6),
                PresetFlower::new("daisy-white", 5),
                PresetFlower::new("lavender", 3),
            ],
        ),
        preset(
            "summer-sunshine",
            "Summer Sunshine",
            "Bright summer arrangement",
            "season",
            vec![
                PresetFlower::new("sunflower-big", 5),
                PresetFlower::new("gerbera-yellow", 4),
                PresetFlower::new("gerbera-orange", 4),
                PresetFlower::new("rose-yellow", 3),
            ],
        ),
        preset(
            "autumn-harvest",
            "Autumn Harvest",
            "Warm fall colors",
            "season",
            vec![
                PresetFlower::new("chrys-orange", 6),
                PresetFlower::new("rose-peach", 5),
                PresetFlower::new("gerbera-orange", 4),
                PresetFlower::new("carnation-red", 4),
            ],
        ),
        preset(
            "winter-elegance",
            "Winter Elegance",
            "Sophisticated winter arrangement",
            "season",
            vec![
                PresetFlower::new("rose-red", 8),
                PresetFlower::new("rose-white", 8),
                PresetFlower::new("orchid-white", 2),
                PresetFlower::new("lily-white", 3),
            ],
        ),
    ]
}

/// Looks up a built-in flower by id
#[must_use]
pub fn find_flower(id: &FlowerId) -> Option<Flower> {
    builtin_flowers().into_iter().find(|f| &f.id == id)
}
