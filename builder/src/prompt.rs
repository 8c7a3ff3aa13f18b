//! Preview prompt engine.
//!
//! Serializes the current configuration into the positive/negative prompt
//! pair sent to the image-generation service, together with a
//! human-readable summary and a stable cache key.
//!
//! The wording targets the Flux model: weighted emphasis phrases
//! (`(…:1.3)`), explicit quantity and color enforcement, and shape
//! exclusions in the negative prompt. Style presets are deliberately not
//! applied; the prompt describes exactly what the user configured.

use crate::types::{BuilderState, Selection};
use petal_catalog::{BoxShape, PackageKind, PackageSize};

/// The assembled prompt pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltPrompt {
    /// Positive prompt describing the desired image
    pub positive: String,
    /// Negative prompt describing what to avoid
    pub negative: String,
    /// Human-readable configuration summary
    pub preview: String,
    /// Stable 8-hex-digit key for the preview cache (seed included)
    pub cache_key: String,
}

/// Visual vocabulary for one flower family
struct FlowerVisuals {
    petal_style: &'static str,
    bloom_shape: &'static str,
}

fn flower_visuals(family: &str) -> Option<FlowerVisuals> {
    let (petal_style, bloom_shape) = match family {
        "roses" => (
            "layered spiral petals with velvety soft texture",
            "classic cup-shaped bloom with tightly packed petals unfurling from center",
        ),
        "tulips" => (
            "smooth oval petals with pointed tips",
            "elegant cup-shaped or goblet bloom",
        ),
        "peonies" => (
            "densely packed ruffled petals in layers",
            "large lush ball-shaped fluffy bloom",
        ),
        "chrysanthemum" => (
            "numerous thin elongated ray petals",
            "pompon or daisy-like radial bloom",
        ),
        "gypsum" => (
            "tiny delicate star-shaped florets",
            "cloud-like clusters of miniature blooms",
        ),
        "daisies" => (
            "simple white ray petals around yellow center",
            "classic flat circular bloom with prominent center disc",
        ),
        "sunflower" => (
            "large golden yellow ray petals",
            "large circular head with dark brown seed center",
        ),
        "lily" => (
            "six elegant recurved petals with spots or plain",
            "trumpet or star-shaped dramatic bloom",
        ),
        "orchid" => (
            "exotic bilateral symmetry with distinctive lip petal",
            "intricate exotic bloom with unique labellum",
        ),
        "hydrangea" => (
            "clusters of four-petaled small florets",
            "large round mophead or lacecap cluster",
        ),
        "gerbera" => (
            "bold daisy-like ray petals in vibrant colors",
            "large flat circular bloom with contrasting center",
        ),
        "lavender" => (
            "tiny tubular flowers in dense spikes",
            "slender elongated flower spikes",
        ),
        "carnation" => (
            "fringed ruffled petals with serrated edges",
            "rounded fluffy bloom with layered petals",
        ),
        _ => return None,
    };
    Some(FlowerVisuals {
        petal_style,
        bloom_shape,
    })
}

fn color_visual(color: &str) -> &str {
    match color {
        "red" => "deep crimson red, rich ruby color",
        "white" => "pure pristine white, snow-white, ivory cream",
        "pink" => "soft blush pink, delicate rose pink",
        "yellow" => "bright sunny yellow, golden yellow",
        "blue" => "serene sky blue, soft periwinkle blue",
        "peach" => "warm peach, soft apricot orange",
        "purple" => "rich royal purple, deep violet",
        "orange" => "vibrant tangerine orange, warm sunset orange",
        "fushia" => "vivid hot pink fuchsia, magenta",
        other => other,
    }
}

const NEGATIVE_GENERAL: &[&str] = &[
    "lowres", "text", "error", "cropped", "worst quality", "low quality", "normal quality",
    "jpeg artifacts", "signature", "watermark", "username", "blurry", "blur", "bad proportions",
    "duplicate", "out of frame", "ugly", "deformed", "disfigured", "mutated", "malformed",
    "out of focus", "compression artifacts", "dark shadows", "overexposed", "underexposed",
    "noise", "grain",
];

const NEGATIVE_STYLE: &[&str] = &[
    "3d render", "3d model", "illustration", "cartoon", "anime", "painting", "drawing", "sketch",
    "digital art", "vector art", "cgi", "computer graphics", "synthetic", "artificial", "fake",
    "unrealistic",
];

const NEGATIVE_FLOWERS: &[&str] = &[
    "wilted flowers", "dead flowers", "brown petals", "damaged petals", "messy arrangement",
    "scattered petals", "drooping stems", "yellow leaves", "brown leaves", "insects", "bugs",
    "artificial flowers", "fake flowers", "plastic flowers", "silk flowers", "dried flowers",
    "paper flowers", "cartoon flowers", "3d rendered flowers", "sparse arrangement",
    "empty spaces", "incomplete bouquet", "missing flowers", "wrong flower count",
];

const NEGATIVE_PACKAGING: &[&str] = &[
    "torn paper", "damaged box", "dirty packaging", "wrinkled ribbon", "cheap materials",
    "plastic wrap visible", "tape visible", "empty box", "box without flowers", "closed box",
    "box lid on", "dented box", "loose ribbon", "untied ribbon", "messy ribbon",
    "ribbon at bottom", "fallen ribbon", "wrong box shape", "incorrect packaging",
];

const NEGATIVE_COMPOSITION: &[&str] = &[
    "cluttered", "busy background", "distracting elements", "multiple products", "hands visible",
    "people visible", "colored background", "patterned background",
];

/// The baseline negative prompt (all category lists joined)
#[must_use]
pub fn negative_prompt_base() -> String {
    [
        NEGATIVE_GENERAL,
        NEGATIVE_STYLE,
        NEGATIVE_FLOWERS,
        NEGATIVE_PACKAGING,
        NEGATIVE_COMPOSITION,
    ]
    .iter()
    .flat_map(|list| list.iter())
    .copied()
    .collect::<Vec<_>>()
    .join(", ")
}

const VARIATION_PHRASES: &[&str] = &[
    "unique artistic composition",
    "distinctive arrangement style",
    "creative floral design",
    "original presentation",
    "fresh artistic interpretation",
    "elegant variation",
    "beautiful unique styling",
    "distinctive composition",
];

const ALL_COLORS: &[&str] = &[
    "red", "pink", "white", "yellow", "blue", "purple", "orange", "peach", "fushia",
];

fn size_phrase(kind: PackageKind, size: PackageSize) -> &'static str {
    match (kind, size) {
        (PackageKind::Box, PackageSize::Small) => "compact 15cm",
        (PackageKind::Box, PackageSize::Medium) => "standard 25cm",
        (PackageKind::Box, PackageSize::Large) => "grand 35cm",
        (PackageKind::Wrap, PackageSize::Small) => "petite hand-held",
        (PackageKind::Wrap, PackageSize::Medium) => "standard presentation",
        (PackageKind::Wrap, PackageSize::Large) => "grand luxury oversized",
    }
}

fn box_material(color: &str) -> String {
    match color {
        "black" => "matte black premium leather-textured".to_string(),
        "white" => "elegant white smooth matte finish".to_string(),
        "gold" => "luxurious champagne gold satin finish".to_string(),
        "pink" => "soft blush pink leather-textured".to_string(),
        "blue" => "navy blue premium leather-textured".to_string(),
        "red" => "deep burgundy velvet-textured".to_string(),
        other => format!("{other} premium"),
    }
}

fn wrap_material(color: &str) -> String {
    match color {
        "black" => "elegant matte black Korean-style wrapping paper with pleated ruffled edges".to_string(),
        "white" => "crisp white tissue paper with kraft backing".to_string(),
        "gold" => "champagne gold metallic wrapping paper".to_string(),
        "pink" => "soft blush pink tissue paper".to_string(),
        "blue" => "dusty blue kraft paper".to_string(),
        "red" => "deep burgundy tissue paper".to_string(),
        other => format!("{other} wrapping paper"),
    }
}

struct ShapeConfig {
    shape: &'static str,
    arrangement: &'static str,
    view_angle: &'static str,
}

fn box_shape_config(shape: BoxShape) -> ShapeConfig {
    match shape {
        BoxShape::Round => ShapeConfig {
            shape: "perfectly circular cylinder hatbox",
            arrangement: "flowers arranged in a beautiful dome shape overflowing slightly above the box rim, tightly packed blooms filling the entire circular space",
            view_angle: "elegant three-quarter angle view from slightly above, showing both the flower dome and the curved box side with the Petal logo",
        },
        BoxShape::Square => ShapeConfig {
            shape: "square luxury gift box with sharp clean edges",
            arrangement: "flowers arranged in neat rows creating a lush dome shape rising above the box edges, tightly packed grid pattern",
            view_angle: "elegant three-quarter angle view from slightly above, showing both the flower arrangement and box corner with the Petal logo",
        },
        BoxShape::Heart => ShapeConfig {
            shape: "romantic heart-shaped gift box with smooth curved edges",
            arrangement: "flowers densely packed following the heart contour, blooms standing upright filling the entire heart shape facing upward",
            view_angle: "elegant three-quarter angle view from slightly above, showing the heart shape clearly with flowers and the curved box side with the Petal logo",
        },
        BoxShape::Rectangle => ShapeConfig {
            shape: "elegant rectangular gift box",
            arrangement: "flowers arranged in rows along the length creating a dome shape, tightly packed",
            view_angle: "elegant three-quarter angle view from slightly above, showing both the flower arrangement and box side with the Petal logo",
        },
    }
}

fn ribbon_color(first_flower_color: &str) -> &'static str {
    match first_flower_color {
        "red" => "red satin",
        "pink" => "soft pink satin",
        "white" => "white satin",
        "purple" => "lavender satin",
        "blue" => "navy blue satin",
        "yellow" => "gold satin",
        "orange" => "coral satin",
        "peach" => "champagne satin",
        _ => "satin",
    }
}

/// Selections sorted most-numerous first, the order the prompt emphasizes
fn sorted_selections(state: &BuilderState) -> Vec<&Selection> {
    let mut selections: Vec<&Selection> = state.selections.values().collect();
    selections.sort_by(|a, b| {
        b.quantity
            .cmp(&a.quantity)
            .then_with(|| a.flower.id.cmp(&b.flower.id))
    });
    selections
}

fn flower_descriptions(selections: &[&Selection]) -> String {
    let mut parts = Vec::new();
    for selection in selections {
        let color = color_visual(&selection.flower.color);
        let family = &selection.flower.family;
        let qty = selection.quantity;

        if let Some(visuals) = flower_visuals(family) {
            parts.push(format!(
                "(exactly {qty} {color} {family}:1.3), {}, {}",
                visuals.bloom_shape, visuals.petal_style
            ));
        } else {
            parts.push(format!("(exactly {qty} {color} {family}:1.3)"));
        }
    }
    parts.join(", ")
}

fn color_enforcement(selections: &[&Selection]) -> String {
    let mut colors: Vec<&str> = selections.iter().map(|s| s.flower.color.as_str()).collect();
    colors.sort_unstable();
    colors.dedup();

    if selections.len() > 1 {
        let breakdown = selections
            .iter()
            .map(|s| format!("{} {} {}", s.quantity, s.flower.color, s.flower.family))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "(arrangement MUST contain ALL of these flowers visible: {breakdown}:1.4), \
             (each flower type MUST be clearly visible and distinguishable:1.3), \
             (do NOT substitute or omit any flower type:1.3)"
        )
    } else if let [only] = colors.as_slice() {
        format!(
            "(ALL flowers must be exactly {only} color only:1.4), (no other colors:1.3), \
             (uniform {only} color throughout:1.3)"
        )
    } else {
        format!(
            "(flowers in these exact colors only: {}:1.3), (no other colors:1.2)",
            colors.join(", ")
        )
    }
}

fn push_flower_core(parts: &mut Vec<String>, state: &BuilderState, selections: &[&Selection]) {
    let total = state.stem_count();
    parts.push(format!(
        "({total} REAL fresh-cut natural flowers from a florist shop: {}:1.4)",
        flower_descriptions(selections)
    ));
    parts.push("(flowers must look 100% real and natural, freshly cut from garden:1.3)".to_string());
    parts.push("natural organic flower petals with realistic texture and subtle imperfections".to_string());
    parts.push("visible natural petal veins, soft dewy appearance, lifelike colors".to_string());
    parts.push(color_enforcement(selections));
}

fn build_box_prompt(parts: &mut Vec<String>, state: &BuilderState, selections: &[&Selection]) {
    let packaging = &state.packaging;
    let shape = packaging.shape;
    let config = box_shape_config(shape);
    let total = state.stem_count();

    let excluded: Vec<&str> = [
        BoxShape::Round,
        BoxShape::Square,
        BoxShape::Heart,
        BoxShape::Rectangle,
    ]
    .iter()
    .filter(|s| **s != shape)
    .map(|s| s.slug())
    .collect();

    parts.push("ultra realistic professional florist product photo".to_string());
    parts.push(format!(
        "{} {} made of {} material",
        size_phrase(PackageKind::Box, packaging.size),
        config.shape,
        box_material(&packaging.color)
    ));
    parts.push(format!(
        "(box must be exactly {} shape only, not {}:1.3)",
        shape.slug(),
        excluded.join(", not ")
    ));
    parts.push("luxury flower box arrangement, lid removed showing interior".to_string());

    push_flower_core(parts, state, selections);

    parts.push(config.arrangement.to_string());
    parts.push(format!(
        "(all {total} flowers clearly visible:1.3), (densely packed:1.2), (filling the entire box:1.2)"
    ));
    parts.push("flower heads facing upward showing full open blooms".to_string());
    parts.push("flowers creating a lush overflowing dome shape rising above the box rim".to_string());
    parts.push(config.view_angle.to_string());

    if packaging.ribbon {
        let first_color = selections
            .first()
            .map_or("yellow", |s| s.flower.color.as_str());
        let ribbon = ribbon_color(first_color);
        parts.push(format!(
            "elegant {ribbon} ribbon wrapped tightly around the MIDDLE circumference of the box exterior"
        ));
        parts.push("ribbon bow tied neatly on the FRONT CENTER of the box, NOT hanging loose, NOT at bottom".to_string());
    }

    parts.push("elegant gold \"Petal\" logo printed on the box front".to_string());
    parts.push("box placed on clean white surface".to_string());
}

fn build_wrap_prompt(parts: &mut Vec<String>, state: &BuilderState, selections: &[&Selection]) {
    let packaging = &state.packaging;
    let total = state.stem_count();
    let material = wrap_material(&packaging.color);
    let size = size_phrase(PackageKind::Wrap, packaging.size);

    parts.push("ultra realistic professional florist product photo".to_string());

    if packaging.shape == BoxShape::Heart {
        parts.push(format!("{size} heart-shaped flower bouquet arrangement"));
        parts.push(
            "(bouquet must be arranged in heart shape only, not round, not oval, not traditional bouquet shape:1.3)"
                .to_string(),
        );
        push_flower_core(parts, state, selections);
        parts.push(format!("(all {total} flowers clearly visible in the arrangement:1.3)"));
        parts.push("(flowers arranged in a perfect heart shape when viewed from above:1.3)".to_string());
        parts.push("blooms densely packed to form a romantic heart silhouette".to_string());
        parts.push(format!(
            "wrapped in {material} with decorative pleated ruffled border around the heart"
        ));
        parts.push("front view showing the full heart shape of the flower arrangement".to_string());
        parts.push("small gold \"PETAL\" brand tag on ribbon".to_string());
    } else {
        parts.push(format!("{size} hand-tied flower bouquet"));
        parts.push(
            "(traditional round dome-shaped bouquet, not heart-shaped, not box arrangement:1.3)"
                .to_string(),
        );
        push_flower_core(parts, state, selections);
        parts.push(format!("(all {total} flowers clearly visible:1.3), (densely arranged:1.2)"));
        parts.push("flowers arranged in cascading dome shape with focal flowers in center".to_string());
        parts.push(format!("professionally wrapped in {material}"));
        parts.push("paper gathered and tied with matching satin ribbon bow".to_string());
        parts.push("stems neatly trimmed and visible below wrap".to_string());
        parts.push("front three-quarter angle view showing full bouquet face".to_string());
        parts.push("small gold \"PETAL\" brand tag hanging from ribbon".to_string());
    }
}

fn accessory_phrases(state: &BuilderState) -> Option<String> {
    use petal_catalog::Accessory;

    if state.packaging.accessories.is_empty() {
        return None;
    }

    let texts: Vec<&str> = state
        .packaging
        .accessories
        .iter()
        .map(|acc| match acc {
            Accessory::Crown => "tiny golden crown accessory resting on flowers",
            Accessory::GraduationCap => "small graduation cap accessory placed on arrangement",
            Accessory::Bear => "small plush bear toy placed beside the arrangement",
            Accessory::Chocolate => "small chocolate box beside the flowers",
        })
        .collect();

    Some(format!("optional small accessories: {}", texts.join(", ")))
}

fn negative_prompt(state: &BuilderState, selections: &[&Selection]) -> String {
    let mut negative = negative_prompt_base();

    let mut colors: Vec<&str> = selections.iter().map(|s| s.flower.color.as_str()).collect();
    colors.sort_unstable();
    colors.dedup();

    if let &[only] = colors.as_slice() {
        let exclusions = ALL_COLORS
            .iter()
            .filter(|&&c| c != only)
            .map(|c| format!("{c} flowers, {c} petals, {c} color, {c} tint"))
            .collect::<Vec<_>>()
            .join(", ");
        negative = format!(
            "{negative}, mixed colors, multicolored flowers, color variations, {exclusions}"
        );
    }

    match state.packaging.kind {
        PackageKind::Box => {
            let exclusions = match state.packaging.shape {
                BoxShape::Round => "square box, rectangular box, heart-shaped box, sharp corners, angular box",
                BoxShape::Square => "round box, circular box, cylinder box, heart-shaped box, curved edges, oval box",
                BoxShape::Heart => "square box, round box, rectangular box, circular box, sharp corners, angular box",
                BoxShape::Rectangle => "square box, round box, circular box, heart-shaped box, cylinder box",
            };
            negative = format!("{negative}, wrong box shape, incorrect shape, {exclusions}");
        },
        PackageKind::Wrap => {
            if state.packaging.shape == BoxShape::Heart {
                negative = format!(
                    "{negative}, round bouquet, traditional bouquet, oval arrangement, circular arrangement, wrong shape"
                );
            } else {
                negative = format!(
                    "{negative}, heart-shaped bouquet, heart arrangement, box arrangement, wrong shape"
                );
            }
        },
    }

    format!(
        "{negative}, too few flowers, sparse arrangement, gaps in arrangement, incomplete bouquet, wrong flower count, incorrect quantity"
    )
}

fn preview_text(state: &BuilderState, selections: &[&Selection]) -> String {
    let packaging = &state.packaging;
    let package_display = match packaging.kind {
        PackageKind::Box => format!(
            "{} box ({}, {}){}",
            packaging.shape.slug(),
            packaging.size.slug(),
            packaging.color,
            if packaging.ribbon { " with ribbon" } else { "" }
        ),
        PackageKind::Wrap if packaging.shape == BoxShape::Heart => format!(
            "heart-shaped bouquet ({}, {})",
            packaging.size.slug(),
            packaging.color
        ),
        PackageKind::Wrap => format!(
            "wrapped bouquet ({}, {})",
            packaging.size.slug(),
            packaging.color
        ),
    };

    let flower_list = selections
        .iter()
        .map(|s| format!("{} {} {}", s.quantity, s.flower.color, s.flower.family))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        package_display,
        format!("{} flowers: {flower_list}", state.stem_count()),
    ];
    if packaging.glitter {
        lines.push("with glitter".to_string());
    }
    if !packaging.accessories.is_empty() {
        lines.push(format!(
            "accessories: {}",
            packaging
                .accessories
                .iter()
                .map(|a| a.slug())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    lines.join("\n")
}

/// Deterministic 8-hex-digit fingerprint over the canonical configuration.
///
/// Includes the seed so different seeds cache as different previews.
fn cache_key(state: &BuilderState, selections: &[&Selection], seed: u64) -> String {
    let packaging = &state.packaging;
    let mut accessories: Vec<&str> = packaging.accessories.iter().map(|a| a.slug()).collect();
    accessories.sort_unstable();

    let mut flowers: Vec<String> = selections
        .iter()
        .map(|s| format!("{}:{}", s.flower.id, s.quantity))
        .collect();
    flowers.sort_unstable();

    let canonical = format!(
        "kind={:?};shape={};size={};color={};glitter={};ribbon={};acc={};flowers={};seed={seed}",
        packaging.kind,
        packaging.shape.slug(),
        packaging.size.slug(),
        packaging.color,
        packaging.glitter,
        packaging.ribbon,
        accessories.join(","),
        flowers.join(","),
    );

    let mut hash: i32 = 0;
    for ch in canonical.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as i32);
    }
    format!("{:08x}", hash.unsigned_abs())
}

/// Builds the full prompt pair for the current configuration.
///
/// The caller guarantees at least one selection; an empty configuration is
/// rejected by the reducer before this runs.
#[must_use]
pub fn build_prompt(state: &BuilderState, seed: u64) -> BuiltPrompt {
    let selections = sorted_selections(state);

    let mut parts = vec!["masterpiece, best quality, highly detailed".to_string()];

    match state.packaging.kind {
        PackageKind::Box => build_box_prompt(&mut parts, state, &selections),
        PackageKind::Wrap => build_wrap_prompt(&mut parts, state, &selections),
    }

    if state.packaging.glitter {
        parts.push("subtle fine glitter dust sparkling on flower petals catching the light".to_string());
    }

    if let Some(accessories) = accessory_phrases(state) {
        parts.push(accessories);
    }

    parts.push("masterpiece, best quality, highly detailed, 8k uhd, dslr, soft lighting, high quality, film grain".to_string());
    parts.push("professional photography, photograph taken with professional DSLR camera".to_string());
    parts.push("pure white seamless studio background".to_string());
    parts.push("soft diffused natural studio lighting with gentle shadows".to_string());
    parts.push("sharp focus on all flowers, ultra high resolution 8K detail".to_string());
    parts.push("photorealistic, hyperrealistic, lifelike".to_string());
    parts.push("real photograph, not illustration, not 3D render, not digital art".to_string());

    // A seed-indexed variation phrase keeps repeated generations of the
    // same arrangement from being served identical images upstream.
    #[allow(clippy::cast_possible_truncation)]
    let variation = VARIATION_PHRASES[(seed % VARIATION_PHRASES.len() as u64) as usize];
    parts.push(format!("{variation}, variation seed {seed}"));

    BuiltPrompt {
        positive: parts.join(", "),
        negative: negative_prompt(state, &selections),
        preview: preview_text(state, &selections),
        cache_key: cache_key(state, &selections, seed),
    }
}
