use std::ops::RangeInclusive;

use crate::models::avatar::{GeneratedImage, PixelAvatarOptions};
use crate::services::color::{color_from_hash, resolve_color};
use crate::services::hash::{generate_hash, hash_input};
use crate::utils::data_uri::encode_svg;
use crate::utils::svg::SvgCanvas;

pub const GRID_CELLS: u32 = 8;

pub const BACKGROUND_COLOR: &str = "#f0f0f0";
pub const DEFAULT_EYE_COLOR: &str = "#000000";
pub const MOUTH_COLOR: &str = "#ff9999";

// (rows, columns), both inclusive and 0-based.
const HAIR: (RangeInclusive<u32>, RangeInclusive<u32>) = (0..=2, 2..=5);
const FACE: (RangeInclusive<u32>, RangeInclusive<u32>) = (2..=5, 1..=6);
const EYES: [(u32, u32); 2] = [(4, 2), (4, 5)];
const MOUTH_ROW: u32 = 5;
const MOUTH_COLUMNS: RangeInclusive<u32> = 3..=4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelPalette {
    pub skin: String,
    pub hair: String,
    pub eye: String,
}

pub fn derive_pixel_palette(options: &PixelAvatarOptions) -> PixelPalette {
    let hash = u64::from(generate_hash(&hash_input(
        &options.base.username,
        options.base.seed,
    )));

    PixelPalette {
        skin: resolve_color(options.skin_color.as_deref(), || color_from_hash(hash)),
        // offset by one so hair does not track skin
        hair: resolve_color(options.hair_color.as_deref(), || color_from_hash(hash + 1)),
        eye: resolve_color(options.eye_color.as_deref(), || {
            DEFAULT_EYE_COLOR.to_string()
        }),
    }
}

pub fn generate_pixel_avatar(options: &PixelAvatarOptions) -> GeneratedImage {
    let palette = derive_pixel_palette(options);
    let size = options.base.size;
    let cell = f64::from(size) / f64::from(GRID_CELLS);

    tracing::debug!(
        "Generating pixel avatar: username={:?}, seed={:?}, size={}",
        options.base.username,
        options.base.seed,
        size
    );

    let mut canvas = SvgCanvas::new(size);
    canvas.fill(BACKGROUND_COLOR);

    canvas.comment("Hair");
    fill_cells(&mut canvas, cell, &HAIR.0, &HAIR.1, &palette.hair);

    canvas.comment("Face");
    fill_cells(&mut canvas, cell, &FACE.0, &FACE.1, &palette.skin);

    canvas.comment("Eyes");
    for (row, column) in EYES {
        fill_cells(&mut canvas, cell, &(row..=row), &(column..=column), &palette.eye);
    }

    canvas.comment("Mouth");
    let mouth_width = f64::from(MOUTH_COLUMNS.end() - MOUTH_COLUMNS.start() + 1);
    canvas.rect(
        f64::from(*MOUTH_COLUMNS.start()) * cell,
        f64::from(MOUTH_ROW) * cell,
        mouth_width * cell,
        cell,
        MOUTH_COLOR,
    );

    encode_svg(&canvas.finish())
}

fn fill_cells(
    canvas: &mut SvgCanvas,
    cell: f64,
    rows: &RangeInclusive<u32>,
    columns: &RangeInclusive<u32>,
    color: &str,
) {
    for row in rows.clone() {
        for column in columns.clone() {
            canvas.rect(
                f64::from(column) * cell,
                f64::from(row) * cell,
                cell,
                cell,
                color,
            );
        }
    }
}
