//! PNG preview of a tile layout
//!
//! Each entry is drawn as a square sprite. Sprites are defined in their
//! untransformed orientation and sampled through the entry's rotation and
//! mirror, so the preview shows exactly what a renderer would place.

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::io::configuration::{MAX_PREVIEW_PIXELS, MAX_TILE_PIXELS, MIN_TILE_PIXELS};
use crate::io::error::{LevelError, Result, invalid_parameter};
use crate::io::layout::{LayoutEntry, LevelLayout};
use crate::spatial::tiles::{TileCategory, TileShape};

const OUTSIDE_WALL_COLOR: [u8; 4] = [33, 33, 222, 255];
const INSIDE_WALL_COLOR: [u8; 4] = [72, 112, 255, 255];
const PELLET_COLOR: [u8; 4] = [255, 184, 151, 255];
const GATE_COLOR: [u8; 4] = [255, 184, 255, 255];

/// Fill colour used for a category
pub const fn tile_color(category: TileCategory) -> [u8; 4] {
    match category {
        TileCategory::Empty => [0, 0, 0, 0],
        TileCategory::OutsideCorner | TileCategory::OutsideWall | TileCategory::TJunction => {
            OUTSIDE_WALL_COLOR
        }
        TileCategory::InsideCorner | TileCategory::InsideWall => INSIDE_WALL_COLOR,
        TileCategory::StandardPellet | TileCategory::PowerPellet => PELLET_COLOR,
        TileCategory::GhostWall => GATE_COLOR,
    }
}

/// Whether pixel `(x, y)` of an untransformed sprite is painted
///
/// Untransformed corners join their right and bottom edges, walls run
/// vertically, gates run horizontally, and junctions join their left and
/// bottom edges under a rail along the top.
pub const fn sprite_covers(category: TileCategory, x: u32, y: u32, size: u32) -> bool {
    let mid = size / 2;
    let half_stroke = size / 8;
    let near_x = x.abs_diff(mid) <= half_stroke;
    let near_y = y.abs_diff(mid) <= half_stroke;

    match category.shape() {
        TileShape::Open => false,
        TileShape::Wall => near_x,
        TileShape::Gate => near_y,
        TileShape::Corner => (near_y && x >= mid) || (near_x && y >= mid),
        TileShape::Junction => (near_y && x <= mid) || (near_x && y >= mid) || y <= half_stroke,
        TileShape::Pellet => {
            let radius = if matches!(category, TileCategory::PowerPellet) {
                size / 3
            } else {
                size / 8
            };
            let dx = x.abs_diff(mid);
            let dy = y.abs_diff(mid);
            dx * dx + dy * dy <= radius * radius
        }
    }
}

/// Preview image size as (width, height) for a level of `rows x cols` cells
///
/// # Errors
///
/// Returns an error if:
/// - `tile_pixels` is outside the supported range
/// - The image would exceed [`MAX_PREVIEW_PIXELS`]
pub fn preview_dimensions(rows: usize, cols: usize, tile_pixels: u32) -> Result<(u32, u32)> {
    if !(MIN_TILE_PIXELS..=MAX_TILE_PIXELS).contains(&tile_pixels) {
        return Err(invalid_parameter(
            "tile_pixels",
            &tile_pixels,
            &format!("must be between {MIN_TILE_PIXELS} and {MAX_TILE_PIXELS}"),
        ));
    }

    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(tile_pixels))
    };
    match (side(cols), side(rows)) {
        (Some(width), Some(height))
            if u64::from(width) * u64::from(height) <= MAX_PREVIEW_PIXELS =>
        {
            Ok((width, height))
        }
        _ => Err(invalid_parameter(
            "tile_pixels",
            &tile_pixels,
            &format!("a {rows}x{cols} level would exceed {MAX_PREVIEW_PIXELS} preview pixels"),
        )),
    }
}

fn paint_entry(img: &mut RgbaImage, entry: &LayoutEntry, tile_pixels: u32) {
    let color = Rgba(tile_color(entry.category));
    let origin_x = entry.col as u32 * tile_pixels;
    let origin_y = entry.row as u32 * tile_pixels;

    for py in 0..tile_pixels {
        for px in 0..tile_pixels {
            let (rx, ry) = entry.rotation.source_pixel(px, py, tile_pixels);
            let (sx, sy) = entry.mirror.source_pixel(rx, ry, tile_pixels);
            if sprite_covers(entry.category, sx, sy, tile_pixels) {
                if let Some(pixel) = img.get_pixel_mut_checked(origin_x + px, origin_y + py) {
                    *pixel = color;
                }
            }
        }
    }
}

/// Render a layout to an image with a transparent background
///
/// # Errors
///
/// Returns an error if `tile_pixels` is outside the supported range or the
/// image would exceed the preview pixel budget
pub fn render_preview(layout: &LevelLayout, tile_pixels: u32) -> Result<RgbaImage> {
    let (width, height) = preview_dimensions(layout.rows, layout.cols, tile_pixels)?;
    let mut img = RgbaImage::new(width, height);

    for entry in &layout.entries {
        paint_entry(&mut img, entry, tile_pixels);
    }

    Ok(img)
}

/// Render a layout and save it as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `tile_pixels` is outside the supported range or over the pixel budget
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview(layout: &LevelLayout, tile_pixels: u32, output_path: &Path) -> Result<()> {
    let img = render_preview(layout, tile_pixels)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LevelError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| LevelError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
