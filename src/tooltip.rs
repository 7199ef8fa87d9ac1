use deed_catalog::Catalog;
use deed_geom::{Vec3, world_to_tile};
use deed_map::{Map, MapError};
use deed_select::{MapBounds, TileSelectionHit, TileSelectionTarget};

use crate::tool::ToolKind;

/// Label of the interpolated height line in the height tooltip.
pub const HEIGHT_PREFIX: &str = "Height: ";

/// Width of a number when printed, sign included.
fn digits(v: i32) -> usize {
    v.to_string().len()
}

fn padded(v: i32, width: usize) -> String {
    format!("{:>width$}", v, width = width)
}

/// Corner heights of a tile laid out as seen from above:
/// top row `h01 h11`, a blank line, bottom row `h00 h10`.
pub fn height_grid(h00: i32, h10: i32, h01: i32, h11: i32) -> String {
    let w = digits(h00).max(digits(h10)).max(digits(h01)).max(digits(h11));
    format!(
        "{}   {}\n\n{}   {}",
        padded(h01, w),
        padded(h11, w),
        padded(h00, w),
        padded(h10, w)
    )
}

/// Hover text for a point on the map surface. Empty when the point is off the map.
pub fn build_tooltip(
    map: &Map,
    catalog: &Catalog,
    tool: ToolKind,
    point: Vec3,
    floor: i32,
    hit: TileSelectionHit,
) -> Result<String, MapError> {
    if !MapBounds::of(map).contains_point(point) {
        return Ok(String::new());
    }
    let (x, y) = world_to_tile(point);
    let mut out = String::new();
    out.push_str(&format!("X: {} Y: {}", x, y));

    match tool {
        ToolKind::Height => {
            // The right/top map edge belongs to the last tile.
            let (tx, ty) = map.clamp_tile(x, y);
            let [h00, h10, h01, h11] = map.corner_heights(tx, ty, floor)?;
            let here = map.bilinear_height(point.x, point.z, floor)?;
            out.push('\n');
            out.push_str(&format!("{}{:.2}", HEIGHT_PREFIX, here));
            out.push('\n');
            out.push_str(&height_grid(h00, h10, h01, h11));
        }
        ToolKind::Ground => {
            let (tx, ty) = map.clamp_tile(x, y);
            let name = map
                .ground(tx, ty, floor)?
                .and_then(|g| catalog.ground_name(g))
                .unwrap_or("No ground");
            out.push('\n');
            out.push_str(name);
        }
        ToolKind::Walls => {
            let wall = match hit.target {
                TileSelectionTarget::BottomBorder => Some(map.horizontal_wall(hit.x, hit.y, floor)?),
                TileSelectionTarget::LeftBorder => Some(map.vertical_wall(hit.x, hit.y, floor)?),
                _ => None,
            };
            if let Some(wall) = wall {
                let name = wall
                    .and_then(|w| catalog.wall_name(w.id))
                    .unwrap_or("No wall");
                out.push('\n');
                out.push_str(name);
            }
        }
        ToolKind::Caves => {
            if floor < 0 {
                let (tx, ty) = map.clamp_tile(x, y);
                let name = map
                    .cave(tx, ty, floor)?
                    .and_then(|c| catalog.caves.get(c))
                    .map(|c| c.name.as_str())
                    .unwrap_or("No cave");
                out.push('\n');
                out.push_str(name);
            }
        }
    }
    Ok(out)
}
