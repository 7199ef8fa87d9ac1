use deed_geom::Vec3;
use deed_select::{
    Classifier, ElementKind, MapBounds, TileSelectionHit, TileSelectionMode, TileSelectionTarget,
    resolve_address,
};
use proptest::prelude::*;

const B: f32 = Classifier::DEFAULT_BORDER;
const BOUNDS: MapBounds = MapBounds::new(16, 16);

fn at(x: i32, y: i32, fx: f32, fy: f32) -> Vec3 {
    Vec3::new((x as f32 + fx) * 4.0, 0.0, (y as f32 + fy) * 4.0)
}

fn tile() -> impl Strategy<Value = (i32, i32)> {
    (1i32..15, 1i32..15)
}

fn inner() -> impl Strategy<Value = f32> {
    (B + 0.01)..(1.0 - B - 0.01)
}

fn low_band() -> impl Strategy<Value = f32> {
    0.0f32..(B - 0.01)
}

fn high_band() -> impl Strategy<Value = f32> {
    (1.0 - B + 0.01)..0.999
}

fn band() -> impl Strategy<Value = f32> {
    prop_oneof![low_band(), high_band()]
}

proptest! {
    #[test]
    fn inner_points_are_inner_tiles((x, y) in tile(), fx in inner(), fy in inner()) {
        let c = Classifier::default();
        let p = at(x, y, fx, fy);
        prop_assert_eq!(
            c.classify(p, TileSelectionMode::Borders, BOUNDS),
            TileSelectionHit::new(x, y, TileSelectionTarget::InnerTile)
        );
        prop_assert_eq!(
            c.classify(p, TileSelectionMode::Tiles, BOUNDS),
            TileSelectionHit::new(x, y, TileSelectionTarget::Tile)
        );
    }

    // Near two edges at once is always a corner, never a border
    #[test]
    fn corner_band_is_corner((x, y) in tile(), fx in band(), fy in band()) {
        let hit = Classifier::default().classify(at(x, y, fx, fy), TileSelectionMode::Borders, BOUNDS);
        prop_assert_eq!(hit.target, TileSelectionTarget::Corner);
    }

    // Every point along the edge between (2,2) and (2,3) is the bottom border of (2,3)
    #[test]
    fn shared_edge_has_single_owner(x in 8.45f32..11.55, z in 11.65f32..12.35) {
        let hit = Classifier::default().classify(Vec3::new(x, 0.0, z), TileSelectionMode::Borders, BOUNDS);
        prop_assert_eq!(hit, TileSelectionHit::new(2, 3, TileSelectionTarget::BottomBorder));
    }

    // The addressed element always lies within one band width of the point, so
    // two points can only share an address if they are near the same element.
    #[test]
    fn address_is_geometrically_near(px in 0.5f32..63.5, pz in 0.5f32..63.5, floor in -6i32..=15) {
        let c = Classifier::default();
        let hit = c.classify(Vec3::new(px, 0.0, pz), TileSelectionMode::Borders, BOUNDS);
        let addr = resolve_address(hit, floor).unwrap();
        prop_assert_eq!(addr.floor, floor);
        let ex = addr.x as f32 * 4.0;
        let ey = addr.y as f32 * 4.0;
        let band = B * 4.0 + 1e-3;
        match addr.kind {
            ElementKind::Corner => {
                prop_assert!((px - ex).abs() <= band && (pz - ey).abs() <= band);
            }
            ElementKind::LeftBorder => {
                prop_assert!((px - ex).abs() <= band);
                prop_assert!(pz >= ey && pz <= ey + 4.0);
            }
            ElementKind::BottomBorder => {
                prop_assert!((pz - ey).abs() <= band);
                prop_assert!(px >= ex && px <= ex + 4.0);
            }
            ElementKind::Tile => {
                prop_assert!(px >= ex + band - 2e-3 && px <= ex + 4.0 - band + 2e-3);
                prop_assert!(pz >= ey + band - 2e-3 && pz <= ey + 4.0 - band + 2e-3);
            }
        }
    }
}
