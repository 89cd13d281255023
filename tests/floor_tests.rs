//! FloorField determinism and layout.

use icosa::term::FloorField;
use icosa::types::{Dims, FloorTile};

#[test]
fn test_identical_dims_build_identical_floors() {
    for dims in [Dims::new(20, 10), Dims::new(80, 24), Dims::new(211, 57)] {
        let a = FloorField::build(dims);
        let b = FloorField::build(dims);
        assert_eq!(a.tiles(), b.tiles());
    }
}

#[test]
fn test_sky_above_floor_below() {
    let dims = Dims::new(80, 24);
    let floor = FloorField::build(dims);
    let horizon = floor.horizon_row();
    assert_eq!(horizon, 13);
    for row in 0..dims.rows {
        for col in 0..dims.columns {
            let tile = floor.tile(col, row);
            if row <= horizon {
                assert_eq!(tile, FloorTile::Sky);
            } else {
                assert_ne!(tile, FloorTile::Sky);
            }
        }
    }
}

#[test]
fn test_both_tile_colors_appear_on_every_floor_row() {
    let dims = Dims::new(80, 24);
    let floor = FloorField::build(dims);
    for row in floor.horizon_row() + 1..dims.rows {
        let tiles: Vec<_> = (0..dims.columns).map(|c| floor.tile(c, row)).collect();
        assert!(tiles.contains(&FloorTile::Dark), "row {row}");
        assert!(tiles.contains(&FloorTile::Light), "row {row}");
    }
}

#[test]
fn test_tiles_narrow_toward_horizon() {
    // Count colour changes per row: rows near the horizon have more, smaller tiles.
    let dims = Dims::new(120, 40);
    let floor = FloorField::build(dims);
    let changes = |row: u16| {
        (1..dims.columns)
            .filter(|&c| floor.tile(c, row) != floor.tile(c - 1, row))
            .count()
    };
    let near = changes(floor.horizon_row() + 1);
    let far = changes(dims.rows - 1);
    assert!(near > far, "near {near}, far {far}");
}
