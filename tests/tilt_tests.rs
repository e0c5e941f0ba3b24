//! Tilt tests - slide/merge behavior across all four directions

use twenty48::core::{Model, Tile};
use twenty48::types::Side;

/// Build a model from `values[row][col]`, row 0 = bottom, 0 = empty.
fn model_from(values: &[&[u32]]) -> Model {
    Model::from_raw_values(values, 0, 0, false)
}

/// Tile values as `values[row][col]`, row 0 = bottom.
fn values_of(model: &Model) -> Vec<Vec<u32>> {
    (0..model.size())
        .map(|row| {
            (0..model.size())
                .map(|col| model.tile(col, row).map_or(0, |t| t.value()))
                .collect()
        })
        .collect()
}

fn tile_count(model: &Model) -> usize {
    values_of(model)
        .iter()
        .flatten()
        .filter(|&&v| v != 0)
        .count()
}

#[test]
fn test_example_end_to_end_west() {
    // Empty 4x4, bottom row [2, 2, _, _], tilt west.
    let mut model = Model::new(4);
    model.add_tile(Tile::new(2, 0, 0));
    model.add_tile(Tile::new(2, 1, 0));

    let changed = model.tilt(Side::West);

    assert!(changed);
    assert_eq!(
        values_of(&model),
        vec![
            vec![4, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]
    );
    assert_eq!(model.score(), 4);
}

#[test]
fn test_three_in_a_row_tie_break_east() {
    // [4, 4, 4, _] with the leading edge rightmost: the two leading 4s merge
    // to an 8 on the east edge; the trailing 4 does not re-merge.
    let mut model = model_from(&[
        &[0, 4, 4, 4],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ]);

    assert!(model.tilt(Side::East));
    assert_eq!(values_of(&model)[0], vec![0, 0, 4, 8]);
    assert_eq!(model.score(), 8);
}

#[test]
fn test_single_merge_per_tile() {
    // A full column of equal tiles collapses into two pairs, never an 8.
    let mut model = model_from(&[
        &[2, 0, 0, 0],
        &[2, 0, 0, 0],
        &[2, 0, 0, 0],
        &[2, 0, 0, 0],
    ]);

    assert!(model.tilt(Side::North));
    let values = values_of(&model);
    assert_eq!(values[3][0], 4);
    assert_eq!(values[2][0], 4);
    assert_eq!(values[1][0], 0);
    assert_eq!(values[0][0], 0);
    assert_eq!(model.score(), 8);
}

#[test]
fn test_no_move_is_idempotent() {
    // Fully settled toward the north edge; tilting north again is a no-op.
    let mut model = model_from(&[
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
        &[2, 0, 8, 0],
        &[4, 2, 16, 2],
    ]);
    let before = model.clone();

    assert!(!model.tilt(Side::North));
    assert_eq!(values_of(&model), values_of(&before));
    assert_eq!(model.score(), before.score());
    assert_eq!(model, before);
}

#[test]
fn test_conservation_of_tiles_and_score() {
    // Two merges (4+4 west in the bottom row, 2+2 west in the top row):
    // tile count drops by exactly 2, score rises by exactly 8 + 4.
    let mut model = model_from(&[
        &[4, 0, 4, 8],
        &[2, 16, 0, 0],
        &[0, 0, 0, 0],
        &[2, 0, 0, 2],
    ]);
    let before_count = tile_count(&model);
    let before_score = model.score();

    assert!(model.tilt(Side::West));

    assert_eq!(tile_count(&model), before_count - 2);
    assert_eq!(model.score(), before_score + 8 + 4);
    assert_eq!(
        values_of(&model),
        vec![
            vec![8, 8, 0, 0],
            vec![2, 16, 0, 0],
            vec![0, 0, 0, 0],
            vec![4, 0, 0, 0],
        ]
    );
}

#[test]
fn test_each_direction_moves_toward_its_edge() {
    let start: &[&[u32]] = &[
        &[0, 0, 0, 0],
        &[0, 2, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ];

    let mut north = model_from(start);
    north.tilt(Side::North);
    assert_eq!(values_of(&north)[3][1], 2);

    let mut south = model_from(start);
    south.tilt(Side::South);
    assert_eq!(values_of(&south)[0][1], 2);

    let mut east = model_from(start);
    east.tilt(Side::East);
    assert_eq!(values_of(&east)[1][3], 2);

    let mut west = model_from(start);
    west.tilt(Side::West);
    assert_eq!(values_of(&west)[1][0], 2);
}

/// Re-express `values` in the perspective frame of `side`, i.e. rotate the
/// board so that tilting the rotated board north mirrors tilting the
/// original toward `side`.
fn rotate_to_north(values: &[Vec<u32>], side: Side) -> Vec<Vec<u32>> {
    let size = values.len();
    let mut out = vec![vec![0; size]; size];
    for (persp_row, out_row) in out.iter_mut().enumerate() {
        for (persp_col, slot) in out_row.iter_mut().enumerate() {
            let abs_col = side.abs_col(persp_col, persp_row, size);
            let abs_row = side.abs_row(persp_col, persp_row, size);
            *slot = values[abs_row][abs_col];
        }
    }
    out
}

/// Inverse of [`rotate_to_north`].
fn rotate_from_north(values: &[Vec<u32>], side: Side) -> Vec<Vec<u32>> {
    let size = values.len();
    let mut out = vec![vec![0; size]; size];
    for (persp_row, in_row) in values.iter().enumerate() {
        for (persp_col, &value) in in_row.iter().enumerate() {
            let abs_col = side.abs_col(persp_col, persp_row, size);
            let abs_row = side.abs_row(persp_col, persp_row, size);
            out[abs_row][abs_col] = value;
        }
    }
    out
}

#[test]
fn test_perspective_symmetry_all_directions() {
    let start = vec![
        vec![2, 2, 4, 0],
        vec![0, 2, 4, 4],
        vec![8, 0, 2, 2],
        vec![8, 2, 0, 2],
    ];
    let start_refs: Vec<&[u32]> = start.iter().map(|row| row.as_slice()).collect();

    for side in Side::ALL {
        let mut direct = Model::from_raw_values(&start_refs, 0, 0, false);
        direct.tilt(side);

        let rotated = rotate_to_north(&start, side);
        let rotated_refs: Vec<&[u32]> = rotated.iter().map(|row| row.as_slice()).collect();
        let mut via_north = Model::from_raw_values(&rotated_refs, 0, 0, false);
        via_north.tilt(Side::North);

        assert_eq!(
            values_of(&direct),
            rotate_from_north(&values_of(&via_north), side),
            "tilting {:?} diverged from the rotate/tilt-north/rotate-back path",
            side
        );
        assert_eq!(direct.score(), via_north.score(), "score diverged for {:?}", side);
    }
}

#[test]
fn test_columns_do_not_interact() {
    // Equal tiles in the same row never merge on a vertical tilt.
    let mut model = model_from(&[
        &[2, 2, 2, 2],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ]);

    assert!(model.tilt(Side::North));
    assert_eq!(values_of(&model)[3], vec![2, 2, 2, 2]);
    assert_eq!(model.score(), 0);
}

#[test]
fn test_tilt_preserves_tile_position_invariant() {
    // Every stored tile must report the cell it actually occupies after the
    // scan rewrites positions through the perspective transform.
    let mut model = model_from(&[
        &[2, 0, 4, 2],
        &[2, 4, 0, 2],
        &[0, 4, 4, 0],
        &[2, 0, 2, 8],
    ]);
    for side in Side::ALL {
        model.tilt(side);
        for row in 0..model.size() {
            for col in 0..model.size() {
                if let Some(tile) = model.tile(col, row) {
                    assert_eq!((tile.col(), tile.row()), (col, row));
                }
            }
        }
    }
}
