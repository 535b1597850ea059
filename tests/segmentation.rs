//! End-to-end segmentation scenarios.

use tategaki::{LassoPolygon, SegmentInput, Segmentation, Segmenter, SegmenterConfig, Stroke};

const CANVAS: f64 = 400.0;

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Stroke {
    let xy: Vec<(f64, f64)> = (0..=6)
        .map(|i| {
            let f = i as f64 / 6.0;
            (x0 + (x1 - x0) * f, y0 + (y1 - y0) * f)
        })
        .collect();
    Stroke::from_xy(&xy)
}

/// Three strokes shaped like 工 in a `size` box at `(x0, y0)`.
fn character(x0: f64, y0: f64, size: f64) -> Vec<Stroke> {
    vec![
        line(x0, y0 + size / 5.0, x0 + size, y0 + size / 5.0),
        line(x0 + size / 2.0, y0, x0 + size / 2.0, y0 + size),
        line(x0, y0 + size - size / 5.0, x0 + size, y0 + size - size / 5.0),
    ]
}

fn page(origins: &[(f64, f64)]) -> Vec<Stroke> {
    origins
        .iter()
        .flat_map(|&(x, y)| character(x, y, 60.0))
        .collect()
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> LassoPolygon {
    LassoPolygon::from_xy(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
}

fn run(input: &SegmentInput) -> Segmentation<'_> {
    Segmenter::default().segment(input).unwrap()
}

fn assert_well_formed(out: &Segmentation<'_>, stroke_count: usize) {
    assert_eq!(out.strokes.len(), stroke_count);
    for (i, c) in out.characters.iter().enumerate() {
        assert_eq!(c.index, i);
        assert!(!c.stroke_indices.is_empty());
        for &s in &c.stroke_indices {
            assert_eq!(out.strokes[s].character_index, Some(i));
        }
    }
    for (s, annotated) in out.strokes.iter().enumerate() {
        match annotated.character_index {
            Some(c) => assert!(out.characters[c].stroke_indices.contains(&s)),
            None => assert!(out.characters.iter().all(|c| !c.stroke_indices.contains(&s))),
        }
    }
}

#[test]
fn stacked_characters_read_top_to_bottom() {
    let strokes = page(&[(100.0, 200.0), (100.0, 50.0)]);
    let input = SegmentInput::new(strokes, CANVAS, CANVAS);
    let out = run(&input);

    assert_well_formed(&out, 6);
    assert_eq!(out.characters.len(), 2);
    assert!(out.characters[0].bounds.min_y < out.characters[1].bounds.min_y);
    // Input order was bottom character first.
    assert_eq!(out.characters[0].stroke_indices, vec![3, 4, 5]);
    assert_eq!(out.characters[1].stroke_indices, vec![0, 1, 2]);
}

#[test]
fn two_by_two_reads_right_column_first() {
    let strokes = page(&[(250.0, 50.0), (250.0, 200.0), (100.0, 50.0), (100.0, 200.0)]);
    let input = SegmentInput::new(strokes, CANVAS, CANVAS);
    let out = run(&input);

    assert_well_formed(&out, 12);
    assert_eq!(out.characters.len(), 4);
    assert!(out.characters[0].bounds.min_x > out.characters[2].bounds.min_x);
    assert!(out.characters[0].bounds.min_y < out.characters[1].bounds.min_y);
    for (i, c) in out.characters.iter().enumerate() {
        let first = i * 3;
        assert_eq!(c.stroke_indices, vec![first, first + 1, first + 2]);
    }

    assert_eq!(out.dividers.columns.len(), 1);
    assert_eq!(out.dividers.columns[0].intercept, 205.0);
    assert_eq!(out.dividers.rows.len(), 2);
    for rows in &out.dividers.rows {
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].intercept, 155.0);
    }
}

#[test]
fn lasso_keeps_separable_clusters_together() {
    let strokes = page(&[(100.0, 50.0), (100.0, 200.0)]);
    let input = SegmentInput::new(strokes, CANVAS, CANVAS)
        .with_lassos(vec![rect(80.0, 30.0, 180.0, 280.0)]);
    let out = run(&input);

    assert_well_formed(&out, 6);
    assert_eq!(out.characters.len(), 1);
    assert_eq!(out.characters[0].stroke_indices, vec![0, 1, 2, 3, 4, 5]);

    assert_eq!(out.lassos.len(), 1);
    assert_eq!(out.lassos[0].stroke_indices, vec![0, 1, 2, 3, 4, 5]);
    assert!(out.lassos[0].hull.len() >= 3);
    assert!(out.lasso_svg.contains("hsl(0,70%,50%)"));
}

#[test]
fn lassos_separate_touching_characters() {
    // Two units apart: too close for a natural row gap.
    let strokes = page(&[(100.0, 50.0), (100.0, 112.0)]);

    let plain = SegmentInput::new(strokes.clone(), CANVAS, CANVAS);
    assert_eq!(run(&plain).characters.len(), 1);

    let lassoed = SegmentInput::new(strokes, CANVAS, CANVAS).with_lassos(vec![
        rect(90.0, 40.0, 170.0, 111.0),
        rect(90.0, 111.5, 170.0, 185.0),
    ]);
    let out = run(&lassoed);

    assert_well_formed(&out, 6);
    assert_eq!(out.characters.len(), 2);
    assert_eq!(out.characters[0].stroke_indices, vec![0, 1, 2]);
    assert_eq!(out.characters[1].stroke_indices, vec![3, 4, 5]);

    let rows = &out.dividers.rows[0];
    assert_eq!(rows.len(), 1);
    assert!(rows[0].mandatory);
    assert_eq!(rows[0].intercept, 111.0);
}

#[test]
fn fully_stolen_lasso_is_omitted() {
    let strokes = page(&[(100.0, 50.0), (100.0, 200.0)]);
    let input = SegmentInput::new(strokes, CANVAS, CANVAS).with_lassos(vec![
        rect(80.0, 30.0, 180.0, 130.0),
        rect(80.0, 30.0, 180.0, 280.0),
        rect(300.0, 300.0, 350.0, 350.0),
    ]);
    let out = run(&input);

    assert_eq!(out.lassos.len(), 1);
    assert_eq!(out.lassos[0].lasso_index, 1);
    assert_eq!(out.characters.len(), 1);
}

#[test]
fn single_character_shortcut() {
    let mut strokes = page(&[(100.0, 50.0), (250.0, 200.0)]);
    strokes.push(Stroke::default());
    let input = SegmentInput::new(strokes, CANVAS, CANVAS).with_max_characters(1);
    let out = run(&input);

    assert_well_formed(&out, 7);
    assert_eq!(out.characters.len(), 1);
    assert_eq!(out.characters[0].stroke_indices, (0..7).collect::<Vec<_>>());
    assert!(out.strokes.iter().all(|s| s.character_index == Some(0)));
    assert!(out.dividers.is_empty());
    assert!(!out.divider_svg.contains("<line"));
}

#[test]
fn no_strokes() {
    let input = SegmentInput::new(Vec::new(), CANVAS, CANVAS)
        .with_lassos(vec![rect(0.0, 0.0, 100.0, 100.0)]);
    let out = run(&input);

    assert!(out.characters.is_empty());
    assert!(out.strokes.is_empty());
    assert!(out.lassos.is_empty());
    assert!(out.divider_svg.is_empty());
    assert!(out.lasso_svg.is_empty());
}

#[test]
fn empty_strokes_are_unplaced() {
    let mut strokes = page(&[(100.0, 50.0)]);
    strokes.insert(1, Stroke::default());
    let input = SegmentInput::new(strokes, CANVAS, CANVAS);
    let out = run(&input);

    assert_well_formed(&out, 4);
    assert_eq!(out.characters.len(), 1);
    assert_eq!(out.strokes[1].character_index, None);
    assert!(!out.strokes[1].is_placed());
}

#[test]
fn no_lassos_means_no_lasso_diagram() {
    let input = SegmentInput::new(page(&[(100.0, 50.0)]), CANVAS, CANVAS);
    let out = run(&input);

    assert!(out.lassos.is_empty());
    assert!(out.lasso_svg.is_empty());
    assert!(out.divider_svg.starts_with("<svg"));
}

#[test]
fn strokes_are_borrowed_from_input() {
    let input = SegmentInput::new(page(&[(100.0, 50.0)]), CANVAS, CANVAS);
    let out = run(&input);

    for (annotated, original) in out.strokes.iter().zip(&input.strokes) {
        assert!(std::ptr::eq(annotated.stroke, original));
    }
}

#[test]
fn three_columns_in_reading_order() {
    // Three rows per column, so the balancer leaves all three columns alone.
    let origins: Vec<(f64, f64)> = [280.0, 160.0, 40.0]
        .iter()
        .flat_map(|&x| [40.0, 150.0, 260.0].map(|y| (x, y)))
        .collect();
    let input = SegmentInput::new(page(&origins), CANVAS, CANVAS);
    let out = run(&input);

    assert_well_formed(&out, 27);
    assert_eq!(out.characters.len(), 9);
    assert_eq!(out.dividers.columns.len(), 2);
    for pair in out.characters.windows(2) {
        let (a, b) = (&pair[0].bounds, &pair[1].bounds);
        if (a.min_x - b.min_x).abs() < 1.0 {
            assert!(a.min_y < b.min_y);
        } else {
            assert!(a.min_x > b.min_x);
        }
    }
}

#[test]
fn custom_config_is_validated() {
    let config = SegmenterConfig { lasso_containment_threshold: 1.5, ..SegmenterConfig::default() };
    let input = SegmentInput::new(Vec::new(), CANVAS, CANVAS);
    let err = tategaki::segment_with(config, &input).unwrap_err();
    assert!(matches!(err, tategaki::Error::Config(_)));
}

#[test]
fn side_by_side_lassos_in_one_row_are_balanced_into_one_column() {
    // A forced column divider between two lassoed clusters leaves two
    // columns of one row each; balancing still merges them.
    let strokes = page(&[(100.0, 50.0), (164.0, 50.0)]);
    let input = SegmentInput::new(strokes, CANVAS, CANVAS).with_lassos(vec![
        rect(90.0, 40.0, 162.0, 120.0),
        rect(163.0, 40.0, 234.0, 120.0),
    ]);
    let out = run(&input);

    assert_well_formed(&out, 6);
    assert!(out.dividers.columns.is_empty());
    let max_rows = out.dividers.rows.iter().map(|r| r.len() + 1).max().unwrap_or(0);
    assert!(out.dividers.columns.len() < max_rows);
    assert_eq!(out.characters.len(), 1);
    assert_eq!(out.lassos.len(), 2);
}
