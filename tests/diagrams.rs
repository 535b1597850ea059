use tategaki::{SegmentInput, Segmenter, Stroke};

fn character(x0: f64, y0: f64) -> Vec<Stroke> {
    let h = |y: f64| Stroke::from_xy(&[(x0, y), (x0 + 30.0, y), (x0 + 60.0, y)]);
    vec![
        h(y0 + 12.0),
        Stroke::from_xy(&[(x0 + 30.0, y0), (x0 + 30.0, y0 + 30.0), (x0 + 30.0, y0 + 60.0)]),
        h(y0 + 48.0),
    ]
}

#[test]
fn two_by_two_dividers() {
    let strokes = [(250.0, 50.0), (250.0, 200.0), (100.0, 50.0), (100.0, 200.0)]
        .iter()
        .flat_map(|&(x, y)| character(x, y))
        .collect();
    let input = SegmentInput::new(strokes, 400.0, 400.0);
    let out = Segmenter::default().segment(&input).unwrap();

    insta::assert_snapshot!(out.divider_svg, @r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400">
      <line class="column-divider" x1="205.00" y1="40.00" x2="205.00" y2="270.00" stroke="rgb(220,38,38)" stroke-width="2"/>
      <line class="row-divider" x1="205.00" y1="155.00" x2="310.00" y2="155.00" stroke="rgb(37,99,235)" stroke-width="2"/>
      <line class="row-divider" x1="100.00" y1="155.00" x2="205.00" y2="155.00" stroke="rgb(37,99,235)" stroke-width="2"/>
    </svg>
    "#);
}

#[test]
fn single_character_has_bare_divider_container() {
    let input = SegmentInput::new(character(100.0, 50.0), 320.0, 240.0).with_max_characters(1);
    let out = Segmenter::default().segment(&input).unwrap();

    insta::assert_snapshot!(out.divider_svg, @r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="320" height="240" viewBox="0 0 320 240">
    </svg>
    "#);
}

#[cfg(feature = "serde")]
mod wire {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_uses_camel_case_and_defaults() {
        let input: SegmentInput = serde_json::from_value(json!({
            "strokes": [[{"x": 1.0, "y": 2.0, "t": 0.0}, {"x": 3.0, "y": 4.0}]],
            "canvasWidth": 100.0,
            "canvasHeight": 80.0
        }))
        .unwrap();

        assert_eq!(input.strokes[0].len(), 2);
        assert_eq!(input.strokes[0].points[1].t, 0.0);
        assert!(input.lassos.is_empty());
        assert_eq!(input.max_characters, usize::MAX);
    }

    #[test]
    fn unplaced_strokes_serialize_as_minus_one() {
        let mut strokes = character(100.0, 50.0);
        strokes.push(Stroke::default());
        let input = SegmentInput::new(strokes, 400.0, 400.0);
        let out = Segmenter::default().segment(&input).unwrap();

        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["strokes"][0]["characterIndex"], json!(0));
        assert_eq!(value["strokes"][3]["characterIndex"], json!(-1));
        assert_eq!(value["strokes"][3]["points"], json!([]));
        assert_eq!(value["characters"][0]["strokeIndices"], json!([0, 1, 2]));
        assert!(value["dividerSvg"].is_string());
    }
}
