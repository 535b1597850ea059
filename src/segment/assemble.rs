//! Reading-order assembly of the final result.

use crate::types::{Bounds, DividerLine, LassoPolygon, Stroke, Vertex};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use super::grid::GridCell;
use super::hull::ProtectedBound;

/// One segmented character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CharacterSlot<'a> {
    /// Position in reading order; `characters[i].index == i`.
    pub index: usize,
    pub stroke_indices: Vec<usize>,
    /// The caller's strokes, borrowed as-is.
    pub strokes: Vec<&'a Stroke>,
    /// Union box of every point in `strokes`.
    pub bounds: Bounds,
}

/// An input stroke and the character it ended up in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnnotatedStroke<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "points"))]
    pub stroke: &'a Stroke,
    /// `None` for strokes outside every cell; serialized as `-1`.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_character_index"))]
    pub character_index: Option<usize>,
}

impl AnnotatedStroke<'_> {
    pub fn is_placed(&self) -> bool {
        self.character_index.is_some()
    }
}

#[cfg(feature = "serde")]
fn serialize_character_index<S: Serializer>(index: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    match index {
        Some(i) => s.serialize_u64(*i as u64),
        None => s.serialize_i64(-1),
    }
}

/// A lasso that owns at least one stroke after overlap resolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnnotatedLasso<'a> {
    /// Position of the lasso in the input.
    pub lasso_index: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub polygon: &'a LassoPolygon,
    pub stroke_indices: Vec<usize>,
    /// Convex hull of the owned ink, counter-clockwise.
    pub hull: Vec<Vertex>,
}

/// Final dividers. Rows are grouped by reading-order column.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DividerSet {
    pub columns: Vec<DividerLine>,
    pub rows: Vec<Vec<DividerLine>>,
}

impl DividerSet {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.iter().all(Vec::is_empty)
    }

    /// Column dividers first, then each column's row dividers.
    pub fn iter(&self) -> impl Iterator<Item = &DividerLine> {
        self.columns.iter().chain(self.rows.iter().flatten())
    }
}

/// Everything one segmentation call produces.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Segmentation<'a> {
    pub characters: Vec<CharacterSlot<'a>>,
    /// Same order and length as the input strokes.
    pub strokes: Vec<AnnotatedStroke<'a>>,
    pub lassos: Vec<AnnotatedLasso<'a>>,
    pub dividers: DividerSet,
    /// SVG overlay of the dividers; empty when there was no ink to segment.
    pub divider_svg: String,
    /// SVG overlay of the lasso hulls; empty when no lasso owns a stroke.
    pub lasso_svg: String,
}

fn slot<'a>(index: usize, strokes: &'a [Stroke], members: Vec<usize>) -> CharacterSlot<'a> {
    let bounds = Bounds::of_points(
        members
            .iter()
            .flat_map(|&i| strokes[i].points.iter().map(|p| p.pos())),
    );
    CharacterSlot {
        index,
        strokes: members.iter().map(|&i| &strokes[i]).collect(),
        stroke_indices: members,
        bounds,
    }
}

/// Number the non-empty cells in reading order (column, then row) and map
/// every stroke to its slot.
pub fn assemble<'a>(
    strokes: &'a [Stroke],
    mut cells: Vec<GridCell>,
) -> (Vec<CharacterSlot<'a>>, Vec<AnnotatedStroke<'a>>) {
    cells.sort_by_key(|c| (c.column, c.row));

    let mut slot_of: Vec<Option<usize>> = vec![None; strokes.len()];
    let characters: Vec<CharacterSlot<'a>> = cells
        .into_iter()
        .enumerate()
        .map(|(index, cell)| {
            for &s in &cell.stroke_indices {
                slot_of[s] = Some(index);
            }
            slot(index, strokes, cell.stroke_indices)
        })
        .collect();

    (characters, annotate_strokes(strokes, &slot_of))
}

/// Everything in one slot, used when the caller expects a single character.
pub fn single_character(strokes: &[Stroke]) -> (Vec<CharacterSlot<'_>>, Vec<AnnotatedStroke<'_>>) {
    let members: Vec<usize> = (0..strokes.len()).collect();
    let slot_of = vec![Some(0); strokes.len()];
    (vec![slot(0, strokes, members)], annotate_strokes(strokes, &slot_of))
}

pub fn annotate_strokes<'a>(strokes: &'a [Stroke], slot_of: &[Option<usize>]) -> Vec<AnnotatedStroke<'a>> {
    strokes
        .iter()
        .zip(slot_of)
        .map(|(stroke, &character_index)| AnnotatedStroke { stroke, character_index })
        .collect()
}

/// Lasso output straight from the resolved ownership, stolen strokes included.
pub fn annotate_lassos<'a>(
    lassos: &'a [LassoPolygon],
    protected: &[ProtectedBound],
) -> Vec<AnnotatedLasso<'a>> {
    protected
        .iter()
        .filter(|p| !p.strokes.is_empty())
        .map(|p| AnnotatedLasso {
            lasso_index: p.lasso_index,
            polygon: &lassos[p.lasso_index],
            stroke_indices: p.strokes.clone(),
            hull: p.hull.iter().copied().map(Vertex::from).collect::<Vec<_>>(),
        })
        .collect()
}
