//! Edge payloads and bulk edge input

use crate::{DEFAULT_WEIGHT, Error, Place, Weight};

/// Payload stored on every undirected edge
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaceEdge {
    /// Explicit weight, `None` for an unweighted edge
    pub weight: Option<Weight>,
}

impl PlaceEdge {
    pub fn unweighted() -> Self {
        Self { weight: None }
    }

    pub fn weighted(weight: Weight) -> Self {
        Self {
            weight: Some(weight),
        }
    }

    /// Cost of traversing the edge during search and aggregation
    pub fn cost(&self) -> Weight {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }
}

/// One entry of a bulk edge insertion
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeSpec {
    Unweighted(Place, Place),
    Weighted(Place, Place, Weight),
}

impl EdgeSpec {
    pub fn unweighted(a: impl Into<Place>, b: impl Into<Place>) -> Self {
        Self::Unweighted(a.into(), b.into())
    }

    pub fn weighted(a: impl Into<Place>, b: impl Into<Place>, weight: Weight) -> Self {
        Self::Weighted(a.into(), b.into(), weight)
    }

    pub fn endpoints(&self) -> (&Place, &Place) {
        match self {
            Self::Unweighted(a, b) | Self::Weighted(a, b, _) => (a, b),
        }
    }

    pub fn edge(&self) -> PlaceEdge {
        match self {
            Self::Unweighted(..) => PlaceEdge::unweighted(),
            Self::Weighted(.., weight) => PlaceEdge::weighted(*weight),
        }
    }
}

/// Converts untyped `(a, b, weight?)` rows into edge specs.
///
/// The first row decides whether the list is weighted; every other row has to
/// follow the same shape.
///
/// # Errors
///
/// Returns [`Error::MalformedEdgeList`] if weighted and unweighted rows are mixed.
pub fn edge_list_from_rows<I>(rows: I) -> Result<Vec<EdgeSpec>, Error>
where
    I: IntoIterator<Item = (Place, Place, Option<Weight>)>,
{
    let mut rows = rows.into_iter().enumerate().peekable();
    let Some((_, (_, _, first_weight))) = rows.peek() else {
        return Ok(Vec::new());
    };
    let weighted = first_weight.is_some();

    rows.map(|(idx, (a, b, weight))| match (weighted, weight) {
        (true, Some(weight)) => Ok(EdgeSpec::Weighted(a, b, weight)),
        (false, None) => Ok(EdgeSpec::Unweighted(a, b)),
        (true, None) => Err(Error::MalformedEdgeList(format!(
            "row {idx} ('{a}', '{b}') has no weight in a weighted edge list"
        ))),
        (false, Some(_)) => Err(Error::MalformedEdgeList(format!(
            "row {idx} ('{a}', '{b}') has a weight in an unweighted edge list"
        ))),
    })
    .collect()
}
