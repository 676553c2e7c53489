//! Contour ordering: an Eulerian-circuit walk over the faces cut by a plane

use super::plane::SlicePlane;
use crate::errors::SectionError;
use hashbrown::HashMap;

/// Order the faces cut by a plane into a single closed walk.
///
/// Each row of `arcs` holds the two faces adjacent to one crossing edge, so
/// together the rows form a 2-regular multigraph over face indices whenever
/// the crossing set is a simple cycle. The walk consumes one row per step:
/// row 0 is spent up front and the walk starts at its first face, then each
/// step takes the earliest unspent row containing the current face and moves
/// to that row's other face. Resolving ties by original row order keeps the
/// output, and everything downstream of it, deterministic for a given mesh.
///
/// A step with no unspent continuation means the crossing set is not a single
/// closed loop (an open or locally non-manifold region) and fails with
/// [`SectionError::MalformedTopology`] rather than truncating the contour.
pub(crate) fn face_walk(
    arcs: &[[usize; 2]],
    plane: &SlicePlane,
) -> Result<Vec<usize>, SectionError> {
    if arcs.is_empty() {
        return Ok(Vec::new());
    }

    // face index -> rows touching it, in row order
    let mut incident: HashMap<usize, Vec<usize>> = HashMap::with_capacity(arcs.len());
    for (row, &[a, b]) in arcs.iter().enumerate() {
        incident.entry(a).or_default().push(row);
        incident.entry(b).or_default().push(row);
    }

    let mut spent = vec![false; arcs.len()];
    let mut order = Vec::with_capacity(arcs.len());
    let mut face = arcs[0][0];
    spent[0] = true;
    for _ in 0..arcs.len() - 1 {
        order.push(face);
        let row = incident
            .get(&face)
            .and_then(|rows| rows.iter().copied().find(|&r| !spent[r]))
            .ok_or(SectionError::MalformedTopology {
                height: plane.height,
            })?;
        spent[row] = true;
        face = if arcs[row][0] == face {
            arcs[row][1]
        } else {
            arcs[row][0]
        };
    }
    order.push(face);
    Ok(order)
}
