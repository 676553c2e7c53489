//! Edge–plane classification

use super::plane::SlicePlane;
use crate::mesh::SurfaceMesh;

/// Indices of the edges whose endpoints fall on opposite sides of `plane`.
///
/// "Below" is a strict comparison, so a vertex lying exactly on the plane
/// counts as being on the upper side; the rule is one-sided but
/// deterministic. No crossing edges is a valid outcome, not a fault.
pub(crate) fn crossing_edges(mesh: &SurfaceMesh, plane: &SlicePlane) -> Vec<usize> {
    let axis = plane.axis.index();
    let vertices = mesh.vertices();
    mesh.edges()
        .iter()
        .enumerate()
        .filter_map(|(e, &[a, b])| {
            let below_a = vertices[a][axis] < plane.height;
            let below_b = vertices[b][axis] < plane.height;
            (below_a != below_b).then_some(e)
        })
        .collect()
}
