//! Contour sequencing: from ordered faces to a closed ring of crossing edges

use super::plane::SlicePlane;
use crate::errors::SectionError;
use crate::mesh::SurfaceMesh;
use hashbrown::HashSet;

/// Reduce the face walk to the closed ring of crossing edges bounding the
/// contour.
///
/// Each cut face contributes the 2 of its 3 edges that belong to the crossing
/// set, and adjacent faces in the walk share one of them. First-occurrence
/// deduplication over the concatenated pairs therefore leaves every crossing
/// edge exactly once, in walk order; the leading edge is appended again to
/// close the ring. A visited face with other than 2 crossing edges means the
/// contour is not a simple cycle.
pub(crate) fn edge_ring(
    mesh: &SurfaceMesh,
    faces: &[usize],
    crossing: &[usize],
    plane: &SlicePlane,
) -> Result<Vec<usize>, SectionError> {
    let in_crossing: HashSet<usize> = crossing.iter().copied().collect();

    let mut flat = Vec::with_capacity(faces.len() * 2);
    for &face in faces {
        let before = flat.len();
        flat.extend(
            mesh.face_edges()[face]
                .iter()
                .copied()
                .filter(|edge| in_crossing.contains(edge)),
        );
        if flat.len() - before != 2 {
            return Err(SectionError::MalformedTopology {
                height: plane.height,
            });
        }
    }

    let mut seen = HashSet::with_capacity(flat.len());
    let mut ring = Vec::with_capacity(faces.len() + 1);
    for edge in flat {
        if seen.insert(edge) {
            ring.push(edge);
        }
    }
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    Ok(ring)
}
