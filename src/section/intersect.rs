//! Plane–edge intersection points

use super::plane::SlicePlane;
use crate::errors::SectionError;
use crate::float_types::Real;
use crate::mesh::SurfaceMesh;
use nalgebra::Point3;

/// Intersection point of each edge in `ring` with the cutting plane.
///
/// The two in-plane coordinates are interpolated linearly along the edge; the
/// slicing-axis coordinate is set to the plane height directly, so plane
/// membership holds without rounding. An edge whose endpoints share their
/// axis coordinate cannot have been classified as crossing, so hitting one
/// here signals an inconsistent input and fails as
/// [`SectionError::DegenerateEdge`] instead of dividing by zero.
pub(crate) fn ring_points(
    mesh: &SurfaceMesh,
    ring: &[usize],
    plane: &SlicePlane,
) -> Result<Vec<Point3<Real>>, SectionError> {
    let axis = plane.axis.index();
    let [u, v] = plane.axis.planar();
    let vertices = mesh.vertices();

    ring.iter()
        .map(|&edge| {
            let [a, b] = mesh.edges()[edge];
            let (p, q) = (&vertices[a], &vertices[b]);
            let run = q[axis] - p[axis];
            if run == 0.0 {
                return Err(SectionError::DegenerateEdge {
                    edge,
                    height: plane.height,
                });
            }
            let t = (plane.height - p[axis]) / run;
            let mut point = Point3::origin();
            point[axis] = plane.height;
            point[u] = p[u] + t * (q[u] - p[u]);
            point[v] = p[v] + t * (q[v] - p[v]);
            Ok(point)
        })
        .collect()
}
