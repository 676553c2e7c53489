//! Edge connectivity derivation from a triangle soup

use super::SurfaceMesh;
use crate::errors::MeshError;
use crate::float_types::Real;
use hashbrown::HashMap;
use nalgebra::Point3;

/// Derive the edge list and both adjacency tables from triangles.
///
/// Edges are undirected, keyed by their sorted vertex pair and numbered in
/// first-seen order; each face records its bounding edges in
/// `(v0,v1) (v1,v2) (v2,v0)` order. Both orderings are deterministic, and the
/// sectioning output depends on them, so they are part of the contract.
///
/// An edge picked up by a third face is rejected as non-manifold. Edges seen
/// by a single face keep `None` in their second adjacency slot, marking the
/// open boundary of the shell.
pub(crate) fn from_triangles(
    vertices: Vec<Point3<Real>>,
    faces: &[[usize; 3]],
) -> Result<SurfaceMesh, MeshError> {
    let mut edge_ids: HashMap<(usize, usize), usize> = HashMap::with_capacity(faces.len() * 3 / 2);
    let mut edges: Vec<[usize; 2]> = Vec::with_capacity(faces.len() * 3 / 2);
    let mut edge_faces: Vec<[Option<usize>; 2]> = Vec::with_capacity(faces.len() * 3 / 2);
    let mut face_edges: Vec<[usize; 3]> = Vec::with_capacity(faces.len());

    for (f, &[v0, v1, v2]) in faces.iter().enumerate() {
        for vertex in [v0, v1, v2] {
            if vertex >= vertices.len() {
                return Err(MeshError::FaceVertexOutOfRange {
                    face: f,
                    vertex,
                    vertex_count: vertices.len(),
                });
            }
        }
        let mut bounding = [0usize; 3];
        for (k, (a, b)) in [(v0, v1), (v1, v2), (v2, v0)].into_iter().enumerate() {
            let key = if a < b { (a, b) } else { (b, a) };
            let id = *edge_ids.entry(key).or_insert_with(|| {
                edges.push([key.0, key.1]);
                edge_faces.push([None, None]);
                edges.len() - 1
            });
            bounding[k] = id;

            let slots = &mut edge_faces[id];
            if slots[0].is_none() {
                slots[0] = Some(f);
            } else if slots[1].is_none() {
                slots[1] = Some(f);
            } else {
                return Err(MeshError::NonManifoldEdge { a: key.0, b: key.1 });
            }
        }
        face_edges.push(bounding);
    }

    SurfaceMesh::from_parts(vertices, edges, face_edges, edge_faces)
}
