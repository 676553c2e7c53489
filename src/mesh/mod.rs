//! `SurfaceMesh`: the indexed vertex/edge/face representation the slicer reads

use crate::errors::MeshError;
use crate::float_types::Real;
use crate::section::Axis;
use nalgebra::Point3;

pub mod connectivity;

/// A triangulated surface with precomputed edge connectivity.
///
/// The mesh is immutable once built; every sectioning call reads it and
/// allocates its own per-plane state, so independent planes can be cut
/// concurrently without coordination.
///
/// Indices are plain `usize`, validated against the owning arrays when the
/// mesh is constructed rather than on every access.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    /// Vertex positions
    vertices: Vec<Point3<Real>>,

    /// Undirected edges as vertex-index pairs
    edges: Vec<[usize; 2]>,

    /// The three bounding edges of each triangular face
    face_edges: Vec<[usize; 3]>,

    /// The faces adjacent to each edge; `None` in the second slot marks an
    /// open-boundary ("brim") edge
    edge_faces: Vec<[Option<usize>; 2]>,
}

impl SurfaceMesh {
    /// Build a mesh from precomputed connectivity arrays.
    ///
    /// Every index is checked against the array it points into, and vertex
    /// coordinates must be finite. The adjacency tables are not checked for
    /// mutual consistency beyond their lengths; feeding inconsistent tables
    /// makes sectioning fail with a typed error rather than panic.
    pub fn from_parts(
        vertices: Vec<Point3<Real>>,
        edges: Vec<[usize; 2]>,
        face_edges: Vec<[usize; 3]>,
        edge_faces: Vec<[Option<usize>; 2]>,
    ) -> Result<Self, MeshError> {
        if edge_faces.len() != edges.len() {
            return Err(MeshError::AdjacencyMismatch {
                edges: edges.len(),
                edge_faces: edge_faces.len(),
            });
        }
        for (i, v) in vertices.iter().enumerate() {
            if !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()) {
                return Err(MeshError::NonFiniteVertex { vertex: i });
            }
        }
        for (e, &[a, b]) in edges.iter().enumerate() {
            for vertex in [a, b] {
                if vertex >= vertices.len() {
                    return Err(MeshError::EdgeVertexOutOfRange {
                        edge: e,
                        vertex,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        for (f, bounding) in face_edges.iter().enumerate() {
            for &edge in bounding {
                if edge >= edges.len() {
                    return Err(MeshError::FaceEdgeOutOfRange {
                        face: f,
                        edge,
                        edge_count: edges.len(),
                    });
                }
            }
        }
        for (e, adjacent) in edge_faces.iter().enumerate() {
            for &face in adjacent.iter().flatten() {
                if face >= face_edges.len() {
                    return Err(MeshError::EdgeFaceOutOfRange {
                        edge: e,
                        face,
                        face_count: face_edges.len(),
                    });
                }
            }
        }
        Ok(SurfaceMesh {
            vertices,
            edges,
            face_edges,
            edge_faces,
        })
    }

    /// Build a mesh from a triangle soup, deriving the edge list and both
    /// adjacency tables. See [`connectivity`].
    pub fn from_triangles(
        vertices: Vec<Point3<Real>>,
        faces: &[[usize; 3]],
    ) -> Result<Self, MeshError> {
        connectivity::from_triangles(vertices, faces)
    }

    /// Vertex positions
    pub fn vertices(&self) -> &[Point3<Real>] {
        &self.vertices
    }

    /// Undirected edges as vertex-index pairs
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// The three bounding edges of each face
    pub fn face_edges(&self) -> &[[usize; 3]] {
        &self.face_edges
    }

    /// The faces adjacent to each edge
    pub fn edge_faces(&self) -> &[[Option<usize>; 2]] {
        &self.edge_faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.face_edges.len()
    }

    /// Minimum and maximum vertex coordinate along `axis`, `None` for an
    /// empty mesh.
    pub fn extent(&self, axis: Axis) -> Option<(Real, Real)> {
        let i = axis.index();
        self.vertices
            .iter()
            .map(|v| v[i])
            .fold(None, |acc, c| match acc {
                None => Some((c, c)),
                Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
            })
    }

    /// Edges missing a neighbouring face on one side: the open rim ("brim")
    /// of a scanned shell. Empty for a closed mesh.
    pub fn boundary_edges(&self) -> Vec<usize> {
        self.edge_faces
            .iter()
            .enumerate()
            .filter_map(|(e, adjacent)| adjacent.iter().any(Option::is_none).then_some(e))
            .collect()
    }

    /// Evenly spaced section heights along `axis`, starting one `spacing`
    /// above the minimum extent.
    ///
    /// When the mesh has a brim the heights stop strictly below its lowest
    /// vertex coordinate, so every plane cuts the closed part of the shell;
    /// otherwise they stop strictly below the maximum extent. Empty when the
    /// range is empty or `spacing` is not positive.
    pub fn section_heights(&self, axis: Axis, spacing: Real) -> Vec<Real> {
        if !(spacing > 0.0) {
            return Vec::new();
        }
        let Some((lo, hi)) = self.extent(axis) else {
            return Vec::new();
        };
        let i = axis.index();
        let brim_floor = self
            .boundary_edges()
            .iter()
            .flat_map(|&e| self.edges[e])
            .map(|v| self.vertices[v][i])
            .fold(Real::INFINITY, Real::min);
        let limit = if brim_floor.is_finite() { brim_floor } else { hi };

        let mut heights = Vec::new();
        for step in 1.. {
            let height = lo + spacing * step as Real;
            if height >= limit {
                break;
            }
            heights.push(height);
        }
        heights
    }
}
