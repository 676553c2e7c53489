//! Mesh validation and sectioning errors

use crate::float_types::Real;
use std::fmt::Display;

/// Everything that can go wrong while building a [`SurfaceMesh`](crate::SurfaceMesh)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// (NonFiniteVertex) A vertex coordinate is NaN or infinite
    NonFiniteVertex { vertex: usize },
    /// (EdgeVertexOutOfRange) An edge references a vertex the mesh does not have
    EdgeVertexOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// (FaceVertexOutOfRange) A face references a vertex the mesh does not have
    FaceVertexOutOfRange {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// (FaceEdgeOutOfRange) A face references an edge the mesh does not have
    FaceEdgeOutOfRange {
        face: usize,
        edge: usize,
        edge_count: usize,
    },
    /// (EdgeFaceOutOfRange) An edge adjacency entry references a face the mesh does not have
    EdgeFaceOutOfRange {
        edge: usize,
        face: usize,
        face_count: usize,
    },
    /// (AdjacencyMismatch) The edge and edge-to-face arrays disagree in length
    AdjacencyMismatch { edges: usize, edge_faces: usize },
    /// (NonManifoldEdge) More than two faces share one edge
    NonManifoldEdge { a: usize, b: usize },
}

impl Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::NonFiniteVertex { vertex } => {
                write!(f, "(NonFiniteVertex) vertex {vertex} has a NaN or infinite coordinate")
            },
            MeshError::EdgeVertexOutOfRange { edge, vertex, vertex_count } => write!(
                f,
                "(EdgeVertexOutOfRange) edge {edge} references vertex {vertex} but the mesh has {vertex_count} vertices"
            ),
            MeshError::FaceVertexOutOfRange { face, vertex, vertex_count } => write!(
                f,
                "(FaceVertexOutOfRange) face {face} references vertex {vertex} but the mesh has {vertex_count} vertices"
            ),
            MeshError::FaceEdgeOutOfRange { face, edge, edge_count } => write!(
                f,
                "(FaceEdgeOutOfRange) face {face} references edge {edge} but the mesh has {edge_count} edges"
            ),
            MeshError::EdgeFaceOutOfRange { edge, face, face_count } => write!(
                f,
                "(EdgeFaceOutOfRange) edge {edge} is adjacent to face {face} but the mesh has {face_count} faces"
            ),
            MeshError::AdjacencyMismatch { edges, edge_faces } => write!(
                f,
                "(AdjacencyMismatch) {edges} edges but {edge_faces} edge-to-face adjacency entries"
            ),
            MeshError::NonManifoldEdge { a, b } => write!(
                f,
                "(NonManifoldEdge) edge between vertices {a} and {b} is shared by more than two faces"
            ),
        }
    }
}

/// Per-plane failures while cutting a cross-section
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SectionError {
    /// (InvalidPlaneAxis) The axis index is not 0, 1 or 2
    InvalidPlaneAxis(usize),
    /// (MalformedTopology) The edges crossing a plane do not form a single closed loop
    MalformedTopology { height: Real },
    /// (DegenerateEdge) A crossing edge has no extent along the slicing axis
    DegenerateEdge { edge: usize, height: Real },
}

impl Display for SectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionError::InvalidPlaneAxis(index) => {
                write!(f, "(InvalidPlaneAxis) axis index {index} is out of range, expected 0, 1 or 2")
            },
            SectionError::MalformedTopology { height } => write!(
                f,
                "(MalformedTopology) the edges crossing the plane at height {height} do not form a single closed loop"
            ),
            SectionError::DegenerateEdge { edge, height } => write!(
                f,
                "(DegenerateEdge) edge {edge} crosses the plane at height {height} but has no extent along the slicing axis"
            ),
        }
    }
}
