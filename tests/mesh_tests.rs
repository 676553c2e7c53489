mod support;

use nalgebra::Point3;
use scansect::{Axis, MeshError, SurfaceMesh, float_types::Real};

use crate::support::{socket_shell, tetrahedron};

#[test]
fn from_triangles_links_shared_edges() {
    // Two triangles across a quad share the diagonal.
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let mesh = SurfaceMesh::from_triangles(vertices, &[[0, 1, 2], [0, 2, 3]]).unwrap();

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 5);
    assert_eq!(mesh.face_count(), 2);
    assert_eq!(mesh.edges()[2], [0, 2]);
    assert_eq!(mesh.edge_faces()[2], [Some(0), Some(1)]);
}

#[test]
fn closed_meshes_have_no_boundary() {
    assert!(tetrahedron().boundary_edges().is_empty());
}

#[test]
fn brim_edges_are_the_open_boundary() {
    // The socket shell's four brim edges each bound a single face.
    let shell = socket_shell();
    let boundary = shell.boundary_edges();
    assert_eq!(boundary, vec![0, 3, 5, 7]);
    for &edge in &boundary {
        let [a, b] = shell.edges()[edge];
        assert_eq!(shell.vertices()[a].z, 1.0);
        assert_eq!(shell.vertices()[b].z, 1.0);
    }
}

#[test]
fn extent_spans_the_vertex_range() {
    let tetra = tetrahedron();
    assert_eq!(tetra.extent(Axis::Z), Some((0.0, 1.0)));
    assert_eq!(tetra.extent(Axis::X), Some((0.0, 1.0)));

    let empty = SurfaceMesh::from_parts(Vec::new(), Vec::new(), Vec::new(), Vec::new()).unwrap();
    assert_eq!(empty.extent(Axis::Z), None);
}

#[test]
fn section_heights_stop_below_the_brim() {
    let shell = socket_shell();
    assert_eq!(shell.section_heights(Axis::Z, 0.25), vec![0.25, 0.5, 0.75]);
}

#[test]
fn section_heights_stop_below_the_extent_without_a_brim() {
    let tetra = tetrahedron();
    assert_eq!(tetra.section_heights(Axis::Z, 0.4), vec![0.4, 0.8]);
    assert!(tetra.section_heights(Axis::Z, 0.0).is_empty());
    assert!(tetra.section_heights(Axis::Z, -1.0).is_empty());
}

#[test]
fn from_parts_validates_every_index() {
    let vertices = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];

    let bad_edge = SurfaceMesh::from_parts(
        vertices.clone(),
        vec![[0, 5]],
        Vec::new(),
        vec![[None, None]],
    );
    assert_eq!(
        bad_edge.unwrap_err(),
        MeshError::EdgeVertexOutOfRange {
            edge: 0,
            vertex: 5,
            vertex_count: 2,
        }
    );

    let bad_face = SurfaceMesh::from_parts(
        vertices.clone(),
        vec![[0, 1]],
        vec![[0, 0, 9]],
        vec![[None, None]],
    );
    assert_eq!(
        bad_face.unwrap_err(),
        MeshError::FaceEdgeOutOfRange {
            face: 0,
            edge: 9,
            edge_count: 1,
        }
    );

    let bad_adjacency = SurfaceMesh::from_parts(
        vertices.clone(),
        vec![[0, 1]],
        Vec::new(),
        vec![[Some(3), None]],
    );
    assert_eq!(
        bad_adjacency.unwrap_err(),
        MeshError::EdgeFaceOutOfRange {
            edge: 0,
            face: 3,
            face_count: 0,
        }
    );

    let mismatch = SurfaceMesh::from_parts(vertices, vec![[0, 1]], Vec::new(), Vec::new());
    assert_eq!(
        mismatch.unwrap_err(),
        MeshError::AdjacencyMismatch {
            edges: 1,
            edge_faces: 0,
        }
    );
}

#[test]
fn non_finite_vertices_are_rejected() {
    let vertices = vec![Point3::new(0.0, Real::NAN, 0.0)];
    let result = SurfaceMesh::from_parts(vertices, Vec::new(), Vec::new(), Vec::new());
    assert_eq!(result.unwrap_err(), MeshError::NonFiniteVertex { vertex: 0 });
}

#[test]
fn third_face_on_an_edge_is_rejected() {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
    ];
    let result =
        SurfaceMesh::from_triangles(vertices, &[[0, 1, 2], [0, 1, 3], [0, 1, 4]]);
    assert_eq!(result.unwrap_err(), MeshError::NonManifoldEdge { a: 0, b: 1 });
}
