//! Test support library
//! Provides procedural meshes & helper functions shared between tests.

use nalgebra::Point3;
use scansect::SurfaceMesh;
use scansect::float_types::{PI, Real, TAU};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A closed UV sphere with its poles on the Z axis.
///
/// An odd stack count keeps every vertex ring away from z = 0, so the equator
/// plane straddles the two middle rings instead of passing through vertices.
pub fn uv_sphere(radius: Real, segments: usize, stacks: usize) -> SurfaceMesh {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    vertices.push(Point3::new(0.0, 0.0, radius));
    for j in 1..stacks {
        let phi = j as Real / stacks as Real * PI;
        let z = radius * phi.cos();
        let ring = radius * phi.sin();
        for i in 0..segments {
            let theta = i as Real / segments as Real * TAU;
            vertices.push(Point3::new(ring * theta.cos(), ring * theta.sin(), z));
        }
    }
    vertices.push(Point3::new(0.0, 0.0, -radius));

    let south = vertices.len() - 1;
    let ring_start = |j: usize| 1 + (j - 1) * segments;

    for i in 0..segments {
        let next = (i + 1) % segments;
        faces.push([0, ring_start(1) + i, ring_start(1) + next]);
    }
    for j in 1..stacks - 1 {
        for i in 0..segments {
            let next = (i + 1) % segments;
            let a = ring_start(j) + i;
            let b = ring_start(j) + next;
            let c = ring_start(j + 1) + i;
            let d = ring_start(j + 1) + next;
            faces.push([a, b, c]);
            faces.push([b, d, c]);
        }
    }
    for i in 0..segments {
        let next = (i + 1) % segments;
        faces.push([ring_start(stacks - 1) + i, south, ring_start(stacks - 1) + next]);
    }

    SurfaceMesh::from_triangles(vertices, &faces).unwrap()
}

/// A closed tetrahedron over the unit corner: base triangle on z = 0, apex at
/// (0, 0, 1).
pub fn tetrahedron() -> SurfaceMesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let faces = [[0, 1, 2], [0, 1, 3], [1, 2, 3], [0, 2, 3]];
    SurfaceMesh::from_triangles(vertices, &faces).unwrap()
}

/// An open shell shaped like a socket scan: a square brim at z = 1 tapering
/// to an apex at the origin, with no face across the brim.
pub fn socket_shell() -> SurfaceMesh {
    let vertices = vec![
        Point3::new(-1.0, -1.0, 1.0),
        Point3::new(1.0, -1.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-1.0, 1.0, 1.0),
        Point3::new(0.0, 0.0, 0.0),
    ];
    let faces = [[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]];
    SurfaceMesh::from_triangles(vertices, &faces).unwrap()
}
