//! Cross-section extraction: the per-plane pipeline and the batch drivers

use crate::errors::SectionError;
use crate::float_types::Real;
use crate::mesh::SurfaceMesh;
use geo::{Area, LineString, Polygon as GeoPolygon};
use log::{debug, warn};
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod classify;
mod intersect;
mod plane;
mod ring;
mod walk;

pub use plane::{Axis, SlicePlane};

/// One planar cross-section of a [`SurfaceMesh`].
///
/// The point ring is ordered along the contour and closed, with the first
/// point repeated at the end; it is empty when the plane misses the mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    plane: SlicePlane,
    points: Vec<Point3<Real>>,
}

impl CrossSection {
    const fn empty(plane: SlicePlane) -> Self {
        CrossSection {
            plane,
            points: Vec::new(),
        }
    }

    /// The plane this section was cut on.
    pub const fn plane(&self) -> SlicePlane {
        self.plane
    }

    /// The closed point ring, empty when nothing crosses the plane.
    pub fn points(&self) -> &[Point3<Real>] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of distinct contour points, the closing repeat not counted.
    /// Equals the number of mesh edges the plane crosses.
    pub fn vertex_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// The contour projected onto the two in-plane axes.
    pub fn to_polygon_2d(&self) -> GeoPolygon<Real> {
        let [u, v] = self.plane.axis.planar();
        let ring: Vec<(Real, Real)> = self.points.iter().map(|p| (p[u], p[v])).collect();
        GeoPolygon::new(LineString::from(ring), vec![])
    }

    /// Cross-sectional area by the shoelace formula over the two in-plane
    /// axes. Zero for sections with fewer than three distinct points.
    pub fn area(&self) -> Real {
        if self.vertex_count() < 3 {
            return 0.0;
        }
        self.to_polygon_2d().unsigned_area()
    }
}

impl SurfaceMesh {
    /// Cut the mesh with one plane.
    ///
    /// Classifies the crossing edges, orders the cut faces into a single
    /// closed walk, reduces the walk to the ring of crossing edges and
    /// intersects each edge with the plane. A plane that crosses nothing
    /// yields an empty section. A crossing set that does not form a single
    /// closed loop (an open or non-manifold region, including a cut boundary
    /// edge) fails with [`SectionError::MalformedTopology`]; no partial
    /// contour is ever returned.
    pub fn cross_section(&self, plane: SlicePlane) -> Result<CrossSection, SectionError> {
        let crossing = classify::crossing_edges(self, &plane);
        debug!(
            "section {:?}={}: {} crossing edges",
            plane.axis,
            plane.height,
            crossing.len()
        );
        if crossing.is_empty() {
            return Ok(CrossSection::empty(plane));
        }

        // One arc per crossing edge: the two faces it belongs to. A crossing
        // edge on the open boundary has no second face and cannot close a
        // contour.
        let arcs = crossing
            .iter()
            .map(|&edge| match self.edge_faces()[edge] {
                [Some(a), Some(b)] => Ok([a, b]),
                _ => Err(SectionError::MalformedTopology {
                    height: plane.height,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let faces = walk::face_walk(&arcs, &plane)?;
        let ring = ring::edge_ring(self, &faces, &crossing, &plane)?;
        let points = intersect::ring_points(self, &ring, &plane)?;
        Ok(CrossSection { plane, points })
    }

    /// Cut the mesh at every height in `heights` along `axis`.
    ///
    /// Strict batch: the first failing plane aborts the whole batch. Use
    /// [`cross_sections_lenient`](Self::cross_sections_lenient) to keep the
    /// healthy planes instead. Results are in caller order; with the
    /// `parallel` feature the planes are computed concurrently.
    pub fn cross_sections(
        &self,
        heights: &[Real],
        axis: Axis,
    ) -> Result<Vec<CrossSection>, SectionError> {
        #[cfg(feature = "parallel")]
        return heights
            .par_iter()
            .map(|&height| self.cross_section(SlicePlane::new(axis, height)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        heights
            .iter()
            .map(|&height| self.cross_section(SlicePlane::new(axis, height)))
            .collect()
    }

    /// Cut the mesh at every height in `heights` along `axis`, recording
    /// failed planes instead of aborting.
    ///
    /// Lenient batch: one result per requested height, in caller order. A
    /// malformed plane is reported in place and never affects its
    /// neighbours.
    pub fn cross_sections_lenient(
        &self,
        heights: &[Real],
        axis: Axis,
    ) -> Vec<Result<CrossSection, SectionError>> {
        let cut = |height: Real| {
            self.cross_section(SlicePlane::new(axis, height))
                .inspect_err(|fault| warn!("section at height {height} skipped: {fault}"))
        };

        #[cfg(feature = "parallel")]
        return heights.par_iter().map(|&height| cut(height)).collect();

        #[cfg(not(feature = "parallel"))]
        heights.iter().map(|&height| cut(height)).collect()
    }

    /// Shoelace areas of the sections at `heights`, parallel to the polygon
    /// list returned by [`cross_sections`](Self::cross_sections). An empty
    /// section contributes zero area.
    pub fn cross_section_areas(
        &self,
        heights: &[Real],
        axis: Axis,
    ) -> Result<Vec<Real>, SectionError> {
        Ok(self
            .cross_sections(heights, axis)?
            .iter()
            .map(CrossSection::area)
            .collect())
    }
}
