//! Procedural rhombus (bipyramid) mesh with flat per-face normals.
//!
//! The shape is defined by six anchor points lying on the coordinate axes.
//! Triangles are emitted unindexed: 8 faces, 24 vertices, 72 scalars, and the
//! same number of normal scalars.

use glam::Vec3;

/// Number of triangles in the mesh.
pub const TRIANGLE_COUNT: usize = 8;
/// Number of emitted vertices (no sharing between faces).
pub const VERTEX_COUNT: usize = TRIANGLE_COUNT * 3;
/// Scalars per position or normal attribute.
pub const COMPONENTS: usize = 3;

/// The three scalars the anchor points are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RhombusShape {
    /// Distance of `top`/`bottom` from the origin.
    pub height: f32,
    /// Distance of `left`/`right` from the origin.
    pub width: f32,
    /// Distance of `front`/`back` from the origin along the view axis.
    pub depth: f32,
}

impl RhombusShape {
    pub const DEFAULT: Self = Self {
        height: 1.2,
        width: 0.4,
        depth: 0.2,
    };

    pub fn new(height: f32, width: f32, depth: f32) -> Self {
        Self {
            height,
            width,
            depth,
        }
    }

    pub fn anchors(&self) -> Anchors {
        Anchors {
            top: Vec3::new(0.0, self.height, 0.0),
            bottom: Vec3::new(0.0, -self.height, 0.0),
            front: Vec3::new(0.0, 0.0, self.depth),
            back: Vec3::new(0.0, 0.0, -self.depth),
            left: Vec3::new(-self.width, 0.0, 0.0),
            right: Vec3::new(self.width, 0.0, 0.0),
        }
    }

    pub fn build(&self) -> RhombusMesh {
        build_rhombus(self.height, self.width, self.depth)
    }
}

impl Default for RhombusShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Corner points of the rhombus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub top: Vec3,
    pub bottom: Vec3,
    pub front: Vec3,
    pub back: Vec3,
    pub left: Vec3,
    pub right: Vec3,
}

impl Anchors {
    /// Faces in emission order. Winding is counter-clockwise seen from
    /// outside, which back-face culling relies on.
    pub fn triangles(&self) -> [[Vec3; 3]; TRIANGLE_COUNT] {
        let Anchors {
            top,
            bottom,
            front,
            back,
            left,
            right,
        } = *self;
        [
            // front
            [top, front, right],
            [bottom, right, front],
            [top, left, front],
            [bottom, front, left],
            // back
            [top, right, back],
            [bottom, back, right],
            [top, back, left],
            [bottom, left, back],
        ]
    }
}

/// Flat position and normal streams ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct RhombusMesh {
    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
}

impl RhombusMesh {
    /// Vertex count for `drawArrays`.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / COMPONENTS
    }

    /// Normal of triangle `index`, as stored for its first vertex. `None` past
    /// the last triangle.
    pub fn face_normal(&self, index: usize) -> Option<Vec3> {
        let start = index.checked_mul(9)?;
        let end = start.checked_add(3)?;
        self.normals.get(start..end).map(Vec3::from_slice)
    }
}

/// Builds the rhombus mesh.
///
/// A zero `height`, `width` or `depth` collapses faces and yields NaN normals.
pub fn build_rhombus(height: f32, width: f32, depth: f32) -> RhombusMesh {
    let anchors = RhombusShape::new(height, width, depth).anchors();

    let mut vertices = Vec::with_capacity(VERTEX_COUNT * COMPONENTS);
    for corner in anchors.triangles().iter().flatten() {
        vertices.extend_from_slice(&corner.to_array());
    }

    let mut normals = Vec::with_capacity(vertices.len());
    for tri in vertices.chunks_exact(9) {
        let normal = face_normal(
            Vec3::from_slice(&tri[0..3]),
            Vec3::from_slice(&tri[3..6]),
            Vec3::from_slice(&tri[6..9]),
        )
        .to_array();
        for _ in 0..3 {
            normals.extend_from_slice(&normal);
        }
    }

    RhombusMesh { vertices, normals }
}

/// `(v1 - v0) x (v2 - v0)`, divided by its length.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    let n = (v1 - v0).cross(v2 - v0);
    n / n.length()
}
