//! GPU resources for the monolith and the per-frame draw sequence.

use crate::camera::{aspect_ratio, model_view, Perspective};
use crate::error::SetupError;
use crate::frame::{Frame, FrameState};
use crate::geometry::{RhombusShape, COMPONENTS};
use crate::gfx::{Capability, GraphicsContext, Primitive};
use crate::shaders;

pub const SPACE_PROGRAM: &str = "space";
pub const RHOMBUS_PROGRAM: &str = "rhombus";

/// Programs and static buffers, created once and kept for the page's life.
pub struct MonolithScene<G: GraphicsContext> {
    space: G::Program,
    rhombus: G::Program,
    quad: G::Buffer,
    positions: G::Buffer,
    normals: G::Buffer,
    vertex_count: i32,
    perspective: Perspective,
}

impl<G: GraphicsContext> MonolithScene<G> {
    pub fn new(gl: &G, shape: RhombusShape) -> Result<Self, SetupError> {
        let space = gl.create_program(
            SPACE_PROGRAM,
            shaders::SPACE_VERTEX,
            shaders::SPACE_FRAGMENT,
        )?;
        let rhombus = gl.create_program(
            RHOMBUS_PROGRAM,
            shaders::RHOMBUS_VERTEX,
            shaders::RHOMBUS_FRAGMENT,
        )?;

        let quad = gl.create_buffer(&shaders::QUAD_VERTICES)?;
        let mesh = shape.build();
        let positions = gl.create_buffer(&mesh.vertices)?;
        let normals = gl.create_buffer(&mesh.normals)?;

        log::debug!(
            "monolith scene ready: {} rhombus vertices ({:?})",
            mesh.vertex_count(),
            shape
        );

        Ok(Self {
            space,
            rhombus,
            quad,
            positions,
            normals,
            vertex_count: mesh.vertex_count() as i32,
            perspective: Perspective::DEFAULT,
        })
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    /// Background first with depth testing off, then the rhombus with depth
    /// testing and back-face culling on.
    pub fn draw(&self, gl: &G, state: &FrameState) {
        let time = state.time_f32();

        gl.clear();

        gl.use_program(&self.space);
        gl.bind_attribute(&self.space, "position", &self.quad, 2);
        gl.set_uniform_f32(&self.space, "time", time);
        gl.set_capability(Capability::DepthTest, false);
        gl.draw_arrays(Primitive::TriangleStrip, 4);

        let (width, height) = gl.surface_size();
        let projection = self.perspective.matrix(aspect_ratio(width, height));
        let model_view = model_view(state.rotation_f32());

        gl.use_program(&self.rhombus);
        gl.bind_attribute(&self.rhombus, "position", &self.positions, COMPONENTS as i32);
        gl.bind_attribute(&self.rhombus, "normal", &self.normals, COMPONENTS as i32);
        gl.set_uniform_mat4(&self.rhombus, "modelViewMatrix", &model_view);
        gl.set_uniform_mat4(&self.rhombus, "projectionMatrix", &projection);
        gl.set_uniform_f32(&self.rhombus, "time", time);
        gl.set_capability(Capability::DepthTest, true);
        gl.set_capability(Capability::CullFace, true);
        gl.draw_arrays(Primitive::Triangles, self.vertex_count);
    }
}

/// A scene bound to the context it draws into.
pub struct SceneFrame<G: GraphicsContext> {
    pub gl: G,
    pub scene: MonolithScene<G>,
}

impl<G: GraphicsContext> SceneFrame<G> {
    pub fn new(gl: G, shape: RhombusShape) -> Result<Self, SetupError> {
        let scene = MonolithScene::new(&gl, shape)?;
        Ok(Self { gl, scene })
    }
}

impl<G: GraphicsContext> Frame for SceneFrame<G> {
    fn frame(&mut self, state: &FrameState) {
        self.scene.draw(&self.gl, state);
    }
}
