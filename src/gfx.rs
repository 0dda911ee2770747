//! The slice of a graphics API the monolith scene needs.
//!
//! The browser implementation wraps WebGL2; tests substitute a recorder.

use glam::Mat4;

use crate::error::SetupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    DepthTest,
    CullFace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    TriangleStrip,
    Triangles,
}

pub trait GraphicsContext {
    type Program;
    type Buffer;

    /// Compiles and links a vertex/fragment pair. `label` names the program
    /// in diagnostics.
    fn create_program(
        &self,
        label: &'static str,
        vertex: &str,
        fragment: &str,
    ) -> Result<Self::Program, SetupError>;

    /// Uploads static float data into a new array buffer.
    fn create_buffer(&self, data: &[f32]) -> Result<Self::Buffer, SetupError>;

    /// Backing size of the drawing surface in pixels.
    fn surface_size(&self) -> (u32, u32);

    /// Clears colour and depth.
    fn clear(&self);

    fn use_program(&self, program: &Self::Program);

    /// Points attribute `name` at `buffer`, tightly packed floats.
    fn bind_attribute(
        &self,
        program: &Self::Program,
        name: &str,
        buffer: &Self::Buffer,
        components: i32,
    );

    fn set_uniform_f32(&self, program: &Self::Program, name: &str, value: f32);

    fn set_uniform_mat4(&self, program: &Self::Program, name: &str, value: &Mat4);

    fn set_capability(&self, capability: Capability, enabled: bool);

    fn draw_arrays(&self, primitive: Primitive, count: i32);
}
