use glam::Mat4;
use js_sys::{Float32Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
};

use crate::error::{SetupError, ShaderStage};
use crate::gfx::{Capability, GraphicsContext, Primitive};

/// WebGL2 context paired with the canvas it renders into.
pub struct WebGlContext {
    gl: GL,
    canvas: HtmlCanvasElement,
}

impl WebGlContext {
    /// Opaque drawing buffer (`alpha: false`): the page behind the canvas never
    /// shows through the scene.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SetupError> {
        let options = Object::new();
        Reflect::set(&options, &"alpha".into(), &JsValue::FALSE)
            .map_err(|e| SetupError::Dom(format!("{e:?}")))?;

        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &options)
            .ok()
            .flatten()
            .ok_or(SetupError::ContextUnavailable("WebGL2"))?
            .dyn_into()
            .map_err(|_| SetupError::ContextUnavailable("WebGL2"))?;
        Ok(Self { gl, canvas })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn viewport(&self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn compile_shader(
        &self,
        program: &'static str,
        stage: ShaderStage,
        source: &str,
    ) -> Result<WebGlShader, SetupError> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        let shader = self
            .gl
            .create_shader(kind)
            .ok_or(SetupError::ResourceAllocation("shader"))?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        if self
            .gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(shader)
        } else {
            let log = self
                .gl
                .get_shader_info_log(&shader)
                .unwrap_or_else(|| "unknown shader error".to_string());
            self.gl.delete_shader(Some(&shader));
            Err(SetupError::ShaderCompile { program, stage, log })
        }
    }
}

impl GraphicsContext for WebGlContext {
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;

    fn create_program(
        &self,
        label: &'static str,
        vertex: &str,
        fragment: &str,
    ) -> Result<WebGlProgram, SetupError> {
        let vertex_shader = self.compile_shader(label, ShaderStage::Vertex, vertex)?;
        let fragment_shader = self.compile_shader(label, ShaderStage::Fragment, fragment)?;
        let program = self
            .gl
            .create_program()
            .ok_or(SetupError::ResourceAllocation("program"))?;
        self.gl.attach_shader(&program, &vertex_shader);
        self.gl.attach_shader(&program, &fragment_shader);
        self.gl.link_program(&program);

        if self
            .gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            self.gl.detach_shader(&program, &vertex_shader);
            self.gl.detach_shader(&program, &fragment_shader);
            self.gl.delete_shader(Some(&vertex_shader));
            self.gl.delete_shader(Some(&fragment_shader));
            log::debug!("linked program `{label}`");
            Ok(program)
        } else {
            let log = self
                .gl
                .get_program_info_log(&program)
                .unwrap_or_else(|| "unknown program error".to_string());
            self.gl.delete_program(Some(&program));
            Err(SetupError::ProgramLink {
                program: label,
                log,
            })
        }
    }

    fn create_buffer(&self, data: &[f32]) -> Result<WebGlBuffer, SetupError> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or(SetupError::ResourceAllocation("buffer"))?;
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let array = Float32Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        Ok(buffer)
    }

    fn surface_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn clear(&self) {
        self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn bind_attribute(
        &self,
        program: &WebGlProgram,
        name: &str,
        buffer: &WebGlBuffer,
        components: i32,
    ) {
        // -1 when the compiler optimised the attribute away.
        let location = self.gl.get_attrib_location(program, name);
        if location < 0 {
            return;
        }
        let location = location as u32;
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        self.gl.enable_vertex_attrib_array(location);
        self.gl
            .vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    }

    fn set_uniform_f32(&self, program: &WebGlProgram, name: &str, value: f32) {
        let location = self.gl.get_uniform_location(program, name);
        self.gl.uniform1f(location.as_ref(), value);
    }

    fn set_uniform_mat4(&self, program: &WebGlProgram, name: &str, value: &Mat4) {
        let location = self.gl.get_uniform_location(program, name);
        self.gl
            .uniform_matrix4fv_with_f32_array(location.as_ref(), false, &value.to_cols_array());
    }

    fn set_capability(&self, capability: Capability, enabled: bool) {
        let cap = match capability {
            Capability::DepthTest => GL::DEPTH_TEST,
            Capability::CullFace => GL::CULL_FACE,
        };
        if enabled {
            self.gl.enable(cap);
        } else {
            self.gl.disable(cap);
        }
    }

    fn draw_arrays(&self, primitive: Primitive, count: i32) {
        let mode = match primitive {
            Primitive::TriangleStrip => GL::TRIANGLE_STRIP,
            Primitive::Triangles => GL::TRIANGLES,
        };
        self.gl.draw_arrays(mode, 0, count);
    }
}
