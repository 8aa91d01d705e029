use crate::error::CompileError;
use crate::resource::{ResourceId, ResourceLoader};

/// A linked program together with its uniform table.
pub trait CompiledProgram {
    /// Handle used to update one uniform, typically a location or index.
    type Uniform: Clone;

    /// Looks up a uniform by its declared name. Uniforms the driver optimized
    /// out are simply absent.
    fn uniform(&self, name: &str) -> Option<&Self::Uniform>;
}

/// The external shader compiler. Source loading goes through the supplied
/// `ResourceLoader`; the vertex layout is passed through untouched.
pub trait ShaderCompiler {
    type Program: CompiledProgram + 'static;
    type VertexLayout: 'static;

    fn compile(
        &self,
        resources: &dyn ResourceLoader,
        id: &ResourceId,
        layout: &Self::VertexLayout,
    ) -> Result<Self::Program, CompileError>;
}

/// The rendering context that owns the "current program" binding.
pub trait RenderContext<P> {
    fn set_active_program(&mut self, program: &P);
}
