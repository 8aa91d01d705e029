//! Shader programs that are declared early and compiled later.
//!
//! UI code creates `ShaderProgram` handles while it is still setting up, long
//! before a rendering context can compile anything. Each handle registers a
//! compile request with a `ProgramRegistry`. Once the context is ready, the
//! registry is drained in one pass: every request loads its sources through a
//! `ResourceLoader`, hands them to the `ShaderCompiler`, installs the result
//! into its handle and runs the handle's setup.
//!
//! ```text
//!   ShaderProgram::new ──register──▶ ProgramRegistry
//!                                         │ drain(LoaderContext)
//!                                         ▼
//!            ResourceLoader ──▶ ShaderCompiler::compile ──▶ handle: Compiled
//! ```
//!
//! A program whose compile fails stays pending; the failure is logged and
//! returned in the `DrainReport`.
mod backend;
mod error;
mod program;
mod registry;
mod resource;
#[cfg(test)]
mod testing;

pub use backend::{CompiledProgram, RenderContext, ShaderCompiler};
pub use error::{CompileError, ProgramError};
pub use program::{ProgramState, ShaderProgram};
pub use registry::{DrainReport, LoaderContext, ProgramRegistry, Registration};
pub use resource::{DirectoryLoader, ResourceId, ResourceLoader};
