//! Collects compile requests during initialization and resolves them in a
//! single pass once the rendering context can compile shaders.
//!
//! Types:
//!
//! - `Registration` pairs a factory (load + compile) with a completion
//!   callback that receives the compiled program.
//! - `ProgramRegistry` holds registrations in the order they were made.
//! - `LoaderContext` bundles what a factory needs at drain time.
//! - `DrainReport` lists what compiled and what failed.
use tracing::{debug, error, info};

use crate::backend::ShaderCompiler;
use crate::error::CompileError;
use crate::resource::{ResourceId, ResourceLoader};

pub struct LoaderContext<'a, C: ShaderCompiler> {
    pub resources: &'a dyn ResourceLoader,
    pub compiler: &'a C,
}

impl<'a, C: ShaderCompiler> LoaderContext<'a, C> {
    pub fn new(resources: &'a dyn ResourceLoader, compiler: &'a C) -> Self {
        Self {
            resources,
            compiler,
        }
    }
}

type Factory<C> = Box<
    dyn FnOnce(&LoaderContext<'_, C>) -> Result<<C as ShaderCompiler>::Program, CompileError>,
>;
type Completion<C> = Box<dyn FnOnce(<C as ShaderCompiler>::Program)>;

pub struct Registration<C: ShaderCompiler> {
    id: ResourceId,
    factory: Factory<C>,
    on_compiled: Completion<C>,
}

impl<C: ShaderCompiler> Registration<C> {
    pub fn new<F, D>(id: ResourceId, factory: F, on_compiled: D) -> Self
    where
        F: FnOnce(&LoaderContext<'_, C>) -> Result<C::Program, CompileError> + 'static,
        D: FnOnce(C::Program) + 'static,
    {
        Self {
            id,
            factory: Box::new(factory),
            on_compiled: Box::new(on_compiled),
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }
}

pub struct ProgramRegistry<C: ShaderCompiler> {
    entries: Vec<Registration<C>>,
}

impl<C: ShaderCompiler> ProgramRegistry<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, entry: Registration<C>) {
        debug!(program = %entry.id, position = self.entries.len(), "registered shader program");
        self.entries.push(entry);
    }

    /// Compiles every registration in registration order. A failing entry is
    /// logged and reported without stopping the ones after it.
    pub fn drain(self, context: &LoaderContext<'_, C>) -> DrainReport {
        let mut report = DrainReport::default();

        for Registration {
            id,
            factory,
            on_compiled,
        } in self.entries
        {
            debug!(program = %id, "compiling shader program");
            match factory(context) {
                Ok(program) => {
                    on_compiled(program);
                    report.compiled.push(id);
                }
                Err(err) => {
                    error!(program = %id, error = %err, "shader program failed to compile");
                    report.failures.push(err);
                }
            }
        }

        info!(
            compiled = report.compiled.len(),
            failed = report.failures.len(),
            "drained shader program registry"
        );
        report
    }
}

impl<C: ShaderCompiler> Default for ProgramRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct DrainReport {
    pub compiled: Vec<ResourceId>,
    pub failures: Vec<CompileError>,
}

impl DrainReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
