use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::backend::{CompiledProgram, RenderContext, ShaderCompiler};
use crate::error::ProgramError;
use crate::registry::{LoaderContext, ProgramRegistry, Registration};
use crate::resource::ResourceId;

#[derive(Debug)]
pub enum ProgramState<P> {
    Pending,
    Compiled(P),
}

impl<P> ProgramState<P> {
    pub fn is_compiled(&self) -> bool {
        matches!(self, Self::Compiled(_))
    }

    pub fn program(&self) -> Option<&P> {
        match self {
            Self::Compiled(program) => Some(program),
            Self::Pending => None,
        }
    }

    /// Moves `Pending` to `Compiled`. A program that is already compiled keeps
    /// its first backing program and hands the new one back.
    pub fn install(&mut self, program: P) -> Result<(), P> {
        match self {
            Self::Pending => {
                *self = Self::Compiled(program);
                Ok(())
            }
            Self::Compiled(_) => Err(program),
        }
    }
}

/// A shader program that registers itself for compilation when created and
/// becomes usable once its registry is drained.
///
/// Custom uniforms are looked up inside the `setup` closure, which runs once
/// right after the program compiles, or later through [`ShaderProgram::find_uniform`].
///
/// Handles share their state with the pending registration through `Rc`, so
/// they stay on the thread that owns the rendering context.
pub struct ShaderProgram<C: ShaderCompiler> {
    id: ResourceId,
    state: Rc<RefCell<ProgramState<C::Program>>>,
}

impl<C: ShaderCompiler> ShaderProgram<C> {
    pub fn new<F>(
        registry: &mut ProgramRegistry<C>,
        id: impl Into<ResourceId>,
        layout: C::VertexLayout,
        setup: F,
    ) -> Self
    where
        F: FnOnce(&C::Program) + 'static,
    {
        let id = id.into();
        let state = Rc::new(RefCell::new(ProgramState::Pending));

        let factory_id = id.clone();
        let factory = move |context: &LoaderContext<'_, C>| {
            context
                .compiler
                .compile(context.resources, &factory_id, &layout)
        };

        let slot = Rc::clone(&state);
        let installed_id = id.clone();
        let on_compiled = move |program: C::Program| {
            if slot.borrow_mut().install(program).is_err() {
                warn!(program = %installed_id, "shader program compiled twice, keeping the first");
                return;
            }
            debug!(program = %installed_id, "running shader program setup");
            if let Some(program) = slot.borrow().program() {
                setup(program);
            }
        };

        registry.register(Registration::new(id.clone(), factory, on_compiled));
        Self { id, state }
    }

    /// For programs without custom uniforms to cache.
    pub fn without_setup(
        registry: &mut ProgramRegistry<C>,
        id: impl Into<ResourceId>,
        layout: C::VertexLayout,
    ) -> Self {
        Self::new(registry, id, layout, |_| {})
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn is_compiled(&self) -> bool {
        self.state.borrow().is_compiled()
    }

    /// Makes this the active program for subsequent draws on `context`.
    pub fn activate<R>(&self, context: &mut R) -> Result<(), ProgramError>
    where
        R: RenderContext<C::Program> + ?Sized,
    {
        let state = self.state.borrow();
        let program = state
            .program()
            .ok_or_else(|| ProgramError::NotCompiled(self.id.clone()))?;
        context.set_active_program(program);
        Ok(())
    }

    /// Returns `None` when the uniform does not exist (or was optimized out)
    /// and while the program is still pending.
    pub fn find_uniform(&self, name: &str) -> Option<<C::Program as CompiledProgram>::Uniform> {
        self.state.borrow().program()?.uniform(name).cloned()
    }

    /// Runs `f` against the compiled program, if there is one.
    pub fn with_program<T>(&self, f: impl FnOnce(&C::Program) -> T) -> Option<T> {
        self.state.borrow().program().map(f)
    }
}

impl<C: ShaderCompiler> Clone for ShaderProgram<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            state: Rc::clone(&self.state),
        }
    }
}

impl<C: ShaderCompiler> fmt::Debug for ShaderProgram<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("id", &self.id)
            .field("compiled", &self.is_compiled())
            .finish()
    }
}
