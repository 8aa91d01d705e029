//! In-memory backend shared by the unit tests.
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Read};

use crate::backend::{CompiledProgram, RenderContext, ShaderCompiler};
use crate::error::CompileError;
use crate::resource::{ResourceId, ResourceLoader};

pub struct MemoryLoader {
    sources: HashMap<String, String>,
}

impl MemoryLoader {
    pub fn new<const N: usize>(sources: [(&str, &str); N]) -> Self {
        Self {
            sources: sources
                .into_iter()
                .map(|(id, source)| (id.to_string(), source.to_string()))
                .collect(),
        }
    }
}

impl ResourceLoader for MemoryLoader {
    fn open(&self, id: &ResourceId) -> io::Result<Box<dyn Read + '_>> {
        let source = self.sources.get(id.as_str()).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no source for {id}"))
        })?;
        Ok(Box::new(source.as_bytes()))
    }
}

#[derive(Debug)]
pub struct TableProgram {
    pub name: String,
    pub layout: &'static str,
    pub uniforms: HashMap<String, u32>,
}

impl CompiledProgram for TableProgram {
    type Uniform = u32;

    fn uniform(&self, name: &str) -> Option<&u32> {
        self.uniforms.get(name)
    }
}

/// Treats each `uniform NAME` line as a declaration and any `#error` line as a
/// link failure. Records the order programs were compiled in.
#[derive(Default)]
pub struct TableCompiler {
    pub compiled: RefCell<Vec<String>>,
}

impl ShaderCompiler for TableCompiler {
    type Program = TableProgram;
    type VertexLayout = &'static str;

    fn compile(
        &self,
        resources: &dyn ResourceLoader,
        id: &ResourceId,
        layout: &Self::VertexLayout,
    ) -> Result<TableProgram, CompileError> {
        self.compiled.borrow_mut().push(id.to_string());
        let source = resources
            .read_to_string(id)
            .map_err(|err| CompileError::io(id, err))?;

        let mut uniforms = HashMap::new();
        for line in source.lines() {
            let line = line.trim();
            if let Some(message) = line.strip_prefix("#error") {
                return Err(CompileError::link(id, message.trim()));
            }
            if let Some(name) = line.strip_prefix("uniform ") {
                let location = uniforms.len() as u32;
                uniforms.insert(name.trim().to_string(), location);
            }
        }

        Ok(TableProgram {
            name: id.to_string(),
            layout,
            uniforms,
        })
    }
}

#[derive(Default)]
pub struct RecordingContext {
    pub activated: Vec<String>,
}

impl RenderContext<TableProgram> for RecordingContext {
    fn set_active_program(&mut self, program: &TableProgram) {
        self.activated.push(program.name.clone());
    }
}
