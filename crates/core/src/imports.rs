//! Turns the classes a unit references into import lines and the
//! [`RenderContext`] the unit is rendered with.

use crate::config::PlannerConfig;
use crate::context::RenderContext;
use crate::name::ClassName;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPlan {
    /// Classes needing an import statement, sorted by qualified name.
    pub imports: Vec<ClassName>,
    pub context: RenderContext,
}

#[derive(Debug, Clone, Default)]
pub struct ImportPlanner {
    config: PlannerConfig,
    declared: IndexSet<ClassName>,
}

impl ImportPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            declared: IndexSet::new(),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Register a class declared by the unit itself, top-level or nested.
    /// It always owns its simple name, so same-named referenced classes stay
    /// qualified.
    pub fn declare(&mut self, name: ClassName) -> &mut Self {
        self.declared.insert(name);
        self
    }

    fn is_declared_top_level(&self, name: &ClassName) -> bool {
        self.declared.iter().any(|d| d.top_level() == *name)
    }

    /// A declared nested class shadows same-named classes inside the unit.
    fn is_shadowed(&self, simple: &str) -> bool {
        self.declared
            .iter()
            .any(|d| d.is_nested() && d.simple_name() == simple)
    }

    pub fn plan<I>(&self, referenced: I) -> ImportPlan
    where
        I: IntoIterator<Item = ClassName>,
    {
        let mut candidates: IndexMap<String, IndexSet<ClassName>> = IndexMap::new();
        for name in self.declared.iter().cloned().chain(referenced) {
            let top = name.top_level();
            candidates
                .entry(top.simple_name().to_string())
                .or_default()
                .insert(top);
        }

        let mut imports = Vec::new();
        let mut builder = RenderContext::builder();

        for (simple, classes) in &candidates {
            let Some(winner) = self.pick_owner(classes) else {
                debug!(
                    "Simple name `{}` is ambiguous across {} classes, qualifying all",
                    simple,
                    classes.len()
                );
                continue;
            };

            if winner.package().is_empty() && !self.config.package.is_empty() {
                // Classes in the unnamed package cannot be imported elsewhere.
                continue;
            }

            builder.bring_into_scope(winner.clone());
            if self.needs_import(winner) {
                trace!("Importing {}", winner);
                imports.push(winner.clone());
            }
        }

        imports.sort_by_key(ClassName::qualified_name);
        ImportPlan {
            imports,
            context: builder.build(),
        }
    }

    fn pick_owner<'a>(&self, classes: &'a IndexSet<ClassName>) -> Option<&'a ClassName> {
        if let Some(declared) = classes.iter().find(|c| self.is_declared_top_level(c)) {
            return Some(declared);
        }
        if classes.first().is_some_and(|c| self.is_shadowed(c.simple_name())) {
            return None;
        }
        if classes.len() == 1 {
            return classes.first();
        }
        let mut local = classes.iter().filter(|c| c.in_package(&self.config.package));
        match (local.next(), local.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    fn needs_import(&self, name: &ClassName) -> bool {
        !self.is_declared_top_level(name)
            && !name.in_package(&self.config.package)
            && !self.config.is_implicit(name.package())
    }
}
