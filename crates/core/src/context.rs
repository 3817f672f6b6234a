use crate::name::ClassName;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

/// Which class names may be spelled without their package in the unit being
/// rendered. Read-only once built; revising it means building a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    in_scope: HashMap<String, ClassName>,
}

impl RenderContext {
    /// Nothing in scope: every class renders fully qualified.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> RenderContextBuilder {
        RenderContextBuilder::default()
    }

    /// The shortest spelling of `name` that still resolves to `name`.
    ///
    /// `Outer.Inner` when `Outer` owns the leading identifier, `Inner` when
    /// the nested class was brought into scope under its own simple name,
    /// the qualified name otherwise.
    pub fn resolve<'a>(&self, name: &'a ClassName) -> Cow<'a, str> {
        let owns_leading = self
            .in_scope
            .get(name.leading_name())
            .is_some_and(|owner| owner == name || *owner == name.top_level());
        if owns_leading {
            return match name.simple_names() {
                [single] => Cow::Borrowed(single.as_str()),
                _ => Cow::Owned(name.dotted_simple_names()),
            };
        }

        if name.is_nested()
            && self
                .in_scope
                .get(name.simple_name())
                .is_some_and(|owner| owner == name)
        {
            return Cow::Borrowed(name.simple_name());
        }

        Cow::Owned(name.qualified_name())
    }

    pub fn in_scope(&self) -> impl Iterator<Item = &ClassName> {
        self.in_scope.values()
    }

    pub fn is_empty(&self) -> bool {
        self.in_scope.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RenderContextBuilder {
    in_scope: HashMap<String, ClassName>,
}

impl RenderContextBuilder {
    /// Make `name` spellable by its simple name (the outermost one for a
    /// top-level class, the innermost one for a nested class imported on its
    /// own). Returns `false` if a different class already owns that simple
    /// name; the rejected class keeps rendering qualified.
    pub fn bring_into_scope(&mut self, name: ClassName) -> bool {
        let key = name.simple_name().to_string();
        match self.in_scope.get(&key) {
            Some(existing) if *existing == name => true,
            Some(existing) => {
                debug!(
                    "Simple name `{}` already bound to {}, keeping {} qualified",
                    key, existing, name
                );
                false
            }
            None => {
                self.in_scope.insert(key, name);
                true
            }
        }
    }

    pub fn with(mut self, name: ClassName) -> Self {
        self.bring_into_scope(name);
        self
    }

    pub fn build(self) -> RenderContext {
        RenderContext {
            in_scope: self.in_scope,
        }
    }
}

impl FromIterator<ClassName> for RenderContext {
    fn from_iter<T: IntoIterator<Item = ClassName>>(iter: T) -> Self {
        let mut builder = RenderContext::builder();
        for name in iter {
            builder.bring_into_scope(name);
        }
        builder.build()
    }
}
