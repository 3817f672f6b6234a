//! The type-expression model: everything that can appear where Java source
//! expects a type.

use crate::context::RenderContext;
use crate::error::{Result, TypeNameError};
use crate::name::{ClassName, JAVA_LANG, check_identifier};
use crate::render::write_to_string;
use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 9] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Char,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Void,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }

    /// The `java.lang` wrapper class, e.g. `Integer` for `int`.
    pub fn boxed(self) -> ClassName {
        let simple = match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Char => "Character",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
            PrimitiveType::Void => "Void",
        };
        ClassName::new(JAVA_LANG, simple)
    }
}

impl FromStr for PrimitiveType {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self> {
        PrimitiveType::ALL
            .into_iter()
            .find(|p| p.keyword() == s)
            .ok_or_else(|| TypeNameError::UnknownPrimitive(s.to_string()))
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BoundKind {
    Extends,
    Super,
}

impl BoundKind {
    pub fn keyword(self) -> &'static str {
        match self {
            BoundKind::Extends => "extends",
            BoundKind::Super => "super",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct WildcardBound {
    pub kind: BoundKind,
    pub bound: Box<TypeName>,
}

/// A syntactic type reference. Trees are immutable once built and render
/// differently only through the [`RenderContext`] they are given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum TypeName {
    /// A bare class reference, e.g. `java.lang.String`
    Class(ClassName),

    /// Generic instantiation, e.g. `List<String>`. Never has zero parameters.
    Parameterized {
        base: ClassName,
        params: Vec<TypeName>,
    },

    /// Array of a component type, e.g. `String[]`
    Array(Box<TypeName>),

    /// `?`, `? extends Number` or `? super T`
    Wildcard(Option<WildcardBound>),

    /// A type variable in scope, e.g. `T`
    TypeVariable(String),

    Primitive(PrimitiveType),
}

impl TypeName {
    pub fn class(name: ClassName) -> Self {
        TypeName::Class(name)
    }

    /// Fails with [`TypeNameError::EmptyParameters`] when `params` is empty.
    pub fn parameterized(
        base: ClassName,
        params: impl IntoIterator<Item = TypeName>,
    ) -> Result<Self> {
        let params: Vec<TypeName> = params.into_iter().collect();
        if params.is_empty() {
            return Err(TypeNameError::EmptyParameters {
                base: base.qualified_name(),
            });
        }
        Ok(TypeName::Parameterized { base, params })
    }

    pub fn array(component: TypeName) -> Self {
        TypeName::Array(Box::new(component))
    }

    /// The unbounded wildcard `?`.
    pub fn wildcard() -> Self {
        TypeName::Wildcard(None)
    }

    pub fn wildcard_extends(bound: TypeName) -> Self {
        TypeName::Wildcard(Some(WildcardBound {
            kind: BoundKind::Extends,
            bound: Box::new(bound),
        }))
    }

    pub fn wildcard_super(bound: TypeName) -> Self {
        TypeName::Wildcard(Some(WildcardBound {
            kind: BoundKind::Super,
            bound: Box::new(bound),
        }))
    }

    pub fn type_variable(name: impl Into<String>) -> Self {
        TypeName::TypeVariable(name.into())
    }

    pub fn primitive(primitive: PrimitiveType) -> Self {
        TypeName::Primitive(primitive)
    }

    pub fn void() -> Self {
        TypeName::Primitive(PrimitiveType::Void)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeName::Primitive(_))
    }

    /// Primitives become their wrapper class; other types are unchanged.
    pub fn boxed(&self) -> TypeName {
        match self {
            TypeName::Primitive(p) => TypeName::Class(p.boxed()),
            other => other.clone(),
        }
    }

    /// Every class this tree mentions, deduplicated, in first-visit order.
    pub fn referenced_classes(&self) -> IndexSet<ClassName> {
        let mut out = IndexSet::new();
        self.collect_referenced(&mut out);
        out
    }

    fn collect_referenced(&self, out: &mut IndexSet<ClassName>) {
        match self {
            TypeName::Class(name) => {
                out.insert(name.clone());
            }
            TypeName::Parameterized { base, params } => {
                out.insert(base.clone());
                for param in params {
                    param.collect_referenced(out);
                }
            }
            TypeName::Array(component) => component.collect_referenced(out),
            TypeName::Wildcard(bound) => {
                if let Some(WildcardBound { bound, .. }) = bound {
                    bound.collect_referenced(out);
                }
            }
            TypeName::TypeVariable(_) | TypeName::Primitive(_) => {}
        }
    }

    /// Check the invariants the constructors enforce, for trees that were
    /// built some other way (e.g. deserialized).
    pub fn validate(&self) -> Result<()> {
        match self {
            TypeName::Class(name) => name.check(),
            TypeName::Parameterized { base, params } => {
                base.check()?;
                if params.is_empty() {
                    return Err(TypeNameError::EmptyParameters {
                        base: base.qualified_name(),
                    });
                }
                params.iter().try_for_each(TypeName::validate)
            }
            TypeName::Array(component) => component.validate(),
            TypeName::Wildcard(Some(WildcardBound { bound, .. })) => bound.validate(),
            TypeName::Wildcard(None) | TypeName::Primitive(_) => Ok(()),
            TypeName::TypeVariable(name) => check_identifier(name),
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(name: ClassName) -> Self {
        TypeName::Class(name)
    }
}

impl From<PrimitiveType> for TypeName {
    fn from(primitive: PrimitiveType) -> Self {
        TypeName::Primitive(primitive)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = write_to_string(self, &RenderContext::empty()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
