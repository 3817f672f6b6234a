//! Type-name model for Java source generation.
//!
//! Build a [`TypeName`] tree from [`ClassName`]s, feed its
//! [`TypeName::referenced_classes`] to an [`ImportPlanner`], and render the
//! tree through the resulting [`RenderContext`].

pub mod config;
pub mod context;
pub mod error;
pub mod imports;
pub mod logging;
pub mod name;
pub mod render;
pub mod types;

pub use config::PlannerConfig;
pub use context::{RenderContext, RenderContextBuilder};
pub use error::{ConfigError, LoggingError, RenderError, TypeNameError};
pub use imports::{ImportPlan, ImportPlanner};
pub use name::ClassName;
pub use render::{IoSink, Writable, write_to_string};
pub use types::{BoundKind, PrimitiveType, TypeName, WildcardBound};
