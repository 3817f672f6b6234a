use crate::error::{Result, TypeNameError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between packages, and between a package and its classes.
pub const TYPE_SEPARATOR: char = '.';

/// Separator between enclosing and nested classes in class-file names.
pub const BINARY_NESTED_SEPARATOR: char = '$';

pub const JAVA_LANG: &str = "java.lang";

/// A fully qualified, compile-time class identifier.
///
/// `simple_names` runs from the outermost class to the innermost one, so
/// `java.util.Map.Entry` is package `java.util` with `[Map, Entry]`. The
/// unnamed package is the empty string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// A top-level class. The caller vouches for the identifiers; use
    /// [`ClassName::from_parts`] for untrusted input.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    pub fn from_parts<I, S>(package: impl Into<String>, simple_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let package = package.into();
        let simple_names: Vec<String> = simple_names.into_iter().map(Into::into).collect();

        let name = Self {
            package,
            simple_names,
        };
        name.check()?;
        Ok(name)
    }

    /// Guess the structure of a dotted name: lowercase leading segments are
    /// the package, the first capitalized segment starts the class chain.
    ///
    /// ```ignore
    /// best_guess("java.util.Map.Entry") => package "java.util", [Map, Entry]
    /// best_guess("Foo") => package "", [Foo]
    /// ```
    pub fn best_guess(qualified: &str) -> Result<Self> {
        let guess_error = || TypeNameError::BestGuess(qualified.to_string());

        let mut parts = qualified.split(TYPE_SEPARATOR).peekable();
        let mut package = Vec::new();
        while let Some(part) = parts.peek() {
            if !starts_lowercase(part) {
                break;
            }
            package.push(*part);
            parts.next();
        }

        let simple_names: Vec<&str> = parts.collect();
        if simple_names.is_empty() || !simple_names.iter().all(|s| starts_uppercase(s)) {
            return Err(guess_error());
        }

        Self::from_parts(package.join("."), simple_names).map_err(|_| guess_error())
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The innermost identifier, e.g. `Entry` for `java.util.Map.Entry`.
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map(String::as_str).unwrap_or_default()
    }

    /// The outermost identifier, the one an import statement brings into scope.
    pub fn leading_name(&self) -> &str {
        self.simple_names.first().map(String::as_str).unwrap_or_default()
    }

    pub fn is_nested(&self) -> bool {
        self.simple_names.len() > 1
    }

    /// The class one nesting level up, `None` for top-level classes.
    pub fn enclosing(&self) -> Option<ClassName> {
        if !self.is_nested() {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    pub fn top_level(&self) -> ClassName {
        Self {
            package: self.package.clone(),
            simple_names: self.simple_names.iter().take(1).cloned().collect(),
        }
    }

    pub fn nested(&self, simple_name: impl Into<String>) -> ClassName {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// A class declared next to this one, in the same package or enclosing class.
    pub fn peer(&self, simple_name: impl Into<String>) -> ClassName {
        let mut simple_names = self.simple_names.clone();
        simple_names.pop();
        simple_names.push(simple_name.into());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// `Outer.Inner`, the spelling used once `Outer` is in scope.
    pub fn dotted_simple_names(&self) -> String {
        self.simple_names.join(".")
    }

    /// `pkg.Outer.Inner`
    pub fn qualified_name(&self) -> String {
        self.join_with(TYPE_SEPARATOR)
    }

    /// `pkg.Outer$Inner`, as found in class files.
    pub fn binary_name(&self) -> String {
        self.join_with(BINARY_NESTED_SEPARATOR)
    }

    fn join_with(&self, nested_separator: char) -> String {
        let mut out = String::with_capacity(
            self.package.len() + self.simple_names.iter().map(|s| s.len() + 1).sum::<usize>(),
        );
        if !self.package.is_empty() {
            out.push_str(&self.package);
            out.push(TYPE_SEPARATOR);
        }
        for (i, name) in self.simple_names.iter().enumerate() {
            if i > 0 {
                out.push(nested_separator);
            }
            out.push_str(name);
        }
        out
    }

    /// Re-check what [`ClassName::from_parts`] enforces, for names that
    /// arrived through deserialization.
    pub(crate) fn check(&self) -> Result<()> {
        if self.simple_names.is_empty() {
            return Err(TypeNameError::EmptySimpleNames {
                package: self.package.clone(),
            });
        }
        if !self.package.is_empty() {
            for segment in self.package.split(TYPE_SEPARATOR) {
                check_identifier(segment)?;
            }
        }
        self.simple_names
            .iter()
            .try_for_each(|name| check_identifier(name))
    }

    pub fn in_package(&self, package: &str) -> bool {
        self.package == package
    }

    pub fn object() -> Self {
        Self::new(JAVA_LANG, "Object")
    }

    pub fn string() -> Self {
        Self::new(JAVA_LANG, "String")
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

pub(crate) fn check_identifier(s: &str) -> Result<()> {
    let mut chars = s.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(TypeNameError::InvalidIdentifier(s.to_string()))
    }
}

fn starts_lowercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_lowercase)
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ClassName {
        ClassName::from_parts("java.util", ["Map", "Entry"]).unwrap()
    }

    #[test]
    fn test_qualified_and_binary_names() {
        assert_eq!(entry().qualified_name(), "java.util.Map.Entry");
        assert_eq!(entry().binary_name(), "java.util.Map$Entry");
        assert_eq!(entry().dotted_simple_names(), "Map.Entry");
        assert_eq!(ClassName::new("", "Foo").qualified_name(), "Foo");
    }

    #[test]
    fn test_enclosing_walks_one_level_up() {
        let map = entry().enclosing().unwrap();
        assert_eq!(map, ClassName::new("java.util", "Map"));
        assert!(map.enclosing().is_none());
        assert_eq!(entry().top_level(), map);
    }

    #[test]
    fn test_nested_and_peer() {
        let map = ClassName::new("java.util", "Map");
        assert_eq!(map.nested("Entry"), entry());
        assert_eq!(entry().peer("Node"), map.nested("Node"));
        assert_eq!(map.peer("List"), ClassName::new("java.util", "List"));
    }

    #[test]
    fn test_from_parts_rejects_bad_input() {
        assert_eq!(
            ClassName::from_parts("java.util", Vec::<String>::new()),
            Err(TypeNameError::EmptySimpleNames {
                package: "java.util".to_string()
            })
        );
        assert_eq!(
            ClassName::from_parts("java.util", ["1List"]),
            Err(TypeNameError::InvalidIdentifier("1List".to_string()))
        );
        assert_eq!(
            ClassName::from_parts("java..util", ["List"]),
            Err(TypeNameError::InvalidIdentifier(String::new()))
        );
    }

    #[test]
    fn test_check_rejects_deserialized_bad_identifiers() {
        let json = r#"{"package":"java util","simple_names":["List"]}"#;
        let name: ClassName = serde_json::from_str(json).unwrap();
        assert_eq!(
            name.check(),
            Err(TypeNameError::InvalidIdentifier("java util".to_string()))
        );

        let json = r#"{"package":"java.util","simple_names":["List<int> x; //"]}"#;
        let name: ClassName = serde_json::from_str(json).unwrap();
        assert_eq!(
            name.check(),
            Err(TypeNameError::InvalidIdentifier("List<int> x; //".to_string()))
        );
    }

    #[test]
    fn test_best_guess() {
        assert_eq!(ClassName::best_guess("java.util.Map.Entry").unwrap(), entry());
        assert_eq!(
            ClassName::best_guess("Foo").unwrap(),
            ClassName::new("", "Foo")
        );
        assert!(ClassName::best_guess("java.util").is_err());
        assert!(ClassName::best_guess("java.util.Map.entry").is_err());
        assert!(ClassName::best_guess("").is_err());
    }
}
