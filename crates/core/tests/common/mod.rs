#![allow(dead_code)]

use typewriter_core::{ClassName, TypeName};

pub fn class(package: &str, simple: &str) -> ClassName {
    ClassName::new(package, simple)
}

pub fn ty(package: &str, simple: &str) -> TypeName {
    TypeName::class(class(package, simple))
}

pub fn string() -> TypeName {
    TypeName::class(ClassName::string())
}

pub fn integer() -> TypeName {
    ty("java.lang", "Integer")
}

pub fn list_of(param: TypeName) -> TypeName {
    TypeName::parameterized(class("java.util", "List"), [param]).unwrap()
}

/// `java.util.Map<String, List<Integer>>`
pub fn map_of_string_to_list_of_integer() -> TypeName {
    TypeName::parameterized(
        class("java.util", "Map"),
        [string(), list_of(integer())],
    )
    .unwrap()
}
