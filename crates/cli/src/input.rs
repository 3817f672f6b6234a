use std::io::Read;
use typewriter_core::TypeName;

/// Parse a type tree from a JSON argument, or from stdin when `arg` is `-`.
pub fn read_type(arg: &str) -> Result<TypeName, Box<dyn std::error::Error>> {
    let json = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        arg.to_string()
    };
    parse_type(&json)
}

pub fn parse_type(json: &str) -> Result<TypeName, Box<dyn std::error::Error>> {
    let ty: TypeName = serde_json::from_str(json)?;
    ty.validate()?;
    Ok(ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typewriter_core::ClassName;

    #[test]
    fn test_parse_valid_tree() {
        let json = r#"{"kind":"parameterized","data":{
            "base":{"package":"java.util","simple_names":["List"]},
            "params":[{"kind":"class","data":{"package":"java.lang","simple_names":["String"]}}]}}"#;
        let ty = parse_type(json).unwrap();
        assert_eq!(
            ty,
            TypeName::parameterized(
                ClassName::new("java.util", "List"),
                [TypeName::class(ClassName::string())]
            )
            .unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_empty_parameters() {
        let json = r#"{"kind":"parameterized","data":{
            "base":{"package":"java.util","simple_names":["List"]},"params":[]}}"#;
        let err = parse_type(json).unwrap_err();
        assert!(err.to_string().contains("no type parameters"));
    }
}
