use crate::input::read_type;
use std::io;
use std::path::Path;
use tracing::info;
use typewriter_core::{ImportPlanner, IoSink, PlannerConfig, RenderContext, TypeName};

pub struct RenderOptions<'a> {
    pub config: Option<&'a Path>,
    pub package: Option<String>,
    pub qualified: bool,
}

pub fn run(input: &str, options: RenderOptions<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let ty = read_type(input)?;
    let stdout = io::stdout();
    write_rendered(stdout.lock(), &ty, options)
}

/// Import lines, a blank line when there were any, then the type itself.
pub fn write_rendered<W: io::Write>(
    out: W,
    ty: &TypeName,
    options: RenderOptions<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sink = IoSink::new(out);

    if options.qualified {
        sink.render(ty, &RenderContext::empty())?;
        sink.append("\n")?;
        return Ok(());
    }

    let mut config = match options.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    if let Some(package) = options.package {
        config.package = package;
        config.validate()?;
    }
    info!("Planning imports for package `{}`", config.package);

    let plan = ImportPlanner::new(config).plan(ty.referenced_classes());
    for import in &plan.imports {
        sink.append(&format!("import {};\n", import))?;
    }
    if !plan.imports.is_empty() {
        sink.append("\n")?;
    }
    sink.render(ty, &plan.context)?;
    sink.append("\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_type;
    use std::io::Write;

    const MAP_OF_LISTS: &str = r#"{"kind":"parameterized","data":{
        "base":{"package":"java.util","simple_names":["Map"]},
        "params":[
            {"kind":"class","data":{"package":"java.lang","simple_names":["String"]}},
            {"kind":"parameterized","data":{
                "base":{"package":"java.util","simple_names":["List"]},
                "params":[{"kind":"class","data":{"package":"com.example","simple_names":["Foo"]}}]}}
        ]}}"#;

    fn render(
        json: &str,
        options: RenderOptions<'_>,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let ty = parse_type(json)?;
        let mut out = Vec::new();
        write_rendered(&mut out, &ty, options)?;
        Ok(String::from_utf8(out)?)
    }

    fn in_package(package: &str) -> RenderOptions<'static> {
        RenderOptions {
            config: None,
            package: Some(package.to_string()),
            qualified: false,
        }
    }

    #[test]
    fn test_imports_then_blank_line_then_type() {
        let text = render(MAP_OF_LISTS, in_package("com.example")).unwrap();
        assert_eq!(
            text,
            "import java.util.List;\nimport java.util.Map;\n\nMap<String, List<Foo>>\n"
        );
    }

    #[test]
    fn test_no_blank_line_without_imports() {
        let json = r#"{"kind":"array","data":{"kind":"class","data":{"package":"java.lang","simple_names":["String"]}}}"#;
        let text = render(json, in_package("com.example")).unwrap();
        assert_eq!(text, "String[]\n");
    }

    #[test]
    fn test_qualified_skips_planning() {
        let options = RenderOptions {
            config: None,
            package: Some("com.example".to_string()),
            qualified: true,
        };
        let text = render(MAP_OF_LISTS, options).unwrap();
        assert_eq!(
            text,
            "java.util.Map<java.lang.String, java.util.List<com.example.Foo>>\n"
        );
    }

    #[test]
    fn test_package_override_is_validated() {
        let err = render(MAP_OF_LISTS, in_package("com..example")).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn test_config_file_package_applies() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"package": "com.example"}}"#).unwrap();
        let options = RenderOptions {
            config: Some(file.path()),
            package: None,
            qualified: false,
        };
        let text = render(MAP_OF_LISTS, options).unwrap();
        assert!(text.ends_with("\n\nMap<String, List<Foo>>\n"));
    }
}
