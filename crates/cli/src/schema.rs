use typewriter_core::{PlannerConfig, TypeName};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Type expression JSON schema:");
    println!("============================");
    let schema = schemars::schema_for!(TypeName);
    println!("{}", serde_json::to_string_pretty(&schema)?);

    println!("\nPlanner configuration schema (--config):");
    let config = schemars::schema_for!(PlannerConfig);
    println!("{}", serde_json::to_string_pretty(&config)?);

    println!("\nExample: java.util.List<java.lang.String>");
    let example = serde_json::json!({
        "kind": "parameterized",
        "data": {
            "base": { "package": "java.util", "simple_names": ["List"] },
            "params": [
                { "kind": "class", "data": { "package": "java.lang", "simple_names": ["String"] } }
            ]
        }
    });
    println!("{}", serde_json::to_string_pretty(&example)?);
    Ok(())
}
