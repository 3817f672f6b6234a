use crate::input::read_type;
use std::io;
use typewriter_core::TypeName;

pub fn run(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ty = read_type(input)?;
    let stdout = io::stdout();
    write_refs(stdout.lock(), &ty)?;
    Ok(())
}

/// One qualified name per line, sorted.
pub fn write_refs<W: io::Write>(mut out: W, ty: &TypeName) -> io::Result<()> {
    let mut refs: Vec<String> = ty
        .referenced_classes()
        .iter()
        .map(|c| c.qualified_name())
        .collect();
    refs.sort();
    for name in refs {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
