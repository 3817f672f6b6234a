use crate::context::RenderContext;
use crate::error::{RenderError, RenderResult};
use crate::name::ClassName;
use crate::types::{TypeName, WildcardBound};
use std::fmt::{self, Write};
use std::io;

/// Something that renders itself as Java source text.
///
/// The sink is only appended to. When a write fails the sink holds an
/// unspecified prefix of the output and should be discarded.
pub trait Writable {
    fn write<'w, W: Write + ?Sized>(
        &self,
        sink: &'w mut W,
        context: &RenderContext,
    ) -> RenderResult<&'w mut W>;
}

impl Writable for ClassName {
    fn write<'w, W: Write + ?Sized>(
        &self,
        sink: &'w mut W,
        context: &RenderContext,
    ) -> RenderResult<&'w mut W> {
        self.check()?;
        sink.write_str(&context.resolve(self))?;
        Ok(sink)
    }
}

impl Writable for TypeName {
    fn write<'w, W: Write + ?Sized>(
        &self,
        sink: &'w mut W,
        context: &RenderContext,
    ) -> RenderResult<&'w mut W> {
        // Reject malformed trees before anything reaches the sink.
        self.validate()?;
        write_type(self, &mut *sink, context)?;
        Ok(sink)
    }
}

fn write_type<W: Write + ?Sized>(
    ty: &TypeName,
    sink: &mut W,
    context: &RenderContext,
) -> fmt::Result {
    match ty {
        TypeName::Class(name) => sink.write_str(&context.resolve(name)),
        TypeName::Parameterized { base, params } => {
            sink.write_str(&context.resolve(base))?;
            sink.write_char('<')?;
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    sink.write_str(", ")?;
                }
                write_type(param, sink, context)?;
            }
            sink.write_char('>')
        }
        TypeName::Array(component) => {
            write_type(component, sink, context)?;
            sink.write_str("[]")
        }
        TypeName::Wildcard(bound) => {
            sink.write_char('?')?;
            match bound {
                Some(WildcardBound { kind, bound }) => {
                    write!(sink, " {} ", kind.keyword())?;
                    write_type(bound, sink, context)
                }
                None => Ok(()),
            }
        }
        TypeName::TypeVariable(name) => sink.write_str(name),
        TypeName::Primitive(primitive) => sink.write_str(primitive.keyword()),
    }
}

/// Render into a fresh string.
pub fn write_to_string<T: Writable + ?Sized>(
    value: &T,
    context: &RenderContext,
) -> RenderResult<String> {
    let mut out = String::new();
    value.write(&mut out, context)?;
    Ok(out)
}

/// Adapts a byte-oriented [`io::Write`] into a text sink, holding on to the
/// first I/O error so it can be reported instead of a bare [`fmt::Error`].
pub struct IoSink<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Render `value`, surfacing the underlying I/O error verbatim.
    pub fn render<T: Writable + ?Sized>(
        &mut self,
        value: &T,
        context: &RenderContext,
    ) -> RenderResult<()> {
        let result = value.write(&mut *self, context).map(|_| ());
        match result {
            Ok(()) => Ok(()),
            Err(RenderError::Sink(e)) => Err(match self.error.take() {
                Some(io_err) => RenderError::Io(io_err),
                None => RenderError::Sink(e),
            }),
            Err(e) => Err(e),
        }
    }

    /// Append literal text around rendered values.
    pub fn append(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_sink_writes_bytes() {
        let ty = TypeName::array(TypeName::class(ClassName::string()));
        let mut sink = IoSink::new(Vec::new());
        sink.render(&ty, &RenderContext::empty()).unwrap();
        assert_eq!(sink.into_inner(), b"java.lang.String[]");
    }

    #[test]
    fn test_io_error_is_propagated_verbatim() {
        let ty = TypeName::class(ClassName::string());
        let mut sink = IoSink::new(FailingWriter);
        match sink.render(&ty, &RenderContext::empty()) {
            Err(RenderError::Io(e)) => {
                assert_eq!(e.kind(), io::ErrorKind::BrokenPipe);
                assert_eq!(e.to_string(), "pipe closed");
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_tree_writes_nothing() {
        let ty = TypeName::array(TypeName::Parameterized {
            base: ClassName::new("java.util", "List"),
            params: vec![],
        });
        let mut out = String::new();
        let err = ty.write(&mut out, &RenderContext::empty()).unwrap_err();
        assert!(matches!(err, RenderError::Malformed(_)));
        assert!(out.is_empty());
    }
}
