use std::{
    cell::RefCell,
    io::{BufWriter, Write},
};

use serde_json::Value;

use crate::BindError;
use crate::core::codec::TreeEncode;

/// Serializes an encoded tree to a string in one call.
pub fn encode_to_string<T: TreeEncode>(value: &T) -> Result<String, BindError> {
    let tree = value.encode()?;
    serde_json::to_string(&tree).map_err(|error| BindError::Emit(error.to_string()))
}

/// Pretty-printed variant of [`encode_to_string`].
pub fn encode_to_string_pretty<T: TreeEncode>(value: &T) -> Result<String, BindError> {
    let tree = value.encode()?;
    serde_json::to_string_pretty(&tree).map_err(|error| BindError::Emit(error.to_string()))
}

/// Writes encoded trees to an underlying sink. The mapper itself performs no
/// I/O; this is the collaborator that consumes its output.
pub struct TreeWriter<W: Write> {
    stream: RefCell<BufWriter<W>>,
    use_pretty_formatter: bool,
}

impl<W: Write> TreeWriter<W> {
    /// Writes one tree to the sink, compact or pretty-printed depending on
    /// the builder configuration.
    pub fn write(&self, tree: &Value) -> Result<(), BindError> {
        let json = if self.use_pretty_formatter {
            serde_json::to_string_pretty(tree)
        } else {
            serde_json::to_string(tree)
        };
        let json = json.map_err(|error| BindError::Emit(error.to_string()))?;

        let result = self.stream.borrow_mut().write_all(json.as_bytes());
        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(BindError::Emit(error.to_string())),
        }
    }

    /// Encodes `value` and writes the resulting tree.
    pub fn write_value<T: TreeEncode>(&self, value: &T) -> Result<(), BindError> {
        self.write(&value.encode()?)
    }

    pub fn flush(&self) -> Result<(), BindError> {
        let result = self.stream.borrow_mut().flush();
        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(BindError::Emit(error.to_string())),
        }
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(self) -> Result<W, BindError> {
        let result = self.stream.into_inner().into_inner();
        match result {
            Ok(writer) => Ok(writer),
            Err(error) => Err(BindError::Emit(error.to_string())),
        }
    }
}

#[derive(Default)]
pub struct TreeWriterBuilder {
    pretty_formatter: bool,
}

impl TreeWriterBuilder {
    pub fn new() -> TreeWriterBuilder {
        TreeWriterBuilder {
            pretty_formatter: false,
        }
    }

    pub fn pretty_formatter(mut self, yes: bool) -> TreeWriterBuilder {
        self.pretty_formatter = yes;
        self
    }

    pub fn from_writer<W: Write>(self, wrt: W) -> TreeWriter<W> {
        TreeWriter {
            stream: RefCell::new(BufWriter::new(wrt)),
            use_pretty_formatter: self.pretty_formatter,
        }
    }
}
