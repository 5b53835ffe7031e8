use std::any::Any;
use std::collections::HashMap;

use serde_json::Value;

use crate::BindError;

/// Builds a typed value from a generic JSON tree node.
///
/// A failed decode returns no value at all, never a partially populated one:
/// either every invariant of the target type holds or the call fails.
pub trait TreeDecode: Sized {
    fn decode(node: &Value) -> Result<Self, BindError>;
}

/// Emits a typed value as a generic JSON tree.
///
/// The output shape is owned by the implementation and is allowed to differ
/// from whatever shape [`TreeDecode`] accepts for the same type.
pub trait TreeEncode {
    fn encode(&self) -> Result<Value, BindError>;
}

type DecodeFn = fn(&Value) -> Result<Box<dyn Any>, BindError>;
type EncodeFn = fn(&dyn Any) -> Option<Result<Value, BindError>>;

/// A dispatch table from a type tag to a (decode, encode) function pair.
///
/// This replaces per-type registration of serializers and deserializers on a
/// mapper instance: callers that only know a tag at runtime go through the
/// registry, callers with a concrete type in hand use the traits directly.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: HashMap<&'static str, (DecodeFn, EncodeFn)>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        CodecRegistry {
            codecs: HashMap::new(),
        }
    }

    /// Registers the codec pair of `T` under `tag`, replacing any previous
    /// registration for the same tag.
    pub fn register<T: TreeDecode + TreeEncode + Any>(&mut self, tag: &'static str) {
        self.codecs.insert(
            tag,
            (
                |node| T::decode(node).map(|value| Box::new(value) as Box<dyn Any>),
                |value| value.downcast_ref::<T>().map(TreeEncode::encode),
            ),
        );
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.codecs.contains_key(tag)
    }

    /// Decodes `node` with the codec registered under `tag`.
    ///
    /// Fails with [`BindError::Unregistered`] for an unknown tag and with
    /// [`BindError::CodecType`] when the registered codec does not produce `T`.
    pub fn decode<T: Any>(&self, tag: &str, node: &Value) -> Result<T, BindError> {
        let (decode, _) = self.entry(tag)?;
        let boxed = decode(node)?;
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| BindError::CodecType(tag.to_string()))
    }

    /// Encodes `value` with the codec registered under `tag`.
    pub fn encode(&self, tag: &str, value: &dyn Any) -> Result<Value, BindError> {
        let (_, encode) = self.entry(tag)?;
        encode(value).ok_or_else(|| BindError::CodecType(tag.to_string()))?
    }

    fn entry(&self, tag: &str) -> Result<&(DecodeFn, EncodeFn), BindError> {
        self.codecs
            .get(tag)
            .ok_or_else(|| BindError::Unregistered(tag.to_string()))
    }
}
