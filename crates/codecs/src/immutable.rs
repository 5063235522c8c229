//! Shared skeleton for codecs over immutable values
//!
//! Every codec converts one immutable temporal value type to and from one or
//! more flat columns. Because values are immutable, the lifecycle hooks a
//! persistence host needs (copying, caching, merging, equality, hashing) are
//! the same for every codec and are provided here. A concrete codec only
//! supplies its declared column types and its type-specific `decode` and
//! `encode`.
//!
//! ## Contract
//!
//! | Operation | Behavior |
//! |-----------|----------|
//! | `is_mutable` | always false |
//! | `deep_copy` | returns the value unchanged |
//! | `disassemble` / `assemble` | identity |
//! | `equals` | both null: true; one null: false; else value equality |
//! | `hash_code` | value hash; null is an invalid argument |
//! | `null_safe_set` | null binds a typed SQL NULL, else `encode` |
//! | `null_safe_get` | `decode`, which maps SQL NULL to `None` |
//! | `replace` | returns the original |
//!
//! ## Thread Safety
//!
//! Codecs are configured once and never mutated afterwards, so they are
//! `Send + Sync` and may be shared freely between threads.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use chronopersist_core::{
    CodecError, CodecProperties, CodecResult, RowReader, SqlType, StatementWriter,
};

/// Two-phase construction: build from a properties bag, then treat as immutable
pub trait Configure: Sized {
    /// Build a codec from host-supplied properties
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Configuration`] for missing or invalid properties.
    fn configure(props: &CodecProperties) -> CodecResult<Self>;
}

/// A codec between an immutable value type and flat columns
pub trait ImmutableValueCodec: Send + Sync {
    /// The in-memory value type
    type Value: Clone + PartialEq + Hash + Debug + Send + Sync + 'static;

    /// Name of the value type this codec materializes
    fn value_type_name(&self) -> &'static str;

    /// SQL types of the columns this codec occupies, in parameter order
    fn sql_types(&self) -> &'static [SqlType];

    /// SQL type bound when writing a null value
    fn null_sql_type(&self) -> SqlType;

    /// Decode a value from the named columns of a row
    ///
    /// Returns `Ok(None)` when the underlying column is SQL NULL.
    ///
    /// # Errors
    ///
    /// Returns an error if a column is missing, holds the wrong kind of
    /// primitive, or holds data that does not denote a value.
    fn decode(&self, row: &dyn RowReader, names: &[&str]) -> CodecResult<Option<Self::Value>>;

    /// Encode a non-null value starting at the 1-based parameter `index`
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented or binding fails.
    fn encode(
        &self,
        statement: &mut dyn StatementWriter,
        index: usize,
        value: &Self::Value,
    ) -> CodecResult<()>;

    // =========================================================================
    // Provided lifecycle operations
    // =========================================================================

    /// Values are immutable
    fn is_mutable(&self) -> bool {
        false
    }

    /// Immutable values need no copy
    fn deep_copy(&self, value: Option<&Self::Value>) -> Option<Self::Value> {
        value.cloned()
    }

    /// Cacheable form of a value (the value itself)
    fn disassemble(&self, value: Self::Value) -> Self::Value {
        value
    }

    /// Value from its cached form (the cached form itself)
    fn assemble(&self, cached: Self::Value) -> Self::Value {
        cached
    }

    /// Null-aware value equality
    fn equals(&self, a: Option<&Self::Value>, b: Option<&Self::Value>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Null-aware equality over untyped values
    ///
    /// Anything that is not this codec's value type compares not-equal.
    fn equals_dyn(&self, a: Option<&dyn Any>, b: Option<&dyn Any>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                match (
                    a.downcast_ref::<Self::Value>(),
                    b.downcast_ref::<Self::Value>(),
                ) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Hash of a value, consistent with [`ImmutableValueCodec::equals`]
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidArgument`] for a null value; callers guard.
    fn hash_code(&self, value: Option<&Self::Value>) -> CodecResult<u64> {
        let value = value.ok_or_else(|| {
            CodecError::InvalidArgument(format!("cannot hash a null {}", self.value_type_name()))
        })?;
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        Ok(hasher.finish())
    }

    /// Bind a possibly-null value
    ///
    /// # Errors
    ///
    /// Propagates [`ImmutableValueCodec::encode`] and binding errors.
    fn null_safe_set(
        &self,
        statement: &mut dyn StatementWriter,
        index: usize,
        value: Option<&Self::Value>,
    ) -> CodecResult<()> {
        match value {
            Some(value) => self.encode(statement, index, value),
            None => statement.set_null(index, self.null_sql_type()),
        }
    }

    /// Read a possibly-null value
    ///
    /// # Errors
    ///
    /// Propagates [`ImmutableValueCodec::decode`] errors.
    fn null_safe_get(
        &self,
        row: &dyn RowReader,
        names: &[&str],
    ) -> CodecResult<Option<Self::Value>> {
        self.decode(row, names)
    }

    /// Merge a detached value into a managed one (immutable: keep the original)
    fn replace(
        &self,
        original: Option<Self::Value>,
        _target: Option<&Self::Value>,
    ) -> Option<Self::Value> {
        original
    }
}
