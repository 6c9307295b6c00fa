use crate::Error;
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::error::Error as StdError;

impl Error {
    /// Encode the error as JSON.
    ///
    /// The object always contains `code` and `message`. The `attrs`, `caller`
    /// and `wrappedError` fields are only present when the error has
    /// attributes, a captured caller or a cause. A cause which is itself an
    /// [`Error`] is encoded in full, any other cause as `{"message": ..}`.
    ///
    /// # Errors
    ///
    /// Fails if one of the attribute values, including those of
    /// wrapped [`Error`]s, cannot be encoded as JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Encode the error as a [`serde_json::Value`].
    ///
    /// # Errors
    ///
    /// See [`Error::to_json`].
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Encode the error as a JSON string.
    ///
    /// Unlike [`Error::to_json`] this never fails: when the error cannot be
    /// encoded a diagnostic message describing the failure is returned instead.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        match serde_json::to_string(self) {
            Ok(s) => s,
            Err(err) => {
                tracing::debug!(
                    code = self.code(),
                    error = %err,
                    "xerror: failed to encode error as json, fallback to diagnostic string",
                );
                format!("failed to marshal error to JSON: {err}")
            }
        }
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let caller = self.caller().filter(|caller| !caller.is_unknown());
        let cause = self.cause();

        let len = 2
            + usize::from(!self.attrs().is_empty())
            + usize::from(caller.is_some())
            + usize::from(cause.is_some());
        let mut state = serializer.serialize_struct("Error", len)?;

        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", self.message())?;

        if self.attrs().is_empty() {
            state.skip_field("attrs")?;
        } else {
            state.serialize_field("attrs", self.attrs())?;
        }

        match caller {
            Some(caller) => state.serialize_field("caller", &caller)?,
            None => state.skip_field("caller")?,
        }

        match cause {
            Some(cause) => state.serialize_field("wrappedError", &WrappedError(cause))?,
            None => state.skip_field("wrappedError")?,
        }

        state.end()
    }
}

struct WrappedError<'a>(&'a (dyn StdError + Send + Sync + 'static));

impl Serialize for WrappedError<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(error) = self.0.downcast_ref::<Error>() {
            return error.serialize(serializer);
        }

        let mut state = serializer.serialize_struct("WrappedError", 1)?;
        state.serialize_field("message", &self.0.to_string())?;
        state.end()
    }
}
