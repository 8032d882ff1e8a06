//! Aligns secondary inputs to the length of the parameter name list.

use famkit_model::{BroadcastPolicy, FamilyError, InputValue, Result};

/// Expands `input` to exactly `len` elements.
///
/// A scalar is repeated `len` times. A shorter sequence is padded with its
/// last element. A longer sequence is truncated under
/// [`BroadcastPolicy::Truncate`] and rejected under
/// [`BroadcastPolicy::Reject`]. An empty sequence cannot be padded and is an
/// [`FamilyError::InputShape`] error whenever `len > 0`.
///
/// `input_name` only labels the error.
pub fn broadcast<T: Clone>(
    input: InputValue<T>,
    len: usize,
    policy: BroadcastPolicy,
    input_name: &'static str,
) -> Result<Vec<T>> {
    let shape_error = |secondary_len| FamilyError::InputShape {
        input: input_name,
        primary_len: len,
        secondary_len,
    };

    let mut items = match input {
        InputValue::Scalar(value) => return Ok(vec![value; len]),
        InputValue::Sequence(items) => items,
    };

    if items.len() > len {
        if policy == BroadcastPolicy::Reject {
            return Err(shape_error(items.len()));
        }
        items.truncate(len);
        return Ok(items);
    }

    if items.len() < len {
        let Some(last) = items.last().cloned() else {
            return Err(shape_error(0));
        };
        items.resize(len, last);
    }
    Ok(items)
}
