//! JSON snapshots
//!
//! Every engine serializes through the coordinate wire structs:
//! `{"Rows", "Cols", "RowIndices", "ColIndices"}` for matrices and
//! `{"Length", "Indices"}` for vectors. Decoding validates the payload, so
//! an unsorted or out-of-range snapshot is rejected instead of producing a
//! matrix that breaks the engine invariants.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::error::Category;

use bsmat_core::{BsmatError, Engine, MatrixWire, SparseMatrix, SparseVector, VectorWire};

use crate::compact::{CompactMatrix, CompactVector};
use crate::dynamic::{AnyMatrix, AnyVector};
use crate::map::{MapMatrix, MapVector};
use crate::windowed::{WindowedMatrix, WindowedVector};

macro_rules! serialize_via_wire {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.to_wire().serialize(serializer)
            }
        }
    };
}

macro_rules! deserialize_via_wire {
    ($ty:ty, $wire:ty) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let wire = <$wire>::deserialize(deserializer)?;
                <$ty>::from_wire(wire).map_err(serde::de::Error::custom)
            }
        }
    };
}

serialize_via_wire!(CompactMatrix);
serialize_via_wire!(MapMatrix);
serialize_via_wire!(WindowedMatrix);
serialize_via_wire!(AnyMatrix);
serialize_via_wire!(CompactVector);
serialize_via_wire!(MapVector);
serialize_via_wire!(WindowedVector);
serialize_via_wire!(AnyVector);

deserialize_via_wire!(CompactMatrix, MatrixWire);
deserialize_via_wire!(MapMatrix, MatrixWire);
deserialize_via_wire!(WindowedMatrix, MatrixWire);
deserialize_via_wire!(CompactVector, VectorWire);
deserialize_via_wire!(MapVector, VectorWire);
deserialize_via_wire!(WindowedVector, VectorWire);

fn decode_error(err: serde_json::Error) -> BsmatError {
    match err.classify() {
        Category::Data => BsmatError::Serialization("JSON does not match the wire format"),
        Category::Io | Category::Syntax | Category::Eof => {
            BsmatError::Serialization("malformed JSON")
        }
    }
}

/// Encode any engine value as a JSON snapshot
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> bsmat_core::Result<String> {
    let json = serde_json::to_string(value)
        .map_err(|_| BsmatError::Serialization("failed to encode JSON"))?;
    log::debug!("encoded JSON snapshot of {} bytes", json.len());
    Ok(json)
}

/// Decode a matrix snapshot into the given engine
pub fn matrix_from_json(bytes: &[u8], engine: Engine) -> bsmat_core::Result<AnyMatrix> {
    let wire: MatrixWire = serde_json::from_slice(bytes).map_err(decode_error)?;
    log::debug!(
        "decoding {}x{} matrix snapshot with {} set bits into {engine} engine",
        wire.rows,
        wire.cols,
        wire.nnz()
    );
    AnyMatrix::from_wire(wire, engine)
}

/// Decode a vector snapshot into the given engine
pub fn vector_from_json(bytes: &[u8], engine: Engine) -> bsmat_core::Result<AnyVector> {
    let wire: VectorWire = serde_json::from_slice(bytes).map_err(decode_error)?;
    log::debug!(
        "decoding vector snapshot of length {} with {} set bits into {engine} engine",
        wire.length,
        wire.indices.len()
    );
    AnyVector::from_wire(wire, engine)
}

/// Encode the logical bits of any matrix, whatever its engine
pub fn matrix_to_json(m: &dyn SparseMatrix) -> bsmat_core::Result<String> {
    to_json(&CompactMatrix::copy_from(m))
}

/// Encode the logical bits of any vector, whatever its engine
pub fn vector_to_json(v: &dyn SparseVector) -> bsmat_core::Result<String> {
    to_json(&CompactVector::copy_from(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsmat_core::MatrixOperations;

    #[test]
    fn test_matrix_field_names() {
        let m = CompactMatrix::from_values(2, 2, &[0, 1, 1, 0]).unwrap();
        assert_eq!(
            to_json(&m).unwrap(),
            r#"{"Rows":2,"Cols":2,"RowIndices":[0,1],"ColIndices":[1,0]}"#
        );
    }

    #[test]
    fn test_vector_field_names() {
        let v = MapVector::from_values(4, &[0, 1, 0, 1]).unwrap();
        assert_eq!(to_json(&v).unwrap(), r#"{"Length":4,"Indices":[1,3]}"#);
    }

    #[test]
    fn test_window_serializes_its_view() {
        let m = WindowedMatrix::identity(4);
        let view = m.slice(1, 0, 2, 3).unwrap().t();
        assert_eq!(
            to_json(&view).unwrap(),
            r#"{"Rows":3,"Cols":2,"RowIndices":[1,2],"ColIndices":[0,1]}"#
        );
    }

    #[test]
    fn test_zero_matrix_round_trip() {
        for engine in Engine::ALL {
            let json = matrix_to_json(&MapMatrix::new(3, 5)).unwrap();
            let back = matrix_from_json(json.as_bytes(), engine).unwrap();
            assert_eq!(back.dims(), (3, 5));
            assert!(back.is_zero());
        }
    }

    #[test]
    fn test_corrupted_payload_rejected() {
        let unsorted = br#"{"Rows":2,"Cols":2,"RowIndices":[1,0],"ColIndices":[0,0]}"#;
        assert!(matches!(
            matrix_from_json(unsorted, Engine::Compact),
            Err(BsmatError::CorruptedData(_))
        ));
        let out_of_range = br#"{"Length":2,"Indices":[2]}"#;
        assert!(matches!(
            vector_from_json(out_of_range, Engine::Map),
            Err(BsmatError::CorruptedData(_))
        ));
        assert!(matches!(
            vector_from_json(b"{", Engine::Map),
            Err(BsmatError::Serialization(_))
        ));
        assert!(matches!(
            vector_from_json(br#"{"Length":-1,"Indices":[]}"#, Engine::Map),
            Err(BsmatError::Serialization(_))
        ));
    }

    #[test]
    fn test_serde_derive_path_validates() {
        let bad = r#"{"Rows":1,"Cols":1,"RowIndices":[0],"ColIndices":[3]}"#;
        assert!(serde_json::from_str::<MapMatrix>(bad).is_err());
        let good = r#"{"Rows":1,"Cols":4,"RowIndices":[0],"ColIndices":[3]}"#;
        let m: WindowedMatrix = serde_json::from_str(good).unwrap();
        assert_eq!(m.at(0, 3), Ok(1));
    }
}
