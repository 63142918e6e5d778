use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::utils::numbers::{wrap_i32, wrap_u32};
use crate::{InvalidVarint, LEB128_MAX_SIZE};

create_exception!(leb32, PyInvalidVarint, PyValueError);

impl From<InvalidVarint> for PyErr {
    fn from(err: InvalidVarint) -> Self {
        PyInvalidVarint::new_err(err.reason)
    }
}

/// Python ints are reduced to 32 bits before they reach the codec, so
/// `encode_uleb128(-1)` is `encode_uleb128(0xFFFFFFFF)`.
#[pyfunction]
#[pyo3(signature = (value, p1 = false))]
fn encode_uleb128<'py>(py: Python<'py>, value: i64, p1: bool) -> Bound<'py, PyBytes> {
    let bytes = crate::encode_unsigned(wrap_u32(value as u64), p1);
    PyBytes::new(py, &bytes)
}

#[pyfunction]
#[pyo3(signature = (data, p1 = false))]
fn decode_uleb128(data: &[u8], p1: bool) -> PyResult<(u32, usize)> {
    let var = crate::decode_unsigned(data, p1)?;
    Ok((var.value(), var.size()))
}

#[pyfunction]
fn encode_sleb128<'py>(py: Python<'py>, value: i64) -> Bound<'py, PyBytes> {
    let bytes = crate::encode_signed(wrap_i32(value));
    PyBytes::new(py, &bytes)
}

#[pyfunction]
fn decode_sleb128(data: &[u8]) -> PyResult<(i32, usize)> {
    let var = crate::decode_signed(data)?;
    Ok((var.value(), var.size()))
}

#[pymodule]
fn leb32(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("InvalidVarint", m.py().get_type::<PyInvalidVarint>())?;
    m.add("LEB128_MAX_SIZE", LEB128_MAX_SIZE)?;
    m.add_function(wrap_pyfunction!(encode_uleb128, m)?)?;
    m.add_function(wrap_pyfunction!(decode_uleb128, m)?)?;
    m.add_function(wrap_pyfunction!(encode_sleb128, m)?)?;
    m.add_function(wrap_pyfunction!(decode_sleb128, m)?)?;
    Ok(())
}
