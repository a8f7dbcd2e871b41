use placegraph_core::Error;
use pyo3::PyErr;
use pyo3::exceptions::{PyKeyError, PyOSError, PyRuntimeError, PyValueError};

/// Maps an engine error onto the closest Python exception, keeping its message
pub(crate) fn to_py_err(err: Error) -> PyErr {
    let message = err.to_string();
    match err {
        Error::NodeNotFound(_) | Error::EdgeNotFound(..) | Error::MissingCoordinate(_) => {
            PyErr::new::<PyKeyError, _>(message)
        }
        Error::NoPathExists(..)
        | Error::MalformedEdgeList(_)
        | Error::InvalidWeight { .. }
        | Error::InvalidData(_) => PyErr::new::<PyValueError, _>(message),
        Error::IoError(_) => PyErr::new::<PyOSError, _>(message),
        Error::GeoJson(_) => PyErr::new::<PyRuntimeError, _>(message),
    }
}
