use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::define_stub_info_gatherer;

use geodesy::great_circle_distance;
use model::{PyPlacesGraph, py_load_places_graph};

mod error;
pub mod geodesy;
pub mod model;

/// A Python module implemented in Rust.
#[pymodule]
fn placegraph(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyPlacesGraph>()?;
    m.add_function(wrap_pyfunction!(py_load_places_graph, m)?)?;
    m.add_function(wrap_pyfunction!(great_circle_distance, m)?)?;
    Ok(())
}

#[cfg(feature = "stubgen")]
define_stub_info_gatherer!(stub_info);
