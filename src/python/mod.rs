//! Python bindings for the germination and dispersal models.
//!
//! Parameters are passed as plain dicts and converted with `pythonize`;
//! omitted keys take their default values. Hourly series are 1-D float64
//! numpy arrays.

use numpy::{IntoPyArray, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use seedcast_components::config::SimulationConfig;
use seedcast_components::dispersal::DispersalModel;
use seedcast_components::germination::GerminationModel;
use seedcast_components::parameters::{DispersalParameters, GerminationParameters};
use seedcast_core::errors::SeedcastError;
use serde::de::DeserializeOwned;

fn to_py_err(err: SeedcastError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parameters_from_py<T: DeserializeOwned + Default>(
    parameters: Option<Bound<'_, PyAny>>,
) -> PyResult<T> {
    match parameters {
        // todo: accept an attrs/dataclass instance as well as a dict
        Some(parameters) => pythonize::depythonize_bound::<T>(parameters)
            .map_err(|e| PyValueError::new_err(format!("{}", e))),
        None => Ok(T::default()),
    }
}

/// Hydrothermal-time germination model.
///
/// Example:
///     model = GerminationModel({"threshold": 800.0, "n_seed_classes": 50})
///     result = model.run(temperature, moisture, start=1)
///     result["germination_days"], result["fraction_of_seeds"]
#[pyclass]
#[pyo3(name = "GerminationModel")]
#[derive(Debug, Clone)]
pub struct PyGerminationModel(pub GerminationModel);

#[pymethods]
impl PyGerminationModel {
    #[new]
    #[pyo3(signature = (parameters=None))]
    fn new(parameters: Option<Bound<'_, PyAny>>) -> PyResult<Self> {
        let parameters: GerminationParameters = parameters_from_py(parameters)?;
        parameters.validate().map_err(to_py_err)?;
        Ok(Self(GerminationModel::from_parameters(parameters)))
    }

    /// Model parameters as a dict
    fn parameters(&self, py: Python<'_>) -> PyResult<PyObject> {
        let parameters = pythonize::pythonize(py, self.0.parameters())
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        Ok(parameters.into_py(py))
    }

    /// Run the model from the 1-based hour `start`.
    ///
    /// Returns a dict with `germination_days`, `fraction_of_seeds`,
    /// `ungerminated_fraction`, `class_germination_days`, `hours_simulated`
    /// and, when recording is enabled, `htu_history`/`psi_history` arrays of
    /// shape (hours, classes).
    #[pyo3(signature = (temperature, moisture, start=1))]
    fn run<'py>(
        &self,
        py: Python<'py>,
        temperature: PyReadonlyArray1<'py, f64>,
        moisture: PyReadonlyArray1<'py, f64>,
        start: usize,
    ) -> PyResult<Bound<'py, PyDict>> {
        let outcome = self
            .0
            .run(temperature.as_slice()?, moisture.as_slice()?, start)
            .map_err(to_py_err)?;

        let result = PyDict::new_bound(py);
        result.set_item(
            "germination_days",
            outcome.germination_days.into_pyarray_bound(py),
        )?;
        result.set_item(
            "fraction_of_seeds",
            outcome.fraction_of_seeds.into_pyarray_bound(py),
        )?;
        result.set_item("ungerminated_fraction", outcome.ungerminated_fraction)?;
        result.set_item(
            "class_germination_days",
            outcome.class_germination_days.into_pyarray_bound(py),
        )?;
        result.set_item("hours_simulated", outcome.hours_simulated)?;
        result.set_item(
            "htu_history",
            outcome
                .htu_history
                .map(|history| history.to_array2().into_pyarray_bound(py)),
        )?;
        result.set_item(
            "psi_history",
            outcome
                .psi_history
                .map(|history| history.to_array2().into_pyarray_bound(py)),
        )?;
        Ok(result)
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }
}

/// Thermal-time dispersal model.
///
/// Example:
///     model = DispersalModel({"threshold": 70.0, "t_b": 3.0})
///     result = model.run(temperature, start=1)
///     result["dispersal_time"]  # -1 if the threshold was never reached
#[pyclass]
#[pyo3(name = "DispersalModel")]
#[derive(Debug, Clone)]
pub struct PyDispersalModel(pub DispersalModel);

#[pymethods]
impl PyDispersalModel {
    #[new]
    #[pyo3(signature = (parameters=None))]
    fn new(parameters: Option<Bound<'_, PyAny>>) -> PyResult<Self> {
        let parameters: DispersalParameters = parameters_from_py(parameters)?;
        parameters.validate().map_err(to_py_err)?;
        Ok(Self(DispersalModel::from_parameters(parameters)))
    }

    /// Model parameters as a dict
    fn parameters(&self, py: Python<'_>) -> PyResult<PyObject> {
        let parameters = pythonize::pythonize(py, self.0.parameters())
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        Ok(parameters.into_py(py))
    }

    /// Accumulate thermal units from the 1-based hour `start`.
    ///
    /// Returns a dict with `dispersal_time` (-1 when never reached),
    /// `total_thermal_units` and, when recording is enabled, `progress`.
    #[pyo3(signature = (temperature, start=1))]
    fn run<'py>(
        &self,
        py: Python<'py>,
        temperature: PyReadonlyArray1<'py, f64>,
        start: usize,
    ) -> PyResult<Bound<'py, PyDict>> {
        let outcome = self
            .0
            .run(temperature.as_slice()?, start)
            .map_err(to_py_err)?;

        let result = PyDict::new_bound(py);
        result.set_item("dispersal_time", outcome.dispersal_time_or_sentinel())?;
        result.set_item("total_thermal_units", outcome.total_thermal_units)?;
        result.set_item(
            "progress",
            outcome
                .progress
                .map(|progress| progress.into_pyarray_bound(py)),
        )?;
        Ok(result)
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }
}

/// Build both models from a TOML document with `[germination]` and `[dispersal]` tables.
#[pyfunction]
fn models_from_toml(source: &str) -> PyResult<(PyGerminationModel, PyDispersalModel)> {
    let config = SimulationConfig::from_toml_str(source).map_err(to_py_err)?;
    Ok((
        PyGerminationModel(config.germination_model()),
        PyDispersalModel(config.dispersal_model()),
    ))
}

#[pymodule]
#[pyo3(name = "_lib")]
fn seedcast(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_class::<PyGerminationModel>()?;
    m.add_class::<PyDispersalModel>()?;
    m.add_function(wrap_pyfunction!(models_from_toml, m)?)?;
    Ok(())
}
