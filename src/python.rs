//! Python bindings for datestrings via PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{
    format_day_string, format_month_string, format_timestamp_string, parse_date_string,
    Interpretation as RustInterpretation,
};

/// One reading of a date string (Python class)
#[pyclass(name = "Interpretation")]
#[derive(Clone)]
pub struct PyInterpretation {
    /// ISO 8601 date, e.g. "2023-01-05"
    #[pyo3(get)]
    pub date: String,
    /// Format string that renders the date back to the input
    #[pyo3(get)]
    pub format: String,
    /// Milliseconds since the Unix epoch at UTC midnight
    #[pyo3(get)]
    pub timestamp: i64,
    /// Days since 1970-01-01, or None for year-month readings
    #[pyo3(get)]
    pub days: Option<i64>,
    /// Months since 1970-01, or None for readings with a day
    #[pyo3(get)]
    pub months: Option<i64>,
}

#[pymethods]
impl PyInterpretation {
    fn __repr__(&self) -> String {
        format!(
            "Interpretation(date='{}', format='{}')",
            self.date, self.format
        )
    }

    fn __str__(&self) -> String {
        self.format.clone()
    }
}

impl From<RustInterpretation> for PyInterpretation {
    fn from(reading: RustInterpretation) -> Self {
        PyInterpretation {
            date: reading.date.to_string(),
            timestamp: reading.timestamp_millis(),
            days: reading.days(),
            months: reading.months(),
            format: reading.format,
        }
    }
}

fn to_py_err(e: crate::DateStringError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Every valid reading of a date string.
///
/// Args:
///     text: The date string, e.g. "01/05/2023"
///
/// Returns:
///     List of Interpretation objects, most conventional reading first
///
/// Raises:
///     ValueError: If no reading is valid
///
/// Example:
///     >>> import datestrings
///     >>> [r.format for r in datestrings.parse_date_string("2023-01-05")]
///     ['Y-M2-D2', 'Y-D2-M2']
#[pyfunction]
#[pyo3(name = "parse_date_string")]
fn parse(text: &str) -> PyResult<Vec<PyInterpretation>> {
    parse_date_string(text)
        .map(|readings| readings.into_iter().map(PyInterpretation::from).collect::<Vec<_>>())
        .map_err(to_py_err)
}

/// Parse many date strings at once, in parallel.
///
/// Raises:
///     ValueError: Naming the first entry with no valid reading
///
/// Example:
///     >>> import datestrings
///     >>> [len(r) for r in datestrings.parse_batch(["31/1/2023", "01/05/2023"])]
///     [1, 2]
///     >>> datestrings.parse_batch(["31/1/2023", "nope"])
///     Traceback (most recent call last):
///     ...
///     ValueError: entry 1 ("nope"): no valid date interpretation for "nope"
#[pyfunction]
fn parse_batch(py: Python<'_>, texts: Vec<String>) -> PyResult<Vec<Vec<PyInterpretation>>> {
    let readings = py
        .allow_threads(|| crate::parse_batch(&texts))
        .map_err(to_py_err)?;
    Ok(readings
        .into_iter()
        .map(|entry| entry.into_iter().map(PyInterpretation::from).collect())
        .collect())
}

/// Render a millisecond Unix timestamp (UTC) through a format string.
///
/// Example:
///     >>> import datestrings
///     >>> datestrings.format_date_string(0, "Mf D1, Y")
///     'January 1, 1970'
#[pyfunction]
#[pyo3(name = "format_date_string")]
fn format_date(timestamp: i64, format: &str) -> PyResult<String> {
    format_timestamp_string(timestamp, format).map_err(to_py_err)
}

/// Render a day count (days since 1970-01-01); the format needs a day tag.
#[pyfunction]
#[pyo3(name = "format_day_string")]
fn format_day(days: i64, format: &str) -> PyResult<String> {
    format_day_string(days, format).map_err(to_py_err)
}

/// Render a month count (months since 1970-01); the format must not have a day tag.
#[pyfunction]
#[pyo3(name = "format_month_string")]
fn format_month(months: i64, format: &str) -> PyResult<String> {
    format_month_string(months, format).map_err(to_py_err)
}

/// Read ambiguous date strings every way they can be read.
///
/// Example:
///     >>> import datestrings
///     >>> readings = datestrings.parse_date_string("01/05/2023")
///     >>> [(r.format, r.date) for r in readings]
///     [('D2/M2/Y', '2023-05-01'), ('M2/D2/Y', '2023-01-05')]
#[pymodule]
fn datestrings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyInterpretation>()?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(parse_batch, m)?)?;
    m.add_function(wrap_pyfunction!(format_date, m)?)?;
    m.add_function(wrap_pyfunction!(format_day, m)?)?;
    m.add_function(wrap_pyfunction!(format_month, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
