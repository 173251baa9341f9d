use ndarray::Array2;

/// Positional access to a result table.
///
/// External consumers (CSV export, plotting) index columns by fixed offset,
/// so implementors must keep column order and row count stable.
pub trait TableData {
    fn headers(&self) -> &'static [&'static str];
    fn num_rows(&self) -> usize;
    fn to_array(&self) -> Array2<f64>;
}
