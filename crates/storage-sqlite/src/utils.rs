//! Helpers shared by the SQLite repositories.

/// Largest list bound into a single `IN (...)` or multi-row `VALUES` statement.
///
/// SQLite caps the number of bound variables per statement, so batched
/// queries walk their input in slices of this size.
pub const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

/// Splits `items` into slices no longer than [`SQLITE_MAX_PARAMS_CHUNK`].
///
/// ```ignore
/// let mut all_expenses = Vec::new();
/// for chunk in chunk_for_sqlite(&budget_ids) {
///     all_expenses.extend(load_expenses_in(chunk)?);
/// }
/// ```
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_PARAMS_CHUNK)
}
