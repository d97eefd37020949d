/// Numeric conversion helpers.
///
/// Provides the exact float-to-integer conversion used when an assignment
/// result collapses to an integer binding. The conversion succeeds only when
/// no precision or range is lost.
pub mod num;
