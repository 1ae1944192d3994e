/// ProgressReporter port for reporting progress during an export
///
/// Progress goes to the operator (e.g. stderr) and never mixes with the
/// diagnostic payloads handled by `OutputPresenter`.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports how many issues have been fetched so far
    ///
    /// # Arguments
    /// * `current` - Issues fetched so far
    /// * `total` - Total reported by the server
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports completion of an export step
    fn report_completion(&self, message: &str);
}
