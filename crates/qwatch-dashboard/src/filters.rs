//! Filter state holder.
//!
//! Owns the three applied criteria plus the search box buffer. Typing only
//! touches the buffer; the criterion changes on explicit submission. Status
//! and backend apply immediately.

use qwatch_types::JobFilter;

/// Applied filter criteria plus unsubmitted search input.
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    applied: JobFilter,
    search_input: String,
}

impl FilterForm {
    /// Create an unconstrained form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The criteria the filtered view is derived from.
    pub fn applied(&self) -> &JobFilter {
        &self.applied
    }

    /// The buffered search text.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Buffer search text without applying it.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Apply the buffered search text as the search criterion.
    pub fn submit_search(&mut self) {
        self.applied.search = self.search_input.clone();
    }

    /// Set the search criterion directly, keeping the buffer in sync.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.applied.search = search.into();
        self.search_input = self.applied.search.clone();
    }

    /// Set the status criterion. Applies immediately; any string accepted.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.applied.status = status.into();
    }

    /// Set the backend criterion. Applies immediately; any string accepted.
    pub fn set_backend(&mut self, backend: impl Into<String>) {
        self.applied.backend = backend.into();
    }

    /// Reset all three criteria and the search buffer at once.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_unconstrained() {
        let form = FilterForm::new();
        assert!(form.applied().is_empty());
        assert_eq!(form.search_input(), "");
    }

    #[test]
    fn test_search_buffer_not_applied_until_submit() {
        let mut form = FilterForm::new();
        form.set_search_input("job_ab");
        assert_eq!(form.search_input(), "job_ab");
        assert_eq!(form.applied().search, "");

        form.submit_search();
        assert_eq!(form.applied().search, "job_ab");
    }

    #[test]
    fn test_status_and_backend_apply_immediately() {
        let mut form = FilterForm::new();
        form.set_status("QUEUED");
        form.set_backend("ibm_kyoto");
        assert_eq!(form.applied().status, "QUEUED");
        assert_eq!(form.applied().backend, "ibm_kyoto");
    }

    #[test]
    fn test_any_string_accepted() {
        let mut form = FilterForm::new();
        form.set_status("not a real status");
        assert_eq!(form.applied().status, "not a real status");
    }

    #[test]
    fn test_clear_all_resets_buffer_too() {
        let mut form = FilterForm::new();
        form.set_search_input("pending text");
        form.submit_search();
        form.set_status("DONE");
        form.set_backend("ibm_fez");

        form.clear_all();
        assert!(form.applied().is_empty());
        assert_eq!(form.search_input(), "");
    }
}
