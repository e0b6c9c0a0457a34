use super::detail::DetailRef;

/// Static description of an admin dataset.
pub trait AdminAggregate {
    /// Index in the system, e.g. "a002"
    fn aggregate_index() -> &'static str;

    /// API collection, e.g. "jobs-queue"
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Page title
    fn list_name() -> &'static str;

    /// Query parameter of the detail placeholder, e.g. "job"
    fn detail_param() -> &'static str;

    /// Value the detail placeholder is keyed by
    fn detail_value(&self) -> &str;

    fn detail_ref(&self) -> DetailRef {
        DetailRef::new(Self::detail_param(), self.detail_value())
    }

    /// Tab key, e.g. "a002_jobs_queue"
    fn full_name() -> String {
        format!(
            "{}_{}",
            Self::aggregate_index(),
            Self::collection_name().replace('-', "_")
        )
    }
}
