//! Job factory seam.
//!
//! The reader never knows what a job is; it only hands a `JobSpec` to a
//! factory. Any `Fn(JobSpec) -> Result<J, E>` closure is a factory.

use crate::parser::schema::JobSpec;
use crate::utils::error::FactoryFailure;
use std::convert::Infallible;

/// Materialises domain jobs from job arguments
pub trait JobFactory {
    /// Job type produced
    type Job;

    /// Construct one job
    ///
    /// # Errors
    /// Any failure of the underlying constructor, surfaced to the caller
    /// of the reader with file and TraceIndex context
    fn create(&self, spec: JobSpec) -> Result<Self::Job, FactoryFailure>;
}

impl<F, J, E> JobFactory for F
where
    F: Fn(JobSpec) -> Result<J, E>,
    E: Into<FactoryFailure>,
{
    type Job = J;

    fn create(&self, spec: JobSpec) -> Result<J, FactoryFailure> {
        self(spec).map_err(Into::into)
    }
}

/// Factory that hands back the job arguments themselves
///
/// **Public** - used by the CLI and by tests that inspect raw job shapes
pub fn spec_factory() -> impl JobFactory<Job = JobSpec> {
    |spec: JobSpec| Ok::<_, Infallible>(spec)
}
