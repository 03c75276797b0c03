use crate::application::dto::{FilterRequest, FilterSummary};
use crate::filtering::services::EnvironmentFilter;
use crate::ports::outbound::{GroupRowSink, GroupRowSource, ProgressReporter};
use crate::shared::Result;

/// FilterGroupsUseCase - Core use case for the row-filter pipeline
///
/// Reads the exported user groups, drops every row whose name carries an
/// environment marker, and writes the survivors. Infrastructure comes in
/// through generic dependency injection.
///
/// # Type Parameters
/// * `S` - GroupRowSource implementation
/// * `W` - GroupRowSink implementation
/// * `P` - ProgressReporter implementation
pub struct FilterGroupsUseCase<S, W, P> {
    source: S,
    sink: W,
    filter: EnvironmentFilter,
    progress_reporter: P,
}

impl<S, W, P> FilterGroupsUseCase<S, W, P>
where
    S: GroupRowSource,
    W: GroupRowSink,
    P: ProgressReporter,
{
    /// Creates a new FilterGroupsUseCase with injected dependencies
    pub fn new(source: S, sink: W, filter: EnvironmentFilter, progress_reporter: P) -> Self {
        Self {
            source,
            sink,
            filter,
            progress_reporter,
        }
    }

    /// Executes the filter pipeline
    ///
    /// # Returns
    /// A FilterSummary with the row counts of the run. `written == 0`
    /// means no production entries survived and the output file was not
    /// touched.
    pub fn execute(&self, request: FilterRequest) -> Result<FilterSummary> {
        self.progress_reporter.report(&format!(
            "📖 Reading user groups from: {}",
            request.input_path.display()
        ));

        let rows = self.source.read_rows(&request.input_path)?;
        let total = rows.len();

        let (kept, excluded) = self.filter.partition(rows);
        for row in &excluded {
            self.progress_reporter
                .report(&format!("Excluded: {}", EnvironmentFilter::strip_bom(&row.name)));
        }

        if kept.is_empty() {
            self.progress_reporter
                .report_error("No production entries found to save.");
            return Ok(FilterSummary {
                total,
                excluded: excluded.len(),
                written: 0,
            });
        }

        self.sink.write_rows(&request.output_path, &kept)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Production entries saved: {} ({} excluded of {} total)",
            kept.len(),
            excluded.len(),
            total
        ));

        Ok(FilterSummary {
            total,
            excluded: excluded.len(),
            written: kept.len(),
        })
    }
}
