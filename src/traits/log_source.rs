use crate::errors::LogvizResult;
use crate::structs::raw_log_record::RawLogRecord;

/// Where log records come from. Implementations do no severity checks.
pub trait LogSource {
    fn read_records(&self) -> LogvizResult<Vec<RawLogRecord>>;

    /// Human-readable origin, used in progress and error messages.
    fn describe(&self) -> String;
}
