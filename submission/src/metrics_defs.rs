//! Metric definitions emitted by the submission pipeline.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Histogram,
}

#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub description: &'static str,
}

pub const SUBMISSION_OUTCOME: MetricDef = MetricDef {
    name: "submission.outcome",
    metric_type: MetricType::Counter,
    description: "Submissions processed. Tagged with result.",
};

pub const REMOTE_CALL_DURATION: MetricDef = MetricDef {
    name: "submission.remote_call.duration",
    metric_type: MetricType::Histogram,
    description: "Review create call duration in seconds",
};

pub const ALL_METRICS: &[MetricDef] = &[SUBMISSION_OUTCOME, REMOTE_CALL_DURATION];
