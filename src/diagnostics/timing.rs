use serde::{Deserialize, Serialize};

/// Wall-clock time spent in one pipeline stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Per-stage timings of a detector run, in execution order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_keep_push_order() {
        let mut timings = TimingBreakdown::with_total(3.5);
        timings.push("flood_fill", 1.0);
        timings.push("smoothing", 2.5);
        let labels: Vec<&str> = timings.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["flood_fill", "smoothing"]);
        assert_eq!(timings.stages[1].elapsed_ms, 2.5);
        assert_eq!(timings.total_ms, 3.5);
    }

    #[test]
    fn serializes_camel_case() {
        let mut timings = TimingBreakdown::with_total(1.0);
        timings.push("gradient", 0.5);
        let json = serde_json::to_value(&timings).unwrap();
        assert_eq!(json["totalMs"], 1.0);
        assert_eq!(json["stages"][0]["elapsedMs"], 0.5);
    }
}
