//! Named stages of the placement pipeline.
//!
//! The engine drives these stages explicitly in a fixed order instead of
//! dispatching framework-hosted callbacks; the stage name shows up as a
//! structured field on every log line of the run.

/// Stages of one `build_cursor` invocation, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    FetchCatalog,
    ResolvePreferences,
    FetchMonitoring,
    Rank,
    Select,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 5] = [
        PipelineStage::FetchCatalog,
        PipelineStage::ResolvePreferences,
        PipelineStage::FetchMonitoring,
        PipelineStage::Rank,
        PipelineStage::Select,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchCatalog => "fetch_catalog",
            Self::ResolvePreferences => "resolve_preferences",
            Self::FetchMonitoring => "fetch_monitoring",
            Self::Rank => "rank",
            Self::Select => "select",
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_in_execution_order() {
        assert_eq!(PipelineStage::ALL[0], PipelineStage::FetchCatalog);
        assert_eq!(PipelineStage::ALL[4], PipelineStage::Select);
    }

    #[test]
    fn stage_names_are_stable() {
        let names: Vec<_> = PipelineStage::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "fetch_catalog",
                "resolve_preferences",
                "fetch_monitoring",
                "rank",
                "select"
            ]
        );
    }
}
