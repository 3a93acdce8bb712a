#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Validating,
    Solving,
    WritingTable,
    Completed,
}

impl RunStage {
    pub fn label(&self) -> &'static str {
        match self {
            RunStage::Validating => "validating",
            RunStage::Solving => "solving",
            RunStage::WritingTable => "writing table",
            RunStage::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SweepProgress {
    /// 1-based index of the finished step.
    pub step: usize,
    pub total_steps: usize,
    pub iterations: usize,
    pub fraction_complete: f64,
    pub image_written: bool,
}

#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
    pub sweep: Option<SweepProgress>,
}
