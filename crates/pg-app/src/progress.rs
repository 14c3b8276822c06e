/// Stage of a polar batch.
#[derive(Debug, Clone)]
pub enum BatchStage {
    CheckingAirfoil,
    GeneratingPolar {
        index: usize,
        total: usize,
        reynolds: f64,
    },
    CleaningUp,
    Completed,
}

impl BatchStage {
    pub fn label(&self) -> String {
        match self {
            Self::CheckingAirfoil => "checking airfoil".to_string(),
            Self::GeneratingPolar {
                index,
                total,
                reynolds,
            } => format!("{}/{} - polar at Re={:e}", index, total, reynolds),
            Self::CleaningUp => "cleaning up artifacts".to_string(),
            Self::Completed => "completed".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchProgressEvent {
    pub stage: BatchStage,
    pub elapsed_wall_s: f64,
}
