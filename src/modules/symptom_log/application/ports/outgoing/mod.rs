pub mod symptom_log_repository;

pub use symptom_log_repository::{
    CreateSymptomLogData, MedicationEntry, SymptomLogRepository, SymptomLogRepositoryError,
    SymptomLogResult, UpdateSymptomLogData,
};
