use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::symptom_log::application::ports::outgoing::SymptomLogResult;

/// Logs with pain above this level count as a pain day (strictly greater).
const PAIN_DAY_THRESHOLD: i32 = 5;

/// Logs with fatigue above this level count as a high-fatigue day (strictly
/// greater).
const HIGH_FATIGUE_THRESHOLD: i32 = 7;

const TOP_SYMPTOM_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPeriod {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelAverages {
    pub pain: f64,
    pub fatigue: f64,
    pub energy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomFrequency {
    pub symptom: String,
    pub count: u32,
}

/// Rolling-window roll-up of a user's symptom logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomSummary {
    pub period: SummaryPeriod,
    pub total_logs: usize,
    pub averages: LevelAverages,
    pub pain_days: usize,
    pub high_fatigue_days: usize,
    pub medication_doses: usize,
    pub top_symptoms: Vec<SymptomFrequency>,
}

/// One decimal place, half away from zero. Levels are never negative, so this
/// matches the usual "round to nearest tenth".
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl SymptomSummary {
    /// Reduce a window of logs into the dashboard summary. Pure: the caller
    /// fetches the logs (newest first) and this function only folds them.
    ///
    /// An absent level contributes 0 to its sum but the log still counts in
    /// the denominator; the averages are sums over `total_logs`, not over the
    /// logs where the field is present.
    pub fn from_logs(period: SummaryPeriod, logs: &[SymptomLogResult]) -> Self {
        let total_logs = logs.len();

        let pain_sum: i64 = logs.iter().map(|l| l.pain_level.unwrap_or(0) as i64).sum();
        let fatigue_sum: i64 = logs
            .iter()
            .map(|l| l.fatigue_level.unwrap_or(0) as i64)
            .sum();
        let energy_sum: i64 = logs
            .iter()
            .map(|l| l.energy_level.unwrap_or(0) as i64)
            .sum();

        let averages = if total_logs == 0 {
            LevelAverages {
                pain: 0.0,
                fatigue: 0.0,
                energy: 0.0,
            }
        } else {
            let n = total_logs as f64;
            LevelAverages {
                pain: round1(pain_sum as f64 / n),
                fatigue: round1(fatigue_sum as f64 / n),
                energy: round1(energy_sum as f64 / n),
            }
        };

        let pain_days = logs
            .iter()
            .filter(|l| l.pain_level.unwrap_or(0) > PAIN_DAY_THRESHOLD)
            .count();

        let high_fatigue_days = logs
            .iter()
            .filter(|l| l.fatigue_level.unwrap_or(0) > HIGH_FATIGUE_THRESHOLD)
            .count();

        let medication_doses = logs
            .iter()
            .map(|l| l.medications.as_ref().map_or(0, |m| m.len()))
            .sum();

        Self {
            period,
            total_logs,
            averages,
            pain_days,
            high_fatigue_days,
            medication_doses,
            top_symptoms: top_symptoms(logs),
        }
    }
}

/// Frequency table over `additional_symptoms`, top 3 by descending count.
/// A symptom listed twice in one log counts twice. Ties keep the order in
/// which symptoms were first encountered while iterating the logs: the sort
/// is stable, so equal counts never reorder.
fn top_symptoms(logs: &[SymptomLogResult]) -> Vec<SymptomFrequency> {
    let mut frequency: Vec<(String, u32)> = Vec::new();

    for log in logs {
        let Some(symptoms) = &log.additional_symptoms else {
            continue;
        };

        for symptom in symptoms {
            match frequency.iter_mut().find(|entry| entry.0 == *symptom) {
                Some(entry) => entry.1 += 1,
                None => frequency.push((symptom.clone(), 1)),
            }
        }
    }

    frequency.sort_by(|a, b| b.1.cmp(&a.1));

    frequency
        .into_iter()
        .take(TOP_SYMPTOM_COUNT)
        .map(|(symptom, count)| SymptomFrequency { symptom, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    use crate::modules::auth::application::domain::entities::UserId;
    use crate::modules::symptom_log::application::ports::outgoing::MedicationEntry;

    fn period() -> SummaryPeriod {
        let end_date = Utc::now();
        SummaryPeriod {
            start_date: end_date - Duration::days(30),
            end_date,
        }
    }

    fn log(pain: Option<i32>, fatigue: Option<i32>, energy: Option<i32>) -> SymptomLogResult {
        SymptomLogResult {
            id: Uuid::new_v4(),
            owner: UserId::from(Uuid::new_v4()),
            date: Utc::now(),
            pain_level: pain,
            fatigue_level: fatigue,
            energy_level: energy,
            mood: None,
            additional_symptoms: None,
            medications: None,
            notes: None,
            voice_note_url: None,
        }
    }

    fn log_with_symptoms(symptoms: &[&str]) -> SymptomLogResult {
        let mut l = log(None, None, None);
        l.additional_symptoms = Some(symptoms.iter().map(|s| s.to_string()).collect());
        l
    }

    fn medication(name: &str) -> MedicationEntry {
        MedicationEntry {
            name: name.to_string(),
            dosage: "1x".to_string(),
            time: "08:00".to_string(),
        }
    }

    #[test]
    fn empty_window_yields_zeroes() {
        let summary = SymptomSummary::from_logs(period(), &[]);

        assert_eq!(summary.total_logs, 0);
        assert_eq!(summary.averages.pain, 0.0);
        assert_eq!(summary.averages.fatigue, 0.0);
        assert_eq!(summary.averages.energy, 0.0);
        assert_eq!(summary.pain_days, 0);
        assert_eq!(summary.high_fatigue_days, 0);
        assert_eq!(summary.medication_doses, 0);
        assert!(summary.top_symptoms.is_empty());
    }

    #[test]
    fn average_pain_over_three_logs() {
        let logs = vec![
            log(Some(10), None, None),
            log(Some(0), None, None),
            log(Some(5), None, None),
        ];

        let summary = SymptomSummary::from_logs(period(), &logs);

        assert_eq!(summary.total_logs, 3);
        assert_eq!(summary.averages.pain, 5.0);
    }

    #[test]
    fn absent_level_counts_as_zero_in_the_denominator() {
        // Two logs, one with pain 10 and one with no pain recorded: the
        // average divides by 2, not by 1.
        let logs = vec![log(Some(10), None, None), log(None, None, None)];

        let summary = SymptomSummary::from_logs(period(), &logs);

        assert_eq!(summary.averages.pain, 5.0);
    }

    #[test]
    fn averages_round_to_one_decimal() {
        let logs = vec![
            log(Some(1), Some(2), Some(1)),
            log(Some(1), Some(2), Some(2)),
            log(Some(2), Some(2), Some(2)),
        ];

        let summary = SymptomSummary::from_logs(period(), &logs);

        // 4/3 = 1.333… → 1.3; 5/3 = 1.666… → 1.7
        assert_eq!(summary.averages.pain, 1.3);
        assert_eq!(summary.averages.fatigue, 2.0);
        assert_eq!(summary.averages.energy, 1.7);
    }

    #[test]
    fn pain_day_threshold_is_strict() {
        let logs = vec![
            log(Some(5), None, None),
            log(Some(6), None, None),
            log(None, None, None),
        ];

        let summary = SymptomSummary::from_logs(period(), &logs);

        assert_eq!(summary.pain_days, 1);
    }

    #[test]
    fn high_fatigue_threshold_is_strict() {
        let logs = vec![
            log(None, Some(7), None),
            log(None, Some(8), None),
            log(None, Some(10), None),
        ];

        let summary = SymptomSummary::from_logs(period(), &logs);

        assert_eq!(summary.high_fatigue_days, 2);
    }

    #[test]
    fn medication_doses_sum_list_lengths() {
        let mut with_two = log(None, None, None);
        with_two.medications = Some(vec![medication("Ibuprofen"), medication("Naproxen")]);

        let mut with_one = log(None, None, None);
        with_one.medications = Some(vec![medication("Ibuprofen")]);

        let without = log(None, None, None);

        let summary = SymptomSummary::from_logs(period(), &[with_two, with_one, without]);

        assert_eq!(summary.medication_doses, 3);
    }

    #[test]
    fn top_symptoms_ranked_with_first_encountered_tie_break() {
        // Frequencies: A:2, B:1, C:2. A and C tie; A was seen first.
        let logs = vec![
            log_with_symptoms(&["A", "B"]),
            log_with_symptoms(&["A"]),
            log_with_symptoms(&["C", "C"]),
        ];

        let summary = SymptomSummary::from_logs(period(), &logs);

        let ranked: Vec<(&str, u32)> = summary
            .top_symptoms
            .iter()
            .map(|f| (f.symptom.as_str(), f.count))
            .collect();

        assert_eq!(ranked, vec![("A", 2), ("C", 2), ("B", 1)]);
    }

    #[test]
    fn top_symptoms_capped_at_three() {
        let logs = vec![
            log_with_symptoms(&["headache", "headache", "headache"]),
            log_with_symptoms(&["nausea", "nausea"]),
            log_with_symptoms(&["dizziness", "dizziness"]),
            log_with_symptoms(&["brain fog"]),
        ];

        let summary = SymptomSummary::from_logs(period(), &logs);

        assert_eq!(summary.top_symptoms.len(), 3);
        assert_eq!(summary.top_symptoms[0].symptom, "headache");
        assert!(summary
            .top_symptoms
            .iter()
            .all(|f| f.symptom != "brain fog"));
    }

    #[test]
    fn duplicate_symptom_in_one_log_counts_each_occurrence() {
        let logs = vec![log_with_symptoms(&["cramp", "cramp"])];

        let summary = SymptomSummary::from_logs(period(), &logs);

        assert_eq!(summary.top_symptoms[0].count, 2);
    }
}
