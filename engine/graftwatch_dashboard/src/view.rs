//! Everything the patient dashboard displays, computed in one pass.

use chrono::NaiveDate;
use graftwatch_data::PatientDirectory;
use graftwatch_risk::{
    estimate_rejection_probability_range, months_since_transplant, AlertLevel, RiskAssessment,
    RiskLevel, RiskPolicy, TrendBadge, TrendDirection,
};
use graftwatch_types::Patient;
use serde::Serialize;
use thiserror::Error;

use crate::actions::{recommended_actions, ActionItem};
use crate::clock::Clock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Patient not found: {0}")]
    PatientNotFound(String),
    #[error("No measurements recorded for {0}; insufficient data")]
    InsufficientData(String),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Overview {
    pub name: String,
    pub age: u32,
    pub organ_type: String,
    pub months_since_transplant: u32,
    pub last_checkup_date: NaiveDate,
    pub current_donor_cfdna: f64,
    pub monitoring_status: AlertLevel,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MeasurementRow {
    pub date: NaiveDate,
    pub total_cfdna: f64,
    pub donor_cfdna: f64,
    pub trend: TrendBadge,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendAnalysis {
    pub risk_level: RiskLevel,
    pub rejection_probability: &'static str,
    pub direction: TrendDirection,
    pub next_review_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PatientDashboard {
    pub overview: Overview,
    pub measurements: Vec<MeasurementRow>,
    pub alert: RiskAssessment,
    pub trend: TrendAnalysis,
    pub actions: Vec<ActionItem>,
}

impl PatientDashboard {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the dashboard for `patient` as of `today` using the given policy
pub fn build_dashboard_with_policy(
    policy: &RiskPolicy,
    patient: &Patient,
    today: NaiveDate,
) -> Result<PatientDashboard, DashboardError> {
    let latest = patient
        .latest()
        .ok_or_else(|| DashboardError::InsufficientData(patient.name.clone()))?;
    let alert = policy.classify(latest.donor_cfdna);

    let measurements = patient
        .measurements
        .iter()
        .zip(policy.measurement_trends(&patient.measurements))
        .map(|(m, trend)| MeasurementRow {
            date: m.date,
            total_cfdna: m.total_cfdna,
            donor_cfdna: m.donor_cfdna,
            trend,
        })
        .collect();

    Ok(PatientDashboard {
        overview: Overview {
            name: patient.name.clone(),
            age: patient.age,
            organ_type: patient.organ_type.clone(),
            months_since_transplant: months_since_transplant(patient.transplant_date, today),
            last_checkup_date: patient.last_checkup_date,
            current_donor_cfdna: latest.donor_cfdna,
            monitoring_status: alert.level,
        },
        measurements,
        alert,
        trend: TrendAnalysis {
            risk_level: alert.risk_level,
            rejection_probability: estimate_rejection_probability_range(latest.donor_cfdna),
            direction: policy.trend_direction(&patient.measurements),
            next_review_date: policy.next_review_date(alert.level, today),
        },
        actions: recommended_actions(alert.level),
    })
}

pub fn build_dashboard(
    patient: &Patient,
    today: NaiveDate,
) -> Result<PatientDashboard, DashboardError> {
    build_dashboard_with_policy(&RiskPolicy::STANDARD, patient, today)
}

/// Look a patient up and build their dashboard under `policy`.
///
/// An unknown id is logged and reported as `PatientNotFound`; the caller
/// should keep whatever it was showing.
pub fn load_dashboard_with_policy(
    policy: &RiskPolicy,
    directory: &dyn PatientDirectory,
    id: &str,
    clock: &dyn Clock,
) -> Result<PatientDashboard, DashboardError> {
    let Some(patient) = directory.get(id) else {
        log::error!("Patient not found: {id}");
        return Err(DashboardError::PatientNotFound(id.to_string()));
    };
    build_dashboard_with_policy(policy, &patient, clock.today())
}

pub fn load_dashboard(
    directory: &dyn PatientDirectory,
    id: &str,
    clock: &dyn Clock,
) -> Result<PatientDashboard, DashboardError> {
    load_dashboard_with_policy(&RiskPolicy::STANDARD, directory, id, clock)
}
