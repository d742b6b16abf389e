//! Patient dashboard view-model.
//!
//! Rendering is left to the caller; this crate only gathers the derived
//! fields (status, trend badges, probability label, review date, action
//! items) into a serializable [`PatientDashboard`].

pub mod actions;
pub mod clock;
pub mod view;

pub use actions::{recommended_actions, ActionItem, ActionPriority};
pub use clock::{Clock, FixedClock, SystemClock};
pub use view::{
    build_dashboard, build_dashboard_with_policy, load_dashboard, load_dashboard_with_policy,
    DashboardError, MeasurementRow, Overview, PatientDashboard, TrendAnalysis,
};
