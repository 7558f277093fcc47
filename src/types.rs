//! Snapshot document types shared by the loader, cache, and provider.
//!
//! Two documents come out of the upstream analytics batch: the *dashboard
//! document* (raw/aggregated operational metrics) and the *insights document*
//! (model-derived predictions and optimizations). Both are optional on disk;
//! every field here carries a default so a partially-written file still
//! deserializes into a schema-complete value. All defaults live in the
//! `default_*` functions below - nowhere else.
//!
//! Conventions: dashboard-document rates (`success_rate`, `win_rate`,
//! `churn_risk`, ...) are percentages in 0-100. Insights-document
//! probabilities and confidences (`forecast_confidence`, `model_accuracy`,
//! `probability`, ...) are fractions in 0-1, matching what the upstream
//! producer emits. Canonical wire keys are camelCase; the legacy producer
//! wrote snake_case, which every multi-word field accepts via an alias.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which snapshot document a load request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Insights,
    Dashboard,
}

impl DocumentKind {
    /// File name the upstream batch job writes for this document.
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentKind::Insights => "comprehensive_ai_insights.json",
            DocumentKind::Dashboard => "dashboard_data.json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Insights => "insights",
            DocumentKind::Dashboard => "dashboard",
        }
    }
}

/// The three CSV side-tables written next to the JSON documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideTableKind {
    EnhancedLeads,
    CallDetails,
    AgentAvailability,
}

impl SideTableKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            SideTableKind::EnhancedLeads => "enhanced_lead_data.csv",
            SideTableKind::CallDetails => "call_activity_details.csv",
            SideTableKind::AgentAvailability => "agent_availability.csv",
        }
    }

    pub const ALL: [SideTableKind; 3] = [
        SideTableKind::EnhancedLeads,
        SideTableKind::CallDetails,
        SideTableKind::AgentAvailability,
    ];
}

// =============================================================================
// Score tiers
// =============================================================================

/// Fixed lead-scoring classification used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreTier {
    Hot,
    Warm,
    Cold,
    Dead,
}

impl ScoreTier {
    /// Canonical display order, hottest first.
    pub const ALL: [ScoreTier; 4] = [
        ScoreTier::Hot,
        ScoreTier::Warm,
        ScoreTier::Cold,
        ScoreTier::Dead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Hot => "HOT",
            ScoreTier::Warm => "WARM",
            ScoreTier::Cold => "COLD",
            ScoreTier::Dead => "DEAD",
        }
    }
}

// =============================================================================
// Dashboard document - raw/aggregated operational metrics
// =============================================================================

/// Aggregated operational metrics for one dashboard session.
///
/// Read-only snapshot: loaded once, cached, never mutated by consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDocument {
    #[serde(default, alias = "executive_summary")]
    pub executive_summary: ExecutiveSummary,
    /// Status name -> lead count. The mapping's own sum defines 100% when
    /// rendering the distribution.
    #[serde(default = "default_lead_status", alias = "lead_status")]
    pub lead_status: HashMap<String, u64>,
    #[serde(default = "default_lead_scoring", alias = "lead_scoring")]
    pub lead_scoring: HashMap<ScoreTier, u64>,
    /// Forecast revenue per score tier, in whole currency units.
    #[serde(default = "default_revenue_forecast", alias = "revenue_forecast")]
    pub revenue_forecast: HashMap<ScoreTier, f64>,
    /// Chronological daily call counts. No gap-filling is performed.
    #[serde(default = "default_call_activity", alias = "call_activity")]
    pub call_activity: Vec<CallDay>,
    #[serde(default = "default_hourly_success", alias = "hourly_success")]
    pub hourly_success: Vec<HourlySlot>,
    #[serde(default = "default_agent_performance", alias = "agent_performance")]
    pub agent_performance: HashMap<String, AgentStats>,
    #[serde(default = "default_geographic")]
    pub geographic: HashMap<String, CountryStats>,
    #[serde(default = "default_upcoming_tasks", alias = "upcoming_tasks")]
    pub upcoming_tasks: Vec<UpcomingTask>,
}

impl Default for DashboardDocument {
    fn default() -> Self {
        Self {
            executive_summary: ExecutiveSummary::default(),
            lead_status: default_lead_status(),
            lead_scoring: default_lead_scoring(),
            revenue_forecast: default_revenue_forecast(),
            call_activity: default_call_activity(),
            hourly_success: default_hourly_success(),
            agent_performance: default_agent_performance(),
            geographic: default_geographic(),
            upcoming_tasks: default_upcoming_tasks(),
        }
    }
}

/// Headline counts and rates for the executive summary page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    #[serde(default = "default_total_leads", alias = "total_leads")]
    pub total_leads: u64,
    #[serde(default = "default_total_calls", alias = "total_calls")]
    pub total_calls: u64,
    #[serde(default = "default_agents_count", alias = "agents_count")]
    pub agents_count: u64,
    #[serde(default = "default_countries_count", alias = "countries_count")]
    pub countries_count: u64,
    #[serde(default = "default_high_risk_leads", alias = "high_risk_leads")]
    pub high_risk_leads: u64,
    /// Percent, 0-100.
    #[serde(default = "default_success_rate", alias = "success_rate")]
    pub success_rate: f64,
    /// Percent, 0-100.
    #[serde(default = "default_conversion_rate", alias = "conversion_rate")]
    pub conversion_rate: f64,
    /// Percent, 0-100.
    #[serde(default = "default_churn_rate", alias = "churn_rate")]
    pub churn_rate: f64,
    /// Whole currency units.
    #[serde(
        default = "default_total_revenue_potential",
        alias = "total_revenue_potential"
    )]
    pub total_revenue_potential: f64,
}

impl Default for ExecutiveSummary {
    fn default() -> Self {
        Self {
            total_leads: default_total_leads(),
            total_calls: default_total_calls(),
            agents_count: default_agents_count(),
            countries_count: default_countries_count(),
            high_risk_leads: default_high_risk_leads(),
            success_rate: default_success_rate(),
            conversion_rate: default_conversion_rate(),
            churn_rate: default_churn_rate(),
            total_revenue_potential: default_total_revenue_potential(),
        }
    }
}

fn default_total_leads() -> u64 {
    50
}

fn default_total_calls() -> u64 {
    80
}

fn default_agents_count() -> u64 {
    5
}

fn default_countries_count() -> u64 {
    5
}

fn default_high_risk_leads() -> u64 {
    13
}

fn default_success_rate() -> f64 {
    31.2
}

fn default_conversion_rate() -> f64 {
    10.0
}

fn default_churn_rate() -> f64 {
    26.0
}

fn default_total_revenue_potential() -> f64 {
    1_290_000.0
}

/// One day of call volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDay {
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    #[serde(default)]
    pub calls: u64,
}

/// Success profile for one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySlot {
    /// 0-23.
    pub hour: u8,
    #[serde(default, alias = "total_calls")]
    pub total_calls: u64,
    /// Percent, 0-100.
    #[serde(default, alias = "success_rate")]
    pub success_rate: f64,
}

/// Per-agent pipeline performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "total_leads")]
    pub total_leads: u64,
    #[serde(default, alias = "hot_leads")]
    pub hot_leads: u64,
    #[serde(default, alias = "won_leads")]
    pub won_leads: u64,
    /// Percent, 0-100.
    #[serde(default, alias = "win_rate")]
    pub win_rate: f64,
}

/// Per-country pipeline footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStats {
    #[serde(default, alias = "lead_count")]
    pub lead_count: u64,
    /// Whole currency units.
    #[serde(default, alias = "revenue_potential")]
    pub revenue_potential: f64,
    /// Percent, 0-100.
    #[serde(default, alias = "churn_risk")]
    pub churn_risk: f64,
}

/// A scheduled follow-up owned by an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingTask {
    #[serde(default, alias = "lead_id")]
    pub lead_id: u32,
    #[serde(default)]
    pub title: String,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(default, alias = "scheduled_date")]
    pub scheduled_date: String,
    /// Days until the scheduled date; negative means already past due.
    #[serde(default, alias = "days_until")]
    pub days_until: i64,
    #[serde(default, alias = "agent_id")]
    pub agent_id: u32,
}

pub(crate) fn default_lead_status() -> HashMap<String, u64> {
    HashMap::from([
        ("Uncontacted".to_string(), 8),
        ("On Hold".to_string(), 7),
        ("Won".to_string(), 5),
        ("Lost".to_string(), 4),
    ])
}

pub(crate) fn default_lead_scoring() -> HashMap<ScoreTier, u64> {
    HashMap::from([
        (ScoreTier::Hot, 12),
        (ScoreTier::Warm, 18),
        (ScoreTier::Cold, 15),
        (ScoreTier::Dead, 5),
    ])
}

pub(crate) fn default_revenue_forecast() -> HashMap<ScoreTier, f64> {
    HashMap::from([
        (ScoreTier::Hot, 640_000.0),
        (ScoreTier::Warm, 420_000.0),
        (ScoreTier::Cold, 180_000.0),
        (ScoreTier::Dead, 50_000.0),
    ])
}

pub(crate) fn default_call_activity() -> Vec<CallDay> {
    let days = [
        ("2025-07-14", 9),
        ("2025-07-15", 14),
        ("2025-07-16", 11),
        ("2025-07-17", 16),
        ("2025-07-18", 12),
        ("2025-07-19", 10),
        ("2025-07-20", 8),
    ];
    days.iter()
        .map(|(date, calls)| CallDay {
            date: date.to_string(),
            calls: *calls,
        })
        .collect()
}

pub(crate) fn default_hourly_success() -> Vec<HourlySlot> {
    let slots = [
        (9, 8, 25.0),
        (10, 14, 42.9),
        (11, 12, 33.3),
        (12, 6, 16.7),
        (13, 7, 28.6),
        (14, 10, 30.0),
        (15, 9, 33.3),
        (16, 8, 25.0),
        (17, 6, 16.7),
    ];
    slots
        .iter()
        .map(|(hour, total_calls, success_rate)| HourlySlot {
            hour: *hour,
            total_calls: *total_calls,
            success_rate: *success_rate,
        })
        .collect()
}

pub(crate) fn default_agent_performance() -> HashMap<String, AgentStats> {
    let agents = [
        ("Jasmin Ahmed", "AI Agent", 18, 4, 2, 11.11),
        ("Mohammed Ali", "Senior Closer", 10, 3, 1, 10.0),
        ("Fatima Hassan", "Account Executive", 9, 2, 1, 11.11),
        ("Omar Khalil", "Junior Closer", 8, 2, 1, 12.5),
        ("Layla Ibrahim", "Account Executive", 5, 1, 0, 0.0),
    ];
    agents
        .iter()
        .map(|(name, role, total_leads, hot_leads, won_leads, win_rate)| {
            (
                name.to_string(),
                AgentStats {
                    role: role.to_string(),
                    total_leads: *total_leads,
                    hot_leads: *hot_leads,
                    won_leads: *won_leads,
                    win_rate: *win_rate,
                },
            )
        })
        .collect()
}

pub(crate) fn default_geographic() -> HashMap<String, CountryStats> {
    let countries = [
        ("United Arab Emirates", 15, 480_000.0, 18.0),
        ("Saudi Arabia", 12, 390_000.0, 22.5),
        ("Egypt", 9, 175_000.0, 31.0),
        ("India", 8, 150_000.0, 35.5),
        ("Qatar", 6, 95_000.0, 12.0),
    ];
    countries
        .iter()
        .map(|(name, lead_count, revenue_potential, churn_risk)| {
            (
                name.to_string(),
                CountryStats {
                    lead_count: *lead_count,
                    revenue_potential: *revenue_potential,
                    churn_risk: *churn_risk,
                },
            )
        })
        .collect()
}

pub(crate) fn default_upcoming_tasks() -> Vec<UpcomingTask> {
    let tasks = [
        (7, "Follow up on proposal", "2025-07-18", -2, 2),
        (13, "Send revised quote", "2025-07-20", 0, 1),
        (21, "Schedule product demo", "2025-07-21", 1, 3),
        (34, "Quarterly account check-in", "2025-07-24", 4, 5),
    ];
    tasks
        .iter()
        .map(|(lead_id, title, scheduled_date, days_until, agent_id)| UpcomingTask {
            lead_id: *lead_id,
            title: title.to_string(),
            scheduled_date: scheduled_date.to_string(),
            days_until: *days_until,
            agent_id: *agent_id,
        })
        .collect()
}

// =============================================================================
// Insights document - model-derived predictions and optimizations
// =============================================================================

/// Model-derived predictions for one dashboard session.
///
/// Every section is independently optional on the wire; an absent section
/// resolves to its default below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsDocument {
    #[serde(default, alias = "executive_summary")]
    pub executive_summary: ExecutiveInsights,
    #[serde(default, alias = "lead_status")]
    pub lead_status: LeadStatusInsights,
    #[serde(default, alias = "call_activity")]
    pub call_activity: CallActivityInsights,
    #[serde(default, alias = "tasks_followup")]
    pub tasks_followup: TasksInsights,
    #[serde(default, alias = "agent_availability")]
    pub agent_availability: AgentInsights,
    #[serde(default)]
    pub conversion: ConversionInsights,
    #[serde(default)]
    pub geographic: GeographicInsights,
    #[serde(default, alias = "meta_insights")]
    pub meta_insights: MetaInsights,
}

/// Forecast headline for the executive summary page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveInsights {
    #[serde(default, alias = "revenue_forecasting")]
    pub revenue_forecasting: RevenueForecasting,
    #[serde(default, alias = "performance_trends")]
    pub performance_trends: PerformanceTrends,
    #[serde(default, alias = "optimization_opportunities")]
    pub optimization_opportunities: OptimizationOpportunities,
    #[serde(default, alias = "predictive_alerts")]
    pub predictive_alerts: PredictiveAlerts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueForecasting {
    /// Whole currency units.
    #[serde(default = "default_next_30_days_total", alias = "next_30_days_total")]
    pub next_30_days_total: f64,
    /// Fraction, 0-1.
    #[serde(default = "default_forecast_confidence", alias = "forecast_confidence")]
    pub forecast_confidence: f64,
}

impl Default for RevenueForecasting {
    fn default() -> Self {
        Self {
            next_30_days_total: default_next_30_days_total(),
            forecast_confidence: default_forecast_confidence(),
        }
    }
}

fn default_next_30_days_total() -> f64 {
    2_968_212.0
}

fn default_forecast_confidence() -> f64 {
    0.87
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTrends {
    /// Fraction, 0-1.
    #[serde(default = "default_revenue_growth_rate", alias = "revenue_growth_rate")]
    pub revenue_growth_rate: f64,
}

impl Default for PerformanceTrends {
    fn default() -> Self {
        Self {
            revenue_growth_rate: default_revenue_growth_rate(),
        }
    }
}

fn default_revenue_growth_rate() -> f64 {
    0.156
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOpportunities {
    /// Whole currency units.
    #[serde(
        default = "default_total_uplift_potential",
        alias = "total_uplift_potential"
    )]
    pub total_uplift_potential: f64,
    #[serde(default, alias = "leads_with_high_uplift")]
    pub leads_with_high_uplift: u64,
    /// Fraction, 0-1.
    #[serde(default, alias = "average_improvement_probability")]
    pub average_improvement_probability: f64,
}

impl Default for OptimizationOpportunities {
    fn default() -> Self {
        Self {
            total_uplift_potential: default_total_uplift_potential(),
            leads_with_high_uplift: 0,
            average_improvement_probability: 0.0,
        }
    }
}

fn default_total_uplift_potential() -> f64 {
    347_540.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveAlerts {
    #[serde(
        default = "default_high_risk_leads_next_week",
        alias = "high_risk_leads_next_week"
    )]
    pub high_risk_leads_next_week: u64,
    #[serde(default, alias = "conversion_opportunities_closing")]
    pub conversion_opportunities_closing: u64,
    #[serde(default, alias = "agent_performance_warnings")]
    pub agent_performance_warnings: u64,
    #[serde(default, alias = "market_expansion_signals")]
    pub market_expansion_signals: u64,
}

impl Default for PredictiveAlerts {
    fn default() -> Self {
        Self {
            high_risk_leads_next_week: default_high_risk_leads_next_week(),
            conversion_opportunities_closing: 0,
            agent_performance_warnings: 0,
            market_expansion_signals: 0,
        }
    }
}

fn default_high_risk_leads_next_week() -> u64 {
    8
}

/// Lead-pipeline predictions: probability buckets, status transitions,
/// prioritized lead lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStatusInsights {
    #[serde(default, alias = "conversion_predictions")]
    pub conversion_predictions: ConversionPredictions,
    /// Current status -> predicted next transition.
    #[serde(default, alias = "status_transitions")]
    pub status_transitions: HashMap<String, StatusTransition>,
    #[serde(default, alias = "optimization_recommendations")]
    pub optimization_recommendations: LeadRecommendations,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPredictions {
    #[serde(default, alias = "high_probability_leads")]
    pub high_probability_leads: u64,
    #[serde(default, alias = "medium_probability_leads")]
    pub medium_probability_leads: u64,
    #[serde(default, alias = "low_probability_leads")]
    pub low_probability_leads: u64,
    /// Fraction, 0-1.
    #[serde(default, alias = "average_conversion_probability")]
    pub average_conversion_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTransition {
    #[serde(default, alias = "next_likely_status")]
    pub next_likely_status: String,
    /// Fraction, 0-1.
    #[serde(default)]
    pub probability: f64,
    #[serde(default, alias = "avg_days")]
    pub avg_days: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecommendations {
    #[serde(default, alias = "priority_leads_for_immediate_action")]
    pub priority_leads_for_immediate_action: Vec<u32>,
    #[serde(default, alias = "leads_at_risk_of_churn")]
    pub leads_at_risk_of_churn: Vec<u32>,
    #[serde(default, alias = "high_value_opportunities")]
    pub high_value_opportunities: Vec<u32>,
}

/// Call-timing model output: accuracy, optimal windows, weekly schedule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallActivityInsights {
    #[serde(default, alias = "success_prediction")]
    pub success_prediction: SuccessPrediction,
    #[serde(default, alias = "predictive_scheduling")]
    pub predictive_scheduling: PredictiveScheduling,
    #[serde(default, alias = "call_optimization")]
    pub call_optimization: CallOptimization,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPrediction {
    /// Fraction, 0-1.
    #[serde(default, alias = "model_accuracy")]
    pub model_accuracy: f64,
    /// Best-first ordering as produced by the model.
    #[serde(default, alias = "optimal_calling_windows")]
    pub optimal_calling_windows: Vec<CallingWindow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallingWindow {
    /// Display label, e.g. `"10:00-11:00"`.
    #[serde(default)]
    pub time: String,
    /// Fraction, 0-1.
    #[serde(default, alias = "success_rate")]
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveScheduling {
    /// Day name -> ordered time slots. The wire object carries no day
    /// ordering; `metrics::weekly_schedule` applies the canonical one.
    #[serde(default, alias = "next_week_optimal_schedule")]
    pub next_week_optimal_schedule: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallOptimization {
    /// Fraction, 0-1.
    #[serde(default, alias = "predicted_success_rate_improvement")]
    pub predicted_success_rate_improvement: f64,
    #[serde(default, alias = "optimal_call_volume_per_agent")]
    pub optimal_call_volume_per_agent: u64,
    /// Fraction, 0-1.
    #[serde(default, alias = "sentiment_correlation")]
    pub sentiment_correlation: f64,
}

/// Task prioritization and completion forecasts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksInsights {
    #[serde(default, alias = "smart_prioritization")]
    pub smart_prioritization: SmartPrioritization,
    #[serde(default, alias = "urgent_actions")]
    pub urgent_actions: UrgentActions,
    #[serde(default, alias = "success_prediction")]
    pub success_prediction: TaskSuccessPrediction,
    #[serde(default, alias = "predictive_insights")]
    pub predictive_insights: TaskOutlook,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartPrioritization {
    #[serde(default, alias = "high_priority_tasks")]
    pub high_priority_tasks: u64,
    #[serde(default, alias = "medium_priority_tasks")]
    pub medium_priority_tasks: u64,
    #[serde(default, alias = "low_priority_tasks")]
    pub low_priority_tasks: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgentActions {
    #[serde(default, alias = "overdue_tasks")]
    pub overdue_tasks: u64,
    #[serde(default, alias = "tasks_due_today")]
    pub tasks_due_today: u64,
    #[serde(default, alias = "tasks_due_this_week")]
    pub tasks_due_this_week: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSuccessPrediction {
    /// Fraction, 0-1.
    #[serde(default, alias = "overall_success_rate_prediction")]
    pub overall_success_rate_prediction: f64,
    #[serde(default, alias = "high_success_probability_tasks")]
    pub high_success_probability_tasks: u64,
    #[serde(default, alias = "low_success_probability_tasks")]
    pub low_success_probability_tasks: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutlook {
    /// Fraction, 0-1.
    #[serde(default, alias = "productivity_improvement_potential")]
    pub productivity_improvement_potential: f64,
    /// Fraction, 0-1.
    #[serde(default, alias = "completion_rate_forecast")]
    pub completion_rate_forecast: f64,
}

/// Agent workload and wellness predictions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentInsights {
    #[serde(default, alias = "performance_prediction")]
    pub performance_prediction: PerformancePrediction,
    #[serde(default, alias = "capacity_optimization")]
    pub capacity_optimization: CapacityOptimization,
    #[serde(default, alias = "skills_development")]
    pub skills_development: SkillsDevelopment,
    #[serde(default, alias = "burnout_prevention")]
    pub burnout_prevention: BurnoutPrevention,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePrediction {
    #[serde(default, alias = "agents_exceeding_targets")]
    pub agents_exceeding_targets: u64,
    #[serde(default, alias = "agents_needing_support")]
    pub agents_needing_support: u64,
    /// Fraction, 0-1.
    #[serde(default, alias = "average_performance_improvement_potential")]
    pub average_performance_improvement_potential: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityOptimization {
    /// Fraction, 0-1.
    #[serde(default, alias = "current_utilization_rate")]
    pub current_utilization_rate: f64,
    #[serde(default, alias = "underutilized_agents")]
    pub underutilized_agents: Vec<u32>,
    #[serde(default, alias = "overutilized_agents")]
    pub overutilized_agents: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsDevelopment {
    /// Fraction, 0-1.
    #[serde(default, alias = "training_impact_prediction")]
    pub training_impact_prediction: f64,
    #[serde(default, alias = "agents_needing_training")]
    pub agents_needing_training: Vec<u32>,
    #[serde(default, alias = "priority_training_areas")]
    pub priority_training_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnoutPrevention {
    #[serde(default, alias = "high_burnout_risk_agents")]
    pub high_burnout_risk_agents: Vec<u32>,
    /// Fraction, 0-1.
    #[serde(default, alias = "wellness_score")]
    pub wellness_score: f64,
}

/// Revenue forecasting and conversion-timing intelligence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionInsights {
    #[serde(default, alias = "revenue_forecasting")]
    pub revenue_forecasting: PipelineForecast,
    #[serde(default, alias = "conversion_optimization")]
    pub conversion_optimization: ConversionOptimization,
    #[serde(default, alias = "time_to_conversion")]
    pub time_to_conversion: TimeToConversion,
    #[serde(default, alias = "predictive_insights")]
    pub predictive_insights: RevenueOutlook,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineForecast {
    /// Whole currency units.
    #[serde(default, alias = "total_pipeline_value")]
    pub total_pipeline_value: f64,
    /// Whole currency units.
    #[serde(default, alias = "expected_revenue_next_quarter")]
    pub expected_revenue_next_quarter: f64,
    /// Whole currency units.
    #[serde(default, alias = "high_probability_revenue")]
    pub high_probability_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptimization {
    #[serde(default, alias = "optimization_opportunities_count")]
    pub optimization_opportunities_count: u64,
    /// Whole currency units.
    #[serde(default, alias = "total_revenue_at_risk")]
    pub total_revenue_at_risk: f64,
    /// Whole currency units.
    #[serde(default, alias = "potential_revenue_uplift")]
    pub potential_revenue_uplift: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeToConversion {
    /// Days.
    #[serde(default, alias = "average_conversion_time")]
    pub average_conversion_time: f64,
    #[serde(default, alias = "fast_track_opportunities")]
    pub fast_track_opportunities: u64,
    #[serde(default, alias = "stalled_deals_needing_attention")]
    pub stalled_deals_needing_attention: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueOutlook {
    #[serde(default, alias = "next_month_conversions_forecast")]
    pub next_month_conversions_forecast: u64,
    /// `[low, high]`, whole currency units.
    #[serde(default, alias = "revenue_confidence_interval")]
    pub revenue_confidence_interval: [f64; 2],
    /// Multiplier, 1.0 = no adjustment.
    #[serde(default, alias = "seasonal_adjustment_factor")]
    pub seasonal_adjustment_factor: f64,
    /// Fraction, 0-1.
    #[serde(default, alias = "market_trend_impact")]
    pub market_trend_impact: f64,
}

/// Market-level intelligence and expansion analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicInsights {
    #[serde(default, alias = "market_intelligence")]
    pub market_intelligence: MarketIntelligence,
    #[serde(default, alias = "expansion_opportunities")]
    pub expansion_opportunities: ExpansionOpportunities,
    #[serde(default, alias = "risk_analysis")]
    pub risk_analysis: MarketRiskAnalysis,
    #[serde(default, alias = "predictive_analytics")]
    pub predictive_analytics: MarketPredictions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIntelligence {
    #[serde(default, alias = "top_opportunity_market")]
    pub top_opportunity_market: String,
    #[serde(default, alias = "fastest_growing_market")]
    pub fastest_growing_market: String,
    #[serde(default, alias = "highest_conversion_market")]
    pub highest_conversion_market: String,
    /// Fraction, 0-1.
    #[serde(default, alias = "market_diversity_index")]
    pub market_diversity_index: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionOpportunities {
    #[serde(default, alias = "high_potential_markets")]
    pub high_potential_markets: Vec<String>,
    /// Display label, e.g. `"$1.2M"`. Produced upstream; not parsed here.
    #[serde(default, alias = "total_expansion_potential")]
    pub total_expansion_potential: String,
    #[serde(default, alias = "underserved_markets")]
    pub underserved_markets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRiskAnalysis {
    #[serde(default, alias = "regulatory_challenges")]
    pub regulatory_challenges: Vec<String>,
    #[serde(default, alias = "competitive_pressures")]
    pub competitive_pressures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPredictions {
    /// Market -> saturation-timeline label, e.g. `"18-24 months"`.
    #[serde(default, alias = "market_saturation_timeline")]
    pub market_saturation_timeline: HashMap<String, String>,
}

/// Document-global model metadata shown in the sidebar and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaInsights {
    #[serde(
        default = "default_total_models_deployed",
        alias = "total_models_deployed"
    )]
    pub total_models_deployed: u64,
    /// Fraction, 0-1.
    #[serde(
        default = "default_prediction_accuracy_average",
        alias = "prediction_accuracy_average"
    )]
    pub prediction_accuracy_average: f64,
    /// Fraction, 0-1.
    #[serde(
        default = "default_ai_confidence_score",
        alias = "ai_confidence_score"
    )]
    pub ai_confidence_score: f64,
    /// Display label produced upstream, e.g. `"$2.1M"`.
    #[serde(
        default = "default_optimization_potential_total",
        alias = "optimization_potential_total"
    )]
    pub optimization_potential_total: String,
}

impl Default for MetaInsights {
    fn default() -> Self {
        Self {
            total_models_deployed: default_total_models_deployed(),
            prediction_accuracy_average: default_prediction_accuracy_average(),
            ai_confidence_score: default_ai_confidence_score(),
            optimization_potential_total: default_optimization_potential_total(),
        }
    }
}

fn default_total_models_deployed() -> u64 {
    12
}

fn default_prediction_accuracy_average() -> f64 {
    0.743
}

fn default_ai_confidence_score() -> f64 {
    0.89
}

fn default_optimization_potential_total() -> String {
    "$2.1M".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dashboard_matches_sample() {
        let doc = DashboardDocument::default();
        assert_eq!(doc.executive_summary.total_leads, 50);
        assert_eq!(doc.executive_summary.total_calls, 80);
        assert_eq!(doc.executive_summary.success_rate, 31.2);
        assert_eq!(doc.executive_summary.total_revenue_potential, 1_290_000.0);
        assert_eq!(doc.lead_status.get("Uncontacted"), Some(&8));
        assert_eq!(doc.lead_status.get("Won"), Some(&5));
        assert_eq!(
            doc.agent_performance.get("Jasmin Ahmed").map(|a| a.win_rate),
            Some(11.11)
        );
    }

    #[test]
    fn test_default_sample_is_internally_consistent() {
        let doc = DashboardDocument::default();
        let tier_total: u64 = doc.lead_scoring.values().sum();
        assert_eq!(tier_total, doc.executive_summary.total_leads);

        let daily_calls: u64 = doc.call_activity.iter().map(|d| d.calls).sum();
        assert_eq!(daily_calls, doc.executive_summary.total_calls);

        let hourly_calls: u64 = doc.hourly_success.iter().map(|h| h.total_calls).sum();
        assert_eq!(hourly_calls, doc.executive_summary.total_calls);

        let forecast_total: f64 = doc.revenue_forecast.values().sum();
        assert_eq!(forecast_total, doc.executive_summary.total_revenue_potential);

        let geo_leads: u64 = doc.geographic.values().map(|c| c.lead_count).sum();
        assert_eq!(geo_leads, doc.executive_summary.total_leads);
        assert_eq!(
            doc.geographic.len() as u64,
            doc.executive_summary.countries_count
        );

        let agent_leads: u64 = doc.agent_performance.values().map(|a| a.total_leads).sum();
        assert_eq!(agent_leads, doc.executive_summary.total_leads);
        assert_eq!(
            doc.agent_performance.len() as u64,
            doc.executive_summary.agents_count
        );
    }

    #[test]
    fn test_default_insights_matches_sample() {
        let doc = InsightsDocument::default();
        let exec = &doc.executive_summary;
        assert_eq!(exec.revenue_forecasting.next_30_days_total, 2_968_212.0);
        assert_eq!(exec.revenue_forecasting.forecast_confidence, 0.87);
        assert_eq!(exec.performance_trends.revenue_growth_rate, 0.156);
        assert_eq!(
            exec.optimization_opportunities.total_uplift_potential,
            347_540.0
        );
        assert_eq!(exec.predictive_alerts.high_risk_leads_next_week, 8);
        assert_eq!(doc.meta_insights.total_models_deployed, 12);
        assert_eq!(doc.meta_insights.optimization_potential_total, "$2.1M");
        // Non-headline sections default to zeros and empties.
        assert_eq!(doc.lead_status, LeadStatusInsights::default());
        assert!(doc
            .geographic
            .market_intelligence
            .top_opportunity_market
            .is_empty());
    }

    #[test]
    fn test_partial_section_keeps_sibling_defaults() {
        let summary: ExecutiveSummary =
            serde_json::from_value(serde_json::json!({ "totalLeads": 999 })).unwrap();
        assert_eq!(summary.total_leads, 999);
        assert_eq!(summary.success_rate, default_success_rate());
        assert_eq!(summary.conversion_rate, default_conversion_rate());
    }

    #[test]
    fn test_legacy_snake_case_keys_accepted() {
        let summary: ExecutiveSummary = serde_json::from_value(serde_json::json!({
            "total_leads": 72,
            "success_rate": 44.5
        }))
        .unwrap();
        assert_eq!(summary.total_leads, 72);
        assert_eq!(summary.success_rate, 44.5);
    }

    #[test]
    fn test_score_tier_round_trips_as_uppercase_key() {
        let scoring: HashMap<ScoreTier, u64> =
            serde_json::from_value(serde_json::json!({ "HOT": 3, "DEAD": 1 })).unwrap();
        assert_eq!(scoring.get(&ScoreTier::Hot), Some(&3));
        let back = serde_json::to_value(&scoring).unwrap();
        assert!(back.get("HOT").is_some());
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let value = serde_json::to_value(DashboardDocument::default()).unwrap();
        assert!(value.get("executiveSummary").is_some());
        assert!(value.get("leadStatus").is_some());
        assert!(value["executiveSummary"].get("totalLeads").is_some());
        assert!(value.get("executive_summary").is_none());
    }
}
