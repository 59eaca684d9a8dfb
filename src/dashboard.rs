//! Dashboard reference data.
//!
//! KPI cards, trend series and the recent-activity feed shown on the
//! operations overview, with a few figures derived from them.

use serde::Serialize;

/// Trend badge on a KPI card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trend {
    pub value: &'static str,
    /// Whether the change is favorable.
    pub positive: bool,
}

/// Headline KPI card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: &'static str,
    pub trend: Option<Trend>,
}

/// Orders placed vs fulfilled in a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderVolume {
    pub month: &'static str,
    pub orders: u32,
    pub fulfilled: u32,
}

/// Savings against manual planning in a month (INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostSavings {
    pub month: &'static str,
    pub savings: u64,
}

/// Manual vs AI-planned wagon utilization on a weekday (%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UtilizationSample {
    pub day: &'static str,
    pub manual: u32,
    pub ai: u32,
}

/// Severity of an activity-feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Info,
    Warning,
}

/// Recent operational event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub time: &'static str,
    pub action: &'static str,
    pub status: ActivityStatus,
}

fn card(
    title: &'static str,
    value: impl Into<String>,
    subtitle: &'static str,
    trend: &'static str,
    positive: bool,
) -> KpiCard {
    KpiCard {
        title,
        value: value.into(),
        subtitle,
        trend: Some(Trend {
            value: trend,
            positive,
        }),
    }
}

/// The four headline cards of the overview.
pub fn kpi_cards() -> Vec<KpiCard> {
    vec![
        card("Orders Pending", "42", "Awaiting rake assignment", "12%", false),
        card("Rakes Formed Today", "18", "Out of 20 planned", "8%", true),
        card("Wagon Utilization", "96.4%", "AI-optimized allocation", "24%", true),
        card("Cost Savings", "₹2.45L", "vs manual planning", "18%", true),
    ]
}

/// Monthly order volumes, January to June.
pub fn order_volumes() -> Vec<OrderVolume> {
    [
        ("Jan", 145, 138),
        ("Feb", 168, 162),
        ("Mar", 182, 179),
        ("Apr", 201, 198),
        ("May", 225, 223),
        ("Jun", 248, 246),
    ]
    .into_iter()
    .map(|(month, orders, fulfilled)| OrderVolume {
        month,
        orders,
        fulfilled,
    })
    .collect()
}

/// Monthly savings, January to June.
pub fn cost_savings() -> Vec<CostSavings> {
    [
        ("Jan", 125_000),
        ("Feb", 142_000),
        ("Mar", 168_000),
        ("Apr", 195_000),
        ("May", 218_000),
        ("Jun", 245_000),
    ]
    .into_iter()
    .map(|(month, savings)| CostSavings { month, savings })
    .collect()
}

/// Weekday utilization, Monday to Sunday.
pub fn utilization_trend() -> Vec<UtilizationSample> {
    [
        ("Mon", 72, 94),
        ("Tue", 68, 96),
        ("Wed", 75, 93),
        ("Thu", 71, 95),
        ("Fri", 69, 97),
        ("Sat", 74, 96),
        ("Sun", 70, 94),
    ]
    .into_iter()
    .map(|(day, manual, ai)| UtilizationSample { day, manual, ai })
    .collect()
}

/// Latest entries of the activity feed, newest first.
pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            time: "2 min ago",
            action: "Rake R-2401 dispatched",
            status: ActivityStatus::Success,
        },
        ActivityEntry {
            time: "15 min ago",
            action: "Order batch assigned to Rake R-2402",
            status: ActivityStatus::Info,
        },
        ActivityEntry {
            time: "32 min ago",
            action: "AI optimization completed for Stockyard B",
            status: ActivityStatus::Success,
        },
        ActivityEntry {
            time: "1 hour ago",
            action: "Wagon maintenance alert for unit W-8845",
            status: ActivityStatus::Warning,
        },
    ]
}

impl OrderVolume {
    /// Fulfilled share of orders (0.0..=1.0).
    pub fn fulfillment_rate(&self) -> f64 {
        if self.orders == 0 {
            1.0
        } else {
            f64::from(self.fulfilled) / f64::from(self.orders)
        }
    }
}

/// Mean percentage-point gain of AI over manual planning.
pub fn mean_ai_uplift(samples: &[UtilizationSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let total: f64 = samples
        .iter()
        .map(|s| f64::from(s.ai) - f64::from(s.manual))
        .sum();
    total / samples.len() as f64
}

/// Cumulative savings over a series (INR).
pub fn total_savings(series: &[CostSavings]) -> u64 {
    series.iter().map(|s| s.savings).sum()
}
