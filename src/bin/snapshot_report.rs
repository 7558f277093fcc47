//! Prints what the dashboard would render from the current snapshot files.
//!
//! Standalone check for an upstream batch run: loads both documents and the
//! side-tables through the same provider the UI uses, then prints the
//! headline numbers. Defaults serve when files are missing, exactly as in
//! the UI, so the report always completes.
//!
//! Usage: `snapshot_report [SEARCH_ROOT]` (default `.`)
//! Set `RUST_LOG=debug` to see which candidate file served each document.

use leadpulse::metrics::{
    format_currency, fraction_percent, percentage_of, round1, status_distribution,
    task_urgency_summary, top_entry, urgency_bucket, weekly_schedule, CurrencyScale,
};
use leadpulse::{DataProvider, DocumentKind, ScoreTier, SideTableKind};

fn main() {
    env_logger::init();

    let base = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let provider = DataProvider::with_search_path(&base);
    let snapshot = provider.snapshot();
    let dashboard = &snapshot.dashboard;
    let insights = &snapshot.insights;

    println!("LeadPulse snapshot report - {}", snapshot.generated_at);
    println!(
        "  sources: {} {}, {} {}",
        DocumentKind::Dashboard.file_name(),
        snapshot.dashboard_freshness.as_str(),
        DocumentKind::Insights.file_name(),
        snapshot.insights_freshness.as_str(),
    );
    println!();

    // ===== Executive summary =====
    let exec = &dashboard.executive_summary;
    println!("Executive summary");
    println!("  leads: {}  calls: {}  agents: {}", exec.total_leads, exec.total_calls, exec.agents_count);
    println!(
        "  pipeline: {}  success rate: {:.1}%  conversion: {:.1}%",
        format_currency(exec.total_revenue_potential, CurrencyScale::Millions),
        exec.success_rate,
        exec.conversion_rate,
    );
    let forecast = &insights.executive_summary.revenue_forecasting;
    println!(
        "  30-day forecast: {} at {:.0}% confidence, growth {:.1}%",
        format_currency(forecast.next_30_days_total, CurrencyScale::Millions),
        fraction_percent(forecast.forecast_confidence),
        fraction_percent(insights.executive_summary.performance_trends.revenue_growth_rate),
    );
    println!();

    // ===== Pipeline by status and tier =====
    println!("Lead status");
    for share in status_distribution(&dashboard.lead_status) {
        println!("  {:<14} {:>3}  {:.1}%", share.status, share.count, round1(share.share));
    }
    println!("Score tiers");
    for tier in ScoreTier::ALL {
        let count = dashboard.lead_scoring.get(&tier).copied().unwrap_or(0);
        let revenue = dashboard.revenue_forecast.get(&tier).copied().unwrap_or(0.0);
        println!(
            "  {:<5} {:>3} leads  {}",
            tier.as_str(),
            count,
            format_currency(revenue, CurrencyScale::Thousands),
        );
    }
    println!();

    // ===== Markets =====
    println!("Markets");
    match top_entry(&dashboard.geographic, |c| c.lead_count as f64) {
        Ok((country, stats)) => {
            let share = percentage_of(stats.lead_count as f64, exec.total_leads as f64);
            println!(
                "  top: {} ({} leads, {:.1}% of pipeline, churn risk {:.1}%)",
                country,
                stats.lead_count,
                round1(share),
                stats.churn_risk,
            );
        }
        Err(_) => println!("  no market data"),
    }
    let market_intel = &insights.geographic.market_intelligence;
    if !market_intel.top_opportunity_market.is_empty() {
        println!(
            "  model pick: {} (fastest growing: {})",
            market_intel.top_opportunity_market, market_intel.fastest_growing_market
        );
    }
    println!();

    // ===== Call timing =====
    println!("Call timing");
    for window in &insights.call_activity.success_prediction.optimal_calling_windows {
        println!(
            "  {}  {:.1}% predicted success",
            window.time,
            round1(fraction_percent(window.success_rate)),
        );
    }
    for (day, slots) in
        weekly_schedule(&insights.call_activity.predictive_scheduling.next_week_optimal_schedule)
    {
        println!("  {:<9} {}", day, slots.join(", "));
    }
    println!();

    // ===== Follow-ups =====
    let summary = task_urgency_summary(&dashboard.upcoming_tasks);
    println!(
        "Follow-ups ({} total, {} urgent)",
        summary.total(),
        summary.urgent()
    );
    println!(
        "  overdue: {}  today: {}  tomorrow: {}  later: {}",
        summary.overdue, summary.due_today, summary.due_tomorrow, summary.later
    );
    for task in &dashboard.upcoming_tasks {
        println!(
            "  [{}] lead {} - {} ({})",
            urgency_bucket(task.days_until).as_str(),
            task.lead_id,
            task.title,
            task.scheduled_date,
        );
    }
    println!();

    // ===== Side-tables =====
    println!("Side-tables");
    for kind in SideTableKind::ALL {
        let table = provider.side_table(kind);
        println!("  {:<28} {} rows", kind.file_name(), table.len());
    }
}
