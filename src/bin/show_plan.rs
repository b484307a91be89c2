/// Show a saved vacation plan - selected days per month and per holiday
/// Usage: cargo run --bin show_plan -- data/plan_CZ_2025.json
use chrono::Datelike;
use std::collections::BTreeMap;
use vacation_planner::{time::to_iso, Plan};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let plan_file = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PLAN_FILE").ok())
        .unwrap_or_else(|| "data/plan_CZ_2025.json".to_string());

    println!("🏖️  Vacation Plan");
    println!("================\n");

    if !std::path::Path::new(&plan_file).exists() {
        println!("❌ No plan found at {}", plan_file);
        println!("\n💡 To create one, run:");
        println!("   cargo run --bin vacation-planner");
        return Ok(());
    }

    let plan_json = tokio::fs::read_to_string(&plan_file).await?;
    let plan: Plan = serde_json::from_str(&plan_json)?;

    println!("📋 Request:");
    println!("   Country: {}", plan.request.country);
    println!("   Year: {}", plan.request.year);
    println!("   Strategy: {}", plan.request.strategy);
    println!("   Created: {}", plan.created_at.format("%Y-%m-%d %H:%M UTC"));

    println!("\n📈 Summary:");
    println!("   Requested vacation days: {}", plan.stats.requested_days);
    println!("   Selected vacation days: {}", plan.selected.len());
    println!("   Total days off (excluding weekends): {}", plan.stats.total_days_off);
    println!("   Longest streak: {} days", plan.stats.longest_streak);

    if plan.selected.is_empty() {
        println!("\n⚠️  No vacation days selected");
        return Ok(());
    }

    let mut by_month: BTreeMap<(i32, u32), Vec<String>> = BTreeMap::new();
    for date in plan.selected_sorted() {
        by_month
            .entry((date.year(), date.month()))
            .or_default()
            .push(format!("{} {}", date.day(), date.weekday()));
    }

    println!("\n📅 By month:");
    for ((year, month), days) in &by_month {
        println!("   {}-{:02}: {}", year, month, days.join(", "));
    }

    println!("\n🎯 By holiday (ranked order):");
    for (idx, draw) in plan.draws.iter().enumerate() {
        println!(
            "   [{}] {} - used {}/{} days",
            idx + 1,
            to_iso(draw.holiday),
            draw.added,
            draw.days_to_use
        );
    }

    Ok(())
}
