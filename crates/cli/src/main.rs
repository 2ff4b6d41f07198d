use anyhow::Context as _;

use forgeplan_planning::{
    ChangeStrategy, CustomBatchStrategy, OnDemandProductionStrategy, ProductionStrategyContext,
    StrategyCommandLog,
};

const DEFAULT_STRATEGY: &str = "mass";
const DEFAULT_ORDER_QUANTITY: i64 = 1000;

fn main() -> anyhow::Result<()> {
    forgeplan_observability::init();

    let strategy_env = std::env::var("FORGEPLAN_STRATEGY").unwrap_or_else(|_| {
        tracing::info!("FORGEPLAN_STRATEGY not set; using {DEFAULT_STRATEGY}");
        DEFAULT_STRATEGY.to_string()
    });
    let order_quantity = match std::env::var("FORGEPLAN_ORDER_QUANTITY") {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .with_context(|| format!("FORGEPLAN_ORDER_QUANTITY is not an integer: {raw:?}"))?,
        Err(_) => DEFAULT_ORDER_QUANTITY,
    };

    let mut context = ProductionStrategyContext::default();
    context
        .select_strategy(&strategy_env)
        .with_context(|| format!("invalid FORGEPLAN_STRATEGY: {strategy_env}"))?;
    let mut log = StrategyCommandLog::new();

    let record = context.execute_strategy()?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    let estimate = context.get_resource_requirements(order_quantity)?;
    tracing::info!(
        strategy = %record.strategy,
        order_quantity,
        raw_materials = estimate.raw_materials.total(),
        machine_hours = estimate.machine_time.total(),
        completion_hours = estimate.estimated_completion_time,
        "resource estimate"
    );
    println!("{}", serde_json::to_string_pretty(&estimate)?);

    // Compare the remaining variants on the same order, then roll back.
    for next in [
        ChangeStrategy::new(Box::new(CustomBatchStrategy::default())),
        ChangeStrategy::new(Box::new(OnDemandProductionStrategy::default())),
    ] {
        log.apply(&mut context, next)?;
        let estimate = context.get_resource_requirements(order_quantity)?;
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    }

    while !log.is_empty() {
        log.undo_last(&mut context)?;
    }

    let record = context.execute_strategy()?;
    tracing::info!(strategy = %record.strategy, "restored initial strategy");

    Ok(())
}
