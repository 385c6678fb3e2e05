//! Scenario listing.

use crate::domain::AppError;

pub fn run_scenarios(name: Option<&str>, config: Option<&str>) -> Result<(), AppError> {
    let Some(name) = name else {
        for summary in crate::app::api::scenarios(config)? {
            println!("{} ({} levers)", summary.name, summary.lever_count);
            println!("  {}", summary.description);
        }
        return Ok(());
    };

    let scenario = crate::app::api::scenario(name, config)?;
    println!("{}", scenario.name);
    println!("  {}", scenario.description);
    println!();
    println!("Levers:");
    for lever in &scenario.levers {
        println!("  • {}: {} to {} (default {})", lever.label(), lever.min, lever.max, lever.default);
    }
    Ok(())
}
