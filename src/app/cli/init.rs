//! Init command implementation.

use crate::domain::AppError;

pub fn run_init() -> Result<(), AppError> {
    let written = crate::app::api::init()?;
    println!("✅ Initialized Civic Macroeconomics Lab workspace");
    for path in written {
        println!("  Created {}", path);
    }
    Ok(())
}
