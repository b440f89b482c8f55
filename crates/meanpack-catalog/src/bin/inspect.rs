//! # Catalog Inspector
//!
//! Loads a catalog workbook and prints what the importer makes of it:
//! the products it accepted, the rows it flagged, and optionally the
//! packing breakdown for one model at a given quantity.
//!
//! ## Usage
//! ```bash
//! # List the products in a catalog
//! cargo run -p meanpack-catalog --bin inspect -- catalog.xlsx
//!
//! # Packing breakdown for 25 units of one model
//! cargo run -p meanpack-catalog --bin inspect -- catalog.xlsx --model HDR-15-5 --quantity 25
//!
//! # Accepted products as JSON
//! cargo run -p meanpack-catalog --bin inspect -- catalog.xlsx --json
//! ```

use std::env;

use meanpack_catalog::{LoadOutcome, SessionState};
use meanpack_core::{find_by_model, UnitWeight};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut path: Option<String> = None;
    let mut model: Option<String> = None;
    let mut quantity: i64 = 1;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--model" | "-m" => {
                if i + 1 < args.len() {
                    model = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--quantity" | "-q" => {
                if i + 1 < args.len() {
                    quantity = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--json" => json = true,
            "--help" | "-h" => {
                println!("Meanpack Catalog Inspector");
                println!();
                println!("Usage: inspect <WORKBOOK> [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -m, --model <MODEL>    Model number to break down");
                println!("  -q, --quantity <N>     Quantity for the breakdown (default: 1)");
                println!("      --json             Print accepted products as JSON");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            other => {
                if path.is_none() {
                    path = Some(other.to_string());
                }
            }
        }
        i += 1;
    }

    let path = match path {
        Some(path) => path,
        None => {
            eprintln!("inspect: missing workbook path (try --help)");
            std::process::exit(2);
        }
    };

    println!("📦 Meanpack Catalog Inspector");
    println!("=============================");
    println!("Workbook: {}", path);
    println!();

    let state = SessionState::new();
    match state.load_catalog(&path).await? {
        LoadOutcome::Installed {
            file_name,
            product_count,
            warnings,
        } => {
            println!("✓ Loaded {}: {} products", file_name, product_count);
            if !warnings.is_empty() {
                println!("⚠ {} rows flagged:", warnings.len());
                for warning in &warnings {
                    println!("    {}", warning);
                }
            }
        }
        // This tool issues exactly one load, so it is always the newest.
        LoadOutcome::Superseded => return Ok(()),
    }
    println!();

    if json {
        let rendered =
            state.catalog_products(|products| serde_json::to_string_pretty(products))?;
        println!("{}", rendered);
    } else {
        println!(
            "{:<16} {:<8} {:>9} {:>8} {:>14} {:>8}",
            "MODEL", "SERIES", "UNITS/BOX", "BOX KG", "L×W×H (in)", "UNIT KG"
        );
        state.catalog_products(|products| {
            for product in products {
                let series = product.series.as_deref().unwrap_or("-");
                let dims = format!(
                    "{}×{}×{}",
                    product.box_length_in, product.box_width_in, product.box_height_in
                );
                let unit_weight = match product.unit_weight {
                    UnitWeight::Exact(kg) => format!("{}", kg),
                    UnitWeight::Unknown => String::from("-"),
                };
                println!(
                    "{:<16} {:<8} {:>9} {:>8} {:>14} {:>8}",
                    product.model,
                    series,
                    product.units_per_box,
                    product.box_weight_kg,
                    dims,
                    unit_weight
                );
            }
        });
    }

    let model = match model {
        Some(model) => model,
        None => return Ok(()),
    };

    let product = state.catalog_products(|products| find_by_model(products, &model).cloned());
    let product = match product {
        Some(product) => product,
        None => {
            eprintln!("✗ Model '{}' not found in catalog", model);
            std::process::exit(1);
        }
    };

    let id = state.commit_selection(Some(&product), quantity)?;
    let result = state.item_result(id)?;

    println!();
    println!("Packing {} × {}", quantity, product.model);
    println!("  Full boxes:   {}", result.full_boxes);
    println!("  Remainder:    {} units", result.remainder);
    println!("  Total boxes:  {}", result.total_boxes);
    let estimated = if result.estimated_weight {
        " (estimated)"
    } else {
        ""
    };
    println!("  Total weight: {:.2} kg{}", result.total_weight, estimated);
    println!(
        "  Total volume: {:.2} in³ ({:.3} ft³)",
        result.total_volume_in3, result.total_volume_ft3
    );

    let summary = state.order_summary();
    println!();
    println!(
        "✓ Order: {} line(s), {} units, {} boxes, {:.2} kg, {:.3} ft³",
        summary.line_count,
        summary.total_units,
        summary.total_boxes,
        summary.total_weight,
        summary.total_volume_ft3
    );

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=meanpack_catalog=trace` - Show trace for the catalog layer only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,meanpack_core=debug,meanpack_catalog=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
