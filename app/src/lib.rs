//! FILENAME: app/src/lib.rs
// PURPOSE: Runs the calc engine on its single built-in expression.

pub mod logging;

use calc_engine::{evaluate, parse, EngineError};
use log::{debug, error, info, LevelFilter};

/// The expression the binary evaluates. There is no argument handling.
pub const EXPRESSION: &str = "1+(2+3^2)*2";

/// Parses and evaluates `input`, logging the tree along the way.
pub fn evaluate_expression(input: &str) -> Result<f64, EngineError> {
    info!(target: "APP", "evaluating {:?}", input);

    let tree = parse(input).map_err(|e| {
        error!(target: "APP", "failed to parse {:?}: {}", input, e);
        EngineError::from(e)
    })?;
    debug!(
        target: "APP",
        "tree {} nodes={} depth={}",
        tree,
        tree.node_count(),
        tree.depth()
    );

    let value = evaluate(&tree);
    info!(target: "APP", "result {}", value);
    Ok(value)
}

pub fn run() -> Result<f64, EngineError> {
    if let Err(e) = logging::init(LevelFilter::Debug) {
        eprintln!("[LOG_INIT] {}", e);
    }

    let value = evaluate_expression(EXPRESSION)?;
    println!("Result of the expression is: {:?}", value);
    Ok(value)
}
