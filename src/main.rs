//! fngen's application entry point.
//! Parses arguments, loads templates and render data, and runs the generator.

use fngen::{
    cli::{get_args, Args},
    config::load_data,
    error::{default_error_handler, Error, Result},
    files::{exists, is_empty},
    function::{Function, FunctionDir},
    generator::Generator,
    renderer::MiniJinjaRenderer,
    report::LogReporter,
    template::load_steps,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the function directory
/// 2. Loads render data and template steps
/// 3. Renders and writes every step, continuing past failures
fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let reporter = LogReporter::new();

    let function = FunctionDir::new(&args.function_dir)?;
    let function_root = function.abs_path();
    if exists(&function_root, &reporter) && !is_empty(&function_root, &reporter)? {
        log::warn!(
            "'{}' is not empty, existing files will be left untouched",
            function_root.display()
        );
    }

    let data = match &args.data {
        Some(path) => load_data(path)?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };

    let mut steps = Vec::new();
    for template in &args.templates {
        steps.extend(load_steps(template, &reporter)?);
    }

    let generator = Generator::new(&renderer, &reporter).with_data(data);
    let summary = generator.run(&function, &steps);

    if !summary.is_success() {
        return Err(Error::GenerationError(format!(
            "{} of {} files could not be generated",
            summary.failed.len(),
            steps.len()
        )));
    }

    println!(
        "Generated {} files for '{}' in {}.",
        summary.written.len(),
        function.name().unwrap_or_default(),
        function_root.display()
    );
    Ok(())
}
