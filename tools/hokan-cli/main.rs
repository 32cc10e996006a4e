use clap::Parser;
use hokan::data::PreviewScenario;
use hokan::prelude::*;
use std::time::Instant;

/// A variable resolution and template substitution preview CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the scenario JSON file ({graph, node, template, values?, overrides?})
    scenario_path: Option<String>,

    /// Override the template from the scenario file
    #[arg(short, long)]
    template: Option<String>,

    /// Print the available input fields for the node and exit
    #[arg(short = 'f', long)]
    fields: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Scenario Loading ---
    let load_start = Instant::now();
    let mut scenario = match cli.scenario_path {
        Some(path) => PreviewScenario::from_file(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load scenario from '{}': {}", path, e))
        }),
        None => {
            println!("No scenario file provided. Using default mock scenario.");
            PreviewScenario::mock()
        }
    };
    if let Some(template) = cli.template {
        scenario.template = template;
    }
    let load_duration = load_start.elapsed();

    // --- 2. Snapshot Conversion ---
    let snapshot = scenario
        .graph
        .into_snapshot()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert graph: {}", e)));

    let mut resolver = Resolver::new(&snapshot);

    if cli.fields {
        let fields = resolver.available_fields(&scenario.node, None);
        println!("Available fields for '{}':", scenario.node);
        for field in fields {
            println!(
                "  {} ({}) from '{}'.{}",
                field.name, field.kind, field.source_node, field.source_port
            );
        }
        return;
    }

    // --- 3. Resolution ---
    let resolve_start = Instant::now();
    let resolution = resolver.resolve_node(&ResolutionRequest {
        node_id: scenario.node.clone(),
        target_port: None,
        template: scenario.template.clone(),
        direct_values: scenario.values.into_iter().collect(),
        overrides: scenario.overrides,
    });
    let resolve_duration = resolve_start.elapsed();

    // --- 4. Preview and Summary ---
    println!("\n{}", PreviewFormatter::format(&resolution));

    let analysis = analyze(&scenario.template);
    println!("\n--- Template Summary ---");
    println!("Placeholders:       {}", analysis.total_variables);
    println!("Distinct variables: {}", analysis.unique_variables.len());
    println!("Available fields:   {}", resolution.fields.len());
    println!(
        "Applied/unmapped:   {}/{}",
        resolution.substitution.applied_variables.len(),
        resolution.substitution.unmapped_variables.len()
    );

    println!("\n--- Performance Summary ---");
    println!("Scenario Loading: {:?}", load_duration);
    println!("Resolution:       {:?}", resolve_duration);
    println!("-----------------------------");
    println!("Total Execution:  {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
