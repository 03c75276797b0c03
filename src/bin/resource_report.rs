use azure_estate::cli::ReportArgs;
use azure_estate::config::load_descriptions_from_path;
use azure_estate::prelude::*;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    let args = ReportArgs::parse();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: ReportArgs) -> Result<()> {
    println!("Starting Azure resource analysis...");
    println!("Target subscriptions: {}", args.subscriptions.join(", "));

    let descriptions = match &args.descriptions {
        Some(path) => {
            let overrides = load_descriptions_from_path(path)?;
            DescriptionTable::builtin().with_overrides(overrides.descriptions)
        }
        None => DescriptionTable::builtin(),
    };

    let client = ArmClient::new(AzureCliCredential::new())?;
    let use_case = ScanInventoryUseCase::new(
        client.clone(),
        client,
        descriptions,
        StderrProgressReporter::new(),
    );

    let response = use_case
        .execute(ScanRequest::new(args.subscriptions.clone()))
        .await?;

    if response.analysis.total_resources == 0 {
        println!("No resources found in target subscriptions or unable to access resources.");
        return Ok(());
    }

    let report = TextReportFormatter::new().format(&response.analysis);
    println!("\n{}", report);

    // Persistence failure must not discard the report that just printed
    match JsonAnalysisWriter::new().save(&response.analysis, &args.output) {
        Ok(()) => println!("\nAnalysis results saved to {}", args.output.display()),
        Err(e) => eprintln!("\n⚠️  Failed to save analysis results: {}", e),
    }

    println!(
        "\nAnalysis complete! Processed {} resources from target subscriptions.",
        response.analysis.total_resources
    );
    Ok(())
}
