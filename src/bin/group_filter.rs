use azure_estate::cli::FilterArgs;
use azure_estate::prelude::*;
use clap::Parser;
use std::process;

fn main() {
    let args = FilterArgs::parse();

    match run(args) {
        Ok(summary) => {
            if summary.wrote_output() {
                println!("\nFiltering completed successfully!");
                println!("Total entries processed: {}", summary.total);
                println!("Entries excluded: {}", summary.excluded);
                println!("Production entries saved: {}", summary.written);
            } else {
                println!("\nTotal entries processed: {}", summary.total);
                println!("Entries excluded: {}", summary.excluded);
            }
        }
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: FilterArgs) -> Result<FilterSummary> {
    println!("Filtering user groups for production environment...");
    println!("Input file: {}", args.input.display());
    println!("Output file: {}", args.output.display());

    let filter = if args.exclude.is_empty() {
        EnvironmentFilter::production()
    } else {
        EnvironmentFilter::with_extra_markers(args.exclude)
    };

    let use_case = FilterGroupsUseCase::new(
        CsvGroupStore::new(),
        CsvGroupStore::new(),
        filter,
        StderrProgressReporter::new(),
    );

    let request = FilterRequest::new(args.input, args.output);
    use_case.execute(request)
}
