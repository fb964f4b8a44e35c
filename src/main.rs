use clap::Parser;
use yamltag::application::{load_schema, ResolveOptions, ResolveService, SchemaOptions};
use yamltag::cli::{format_reports, format_tag_list, Cli, Commands};
use yamltag::domain::{SchemaKind, TagResolver};
use yamltag::error::YamlTagError;
use yamltag::infrastructure::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), YamlTagError> {
    // Parse schema string to enum
    let kind = cli
        .schema
        .as_deref()
        .map(|s| s.parse::<SchemaKind>())
        .transpose()?;

    let schema = load_schema(&SchemaOptions {
        config_path: cli.config,
        kind,
        no_fallback: cli.no_fallback,
    })?;

    match cli.command {
        Commands::Resolve {
            values,
            quoted,
            no_value,
        } => {
            let service = ResolveService::new(schema);
            let reports = service.execute(
                &values,
                ResolveOptions {
                    quoted,
                    parse_value: !no_value,
                },
            )?;
            print!("{}", format_reports(&reports));
            Ok(())
        }
        Commands::Tags => {
            println!("{}", format_tag_list(schema.registry().aliases()).trim_end());
            Ok(())
        }
        Commands::Expand { tag } => {
            println!("{}", schema.expand_tag(&tag));
            Ok(())
        }
        Commands::Shorten { tag } => {
            println!("{}", schema.shorten_tag(&tag));
            Ok(())
        }
    }
}
