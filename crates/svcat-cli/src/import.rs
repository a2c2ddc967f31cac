//! `import` command: build the catalog and write it to JSON files or the
//! database.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use svcat_core::{AppConfig, Catalog, ParsePolicy};
use svcat_import::{build_catalog, FlagPolicy, ImportOptions, ReaderKind, Source};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// The spreadsheet export
    #[default]
    Csv,
    /// The curated static product list
    Static,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReaderArg {
    /// RFC 4180 reader with quoting support
    #[default]
    Csv,
    /// Comma split per line, no quoting
    Simple,
}

impl From<ReaderArg> for ReaderKind {
    fn from(arg: ReaderArg) -> Self {
        match arg {
            ReaderArg::Csv => ReaderKind::Csv,
            ReaderArg::Simple => ReaderKind::Simple,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    /// Pretty-printed JSON files in the output directory
    #[default]
    Json,
    /// Replace the products stored in Postgres
    Db,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ImportArgs {
    /// Where rows come from
    #[arg(long, value_enum, default_value_t = SourceArg::Csv)]
    pub source: SourceArg,
    /// Input file; defaults to the configured path for the source
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// CSV reader to use
    #[arg(long, value_enum, default_value_t = ReaderArg::Csv)]
    pub reader: ReaderArg,
    /// Output directory for JSON files; defaults to `SVCAT_OUTPUT_DIR`
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Reject malformed numeric cells instead of coercing them
    #[arg(long)]
    pub strict: bool,
    /// Where the catalog is written
    #[arg(long, value_enum, default_value_t = TargetArg::Json)]
    pub target: TargetArg,
    /// Run the pipeline and print the summary without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Resolve command-line overrides against the loaded config.
pub(crate) fn import_options(config: &AppConfig, args: &ImportArgs) -> ImportOptions {
    let source = match args.source {
        SourceArg::Csv => Source::Csv {
            path: args.input.clone().unwrap_or_else(|| config.csv_path.clone()),
            reader: args.reader.into(),
        },
        SourceArg::Static => Source::Static {
            path: args
                .input
                .clone()
                .unwrap_or_else(|| config.static_products_path.clone()),
        },
    };

    ImportOptions {
        source,
        parse_policy: if args.strict {
            ParsePolicy::Strict
        } else {
            config.parse_policy
        },
        flags: FlagPolicy::from_app_config(config),
    }
}

/// Run an import end to end.
///
/// # Errors
///
/// Returns an error if the catalog cannot be built or written.
pub(crate) async fn run_import(config: &AppConfig, args: &ImportArgs) -> anyhow::Result<()> {
    let options = import_options(config, args);
    let catalog = build_catalog(&options)?;

    if args.dry_run {
        println!("dry-run: nothing written");
        println!("{}", serde_json::to_string_pretty(&catalog.summary)?);
        return Ok(());
    }

    match args.target {
        TargetArg::Json => {
            let dir = args.output.as_ref().unwrap_or(&config.output_dir);
            let written = svcat_import::write_catalog_json(&catalog, dir)?;
            for path in &written {
                println!("wrote {}", path.display());
            }
        }
        TargetArg::Db => {
            let pool = svcat_db::connect_pool_from_config(config).await?;
            let report = svcat_db::reseed_catalog(&pool, &catalog).await?;
            println!(
                "database reseeded: {} reference rows, {} products removed, {} products ({} variants) inserted",
                report.reference_rows,
                report.products_deleted,
                report.products_inserted,
                report.variants_inserted
            );
        }
    }

    print_summary(&catalog);
    Ok(())
}

fn print_summary(catalog: &Catalog) {
    let s = &catalog.summary;
    println!(
        "{} rows read, {} products, {} variants, {} categories",
        s.rows_read, s.products, s.variants, s.categories
    );
    if s.groups_dropped > 0 || s.dangling_category_refs > 0 {
        println!(
            "{} products dropped without weight, {} products without a category",
            s.groups_dropped, s.dangling_category_refs
        );
    }
}
