use clap::{Parser, Subcommand, ValueEnum};
use launch_dashboard::application::dashboard::Dashboard;
use launch_dashboard::application::engine::{
    dropdown_options, payload_slider, pie_chart, scatter_chart,
};
use launch_dashboard::domain::launch::Kilograms;
use launch_dashboard::domain::ports::{ChartSink, ChartSinkBox};
use launch_dashboard::domain::selection::{PayloadRange, SiteFilter};
use launch_dashboard::error::DashboardError;
use launch_dashboard::interfaces::csv::chart_writer::CsvChartWriter;
use launch_dashboard::interfaces::csv::launch_reader::load_dataset;
use launch_dashboard::interfaces::events::EventScript;
use launch_dashboard::interfaces::json::chart_writer::JsonChartWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Launch records CSV file
    input: PathBuf,

    /// Output format for charts and widget descriptions
    #[arg(long, value_enum, default_value_t = Format::Csv, global = true)]
    format: Format,

    /// What to render. Without a command, renders the initial dashboard.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Success counts for the pie chart
    Summary {
        /// Launch site, or ALL
        #[arg(long, default_value = "ALL")]
        site: SiteFilter,
    },
    /// Payload/outcome points for the scatter chart
    Scatter {
        /// Launch site, or ALL
        #[arg(long, default_value = "ALL")]
        site: SiteFilter,

        /// Lower payload bound in kg (defaults to the smallest payload)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<Kilograms>,

        /// Upper payload bound in kg (defaults to the largest payload)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<Kilograms>,
    },
    /// Site dropdown options and payload slider settings
    Sites,
    /// Replays a widget event script (reads stdin when no file is given)
    Replay { script: Option<PathBuf> },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Load once; everything below only borrows it.
    let dataset = load_dataset(&cli.input).into_diagnostic()?;
    let bounds = dataset
        .payload_bounds()
        .ok_or(DashboardError::EmptyDataset)
        .into_diagnostic()?;

    let mut sink: ChartSinkBox = match cli.format {
        Format::Csv => Box::new(CsvChartWriter::new(io::stdout().lock())),
        Format::Json => Box::new(JsonChartWriter::new(io::stdout().lock())),
    };

    match cli.command {
        None => {
            let mut dashboard = Dashboard::new(&dataset, sink).into_diagnostic()?;
            dashboard.render_all().into_diagnostic()?;
        }
        Some(Command::Summary { site }) => {
            sink.emit(&pie_chart(&dataset, &site)).into_diagnostic()?;
        }
        Some(Command::Scatter { site, min, max }) => {
            let range = PayloadRange::new(min.unwrap_or(bounds.min), max.unwrap_or(bounds.max));
            sink.emit(&scatter_chart(&dataset, &site, &range))
                .into_diagnostic()?;
        }
        Some(Command::Sites) => {
            // Widget descriptions are not charts, so they bypass the sink.
            drop(sink);
            let options = dropdown_options(&dataset);
            let slider = payload_slider(bounds);
            let stdout = io::stdout().lock();
            let written = match cli.format {
                Format::Csv => CsvChartWriter::new(stdout).write_widgets(&options, &slider),
                Format::Json => JsonChartWriter::new(stdout).write_widgets(&options, &slider),
            };
            written.into_diagnostic()?;
        }
        Some(Command::Replay { script }) => {
            let source: Box<dyn BufRead> = match script {
                Some(path) => Box::new(BufReader::new(File::open(path).into_diagnostic()?)),
                None => Box::new(io::stdin().lock()),
            };
            let mut dashboard = Dashboard::new(&dataset, sink).into_diagnostic()?;
            dashboard.render_all().into_diagnostic()?;
            for event_result in EventScript::new(source).events() {
                match event_result {
                    Ok(event) => dashboard.handle(event).into_diagnostic()?,
                    Err(e) => {
                        eprintln!("Error reading event: {}", e);
                    }
                }
            }
        }
    }

    Ok(())
}
