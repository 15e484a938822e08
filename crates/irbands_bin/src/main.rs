use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use irbands::{
    IrActiveBands, Render, SpectralRange, SvgChart, TableWriter, TextChart,
    config::Config, store,
};

/// tabulate and plot the overtone and combination bands of IR active
/// molecules
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The molecule to compute bands for. Required unless given in the
    /// config file
    #[arg(value_parser)]
    molecule: Option<String>,

    /// TOML config file. Command-line options override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lower wavelength bound in microns
    #[arg(long, requires = "max")]
    min: Option<f64>,

    /// Upper wavelength bound in microns
    #[arg(long, requires = "min")]
    max: Option<f64>,

    /// Highest harmonic order to generate
    #[arg(short, long)]
    order: Option<usize>,

    /// Write an SVG bar chart to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the table as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the table as JSON instead of text
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Also print a bar chart to stdout
    #[arg(long, default_value_t = false, conflicts_with = "json")]
    chart: bool,

    /// List the preloaded molecules and exit
    #[arg(short, long, default_value_t = false)]
    list: bool,
}

impl Args {
    /// build the effective [Config] from the optional config file with the
    /// command-line options layered on top
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match (&self.config, &self.molecule) {
            (Some(path), _) => Config::load(path)?,
            (None, Some(m)) => Config::new(m.clone()),
            (None, None) => bail!("no molecule given. see --help"),
        };
        if let Some(m) = &self.molecule {
            config.molecule = m.clone();
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            config.range = Some(SpectralRange::new(min, max)?);
        }
        if let Some(order) = self.order {
            config.max_order = order;
        }
        if self.svg.is_some() {
            config.chart = self.svg.clone();
        }
        if self.csv.is_some() {
            config.csv = self.csv.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.list {
        for profile in store::profiles() {
            println!("{profile}");
        }
        return Ok(());
    }

    let config = args.config()?;
    log::debug!("{config}");

    let bands = IrActiveBands::from_profile(config.profile()?)?
        .max_order(config.max_order);

    let mut renderers: Vec<Box<dyn Render>> = Vec::new();
    // keep stdout clean for the JSON
    if !args.json {
        renderers.push(Box::new(TableWriter(std::io::stdout())));
    }
    if args.chart {
        renderers.push(Box::new(TextChart::new(std::io::stdout())));
    }
    if let Some(path) = &config.chart {
        renderers.push(Box::new(SvgChart::new(path)));
    }

    let range = config.range.map(|r| [r.min, r.max]);
    let table = bands.compute_combinations_and_show(range, &mut renderers)?;
    if args.json {
        println!("{}", table.to_json_pretty()?);
    }

    if let Some(path) = &config.csv {
        table
            .export_to(path)
            .with_context(|| format!("exporting to {}", path.display()))?;
    }

    Ok(())
}
