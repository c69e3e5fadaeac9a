//! plotregion - plot histograms, functions and points in the terminal.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plotregion::analysis::{Function, Plottable};
use plotregion::app::App;
use plotregion::plotter::Plotter;
use plotregion::reader::{read_histogram, read_points};
use plotregion::region::PlotterRegion;
use plotregion::render::buffer_to_string;
use plotregion::ui::{self, Theme, ThemeColors};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "plotregion")]
#[command(about = "Plot histograms, functions and data points in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the plot as plain text
    Render {
        #[command(flatten)]
        inputs: Inputs,

        /// Output width in characters
        #[arg(long, default_value_t = 100)]
        width: u16,

        /// Output height in lines
        #[arg(long, default_value_t = 30)]
        height: u16,
    },
    /// Open the interactive viewer
    Show {
        #[command(flatten)]
        inputs: Inputs,
    },
}

#[derive(Args, Debug)]
struct Inputs {
    /// CSV file with x,y[,ey] columns
    #[arg(long = "points", value_name = "FILE")]
    points: Vec<PathBuf>,

    /// CSV file to histogram
    #[arg(long = "hist", value_name = "FILE")]
    hists: Vec<PathBuf>,

    /// Column histogrammed by --hist (0-based)
    #[arg(long, default_value_t = 0)]
    column: usize,

    /// Number of bins for --hist
    #[arg(long, default_value_t = 20)]
    bins: usize,

    /// Function as CODELET[:p1,p2,...], e.g. G:10,0,1
    #[arg(long = "function", value_name = "FUNCTION")]
    functions: Vec<String>,

    /// Plotter title
    #[arg(long, default_value = "")]
    title: String,

    /// Region grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Region grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Put every input into one region
    #[arg(long)]
    overlay: bool,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// X axis limits as MIN,MAX
    #[arg(long, value_name = "MIN,MAX")]
    x_limits: Option<String>,

    /// Y axis limits as MIN,MAX
    #[arg(long, value_name = "MIN,MAX")]
    y_limits: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::GruvboxDark,
            ThemeArg::Light => Theme::GruvboxLight,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &cli.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting plotregion");
    }

    match cli.command {
        Command::Render {
            inputs,
            width,
            height,
        } => {
            let theme = Theme::from(inputs.theme);
            let plotter = build_plotter(&inputs)?;
            let area = Rect::new(0, 0, width, height);
            let mut buf = Buffer::empty(area);
            plotter.draw(area, &mut buf, &ThemeColors::from_theme(&theme));
            print!("{}", buffer_to_string(&buf));
        },
        Command::Show { inputs } => {
            let theme = Theme::from(inputs.theme);
            let plotter = build_plotter(&inputs)?;
            show(App::new(plotter, theme))?;
        },
    }

    if cli.log.is_some() {
        tracing::info!("plotregion exited");
    }

    Ok(())
}

fn parse_limits(text: &str) -> Result<(f64, f64)> {
    let (min, max) = text
        .split_once(',')
        .with_context(|| format!("Limits must be MIN,MAX: {}", text))?;
    Ok((min.trim().parse()?, max.trim().parse()?))
}

fn parse_function(definition: &str) -> Result<Function> {
    let (codelet, params) = match definition.split_once(':') {
        Some((codelet, params)) => (codelet, Some(params)),
        None => (definition, None),
    };
    let mut function = Function::from_codelet(definition, codelet)?;
    if let Some(params) = params {
        let values = params
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| format!("Bad function parameters: {}", definition))?;
        function.set_parameters(&values)?;
    }
    Ok(function)
}

fn build_plotter(inputs: &Inputs) -> Result<Plotter> {
    let mut objects: Vec<Box<dyn Plottable>> = Vec::new();
    for path in &inputs.points {
        objects.push(Box::new(read_points(path)?));
    }
    for path in &inputs.hists {
        objects.push(Box::new(read_histogram(path, inputs.column, inputs.bins)?));
    }
    for definition in &inputs.functions {
        objects.push(Box::new(parse_function(definition)?));
    }

    let needed = if inputs.overlay {
        1
    } else {
        objects.len().max(1)
    };
    let columns = inputs
        .columns
        .unwrap_or_else(|| (needed as f64).sqrt().ceil() as usize);
    let rows = inputs
        .rows
        .unwrap_or_else(|| needed.div_ceil(columns.max(1)));

    let mut plotter = Plotter::new(inputs.title.as_str());
    plotter.create_regions(columns, rows)?;
    if plotter.number_of_regions() < needed {
        bail!(
            "{} inputs do not fit a {}x{} grid (use --overlay or a larger grid)",
            needed,
            columns,
            rows
        );
    }

    for (index, object) in objects.iter().enumerate() {
        let region_index = if inputs.overlay { 0 } else { index };
        let Some(region) = plotter.region_mut(region_index) else {
            continue;
        };
        region.plot(&**object, "")?;
        if !inputs.overlay {
            let title = object.to_plot_object().title().to_string();
            region.set_title(&title);
        }
    }

    for index in 0..plotter.number_of_regions() {
        let Some(region) = plotter.region_mut(index) else {
            continue;
        };
        if let Some(text) = &inputs.x_limits {
            let (min, max) = parse_limits(text)?;
            region.set_x_limits(min, max)?;
        }
        if let Some(text) = &inputs.y_limits {
            let (min, max) = parse_limits(text)?;
            region.set_y_limits(min, max)?;
        }
    }
    Ok(plotter)
}

fn show(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    (KeyModifiers::NONE, KeyCode::Tab) => app.next_region(),

                    // Region parameters
                    (KeyModifiers::NONE, KeyCode::Char('s')) => {
                        app.toggle_parameter("showStatistics");
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('L')) => {
                        app.toggle_parameter("showLegend");
                    },
                    (KeyModifiers::NONE, KeyCode::Char('i')) => {
                        app.toggle_parameter("showInfo");
                    },
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.clear_region(),

                    // Appearance
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                    (KeyModifiers::NONE, KeyCode::Char('p')) => app.cycle_palette(),

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_region(),

                    _ => {},
                }
            }
        }
    }
}
