mod cli;
mod color;
mod config;
mod error;
mod gradient;
mod number;
mod picker;
mod report;
mod session;
mod slider;
mod space;

use std::io;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, ConfigAction, ConfigSetArgs};
use config::{AppConfig, OutputFormat};
use error::AppError;
use gradient::Canvas;
use picker::Picker;
use report::Report;
use session::Session;
use space::ColorFormat;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = config::load_config();
    if let Some(width) = cli.width {
        config.canvas_width = width;
    }
    if let Some(height) = cli.height {
        config.canvas_height = height;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }

    if let Err(e) = dispatch_command(cli.command.unwrap_or(Commands::Session), &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .finish();

    // a subscriber may already be set when embedded in another process
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn dispatch_command(cmd: Commands, config: &AppConfig) -> Result<(), AppError> {
    match cmd {
        Commands::Slider { position, x, y } => {
            let canvas = config.canvas()?;
            let mut picker = Picker::new(&canvas);
            picker.set_from_pick(x.unwrap_or(canvas.width), y.unwrap_or(0.0), &canvas);
            picker.set_from_slider(position, &canvas);
            print_report(&Report::of(&picker), config.output)
        }
        Commands::Pick { x, y, slider } => {
            let canvas = config.canvas()?;
            let mut picker = Picker::new(&canvas);
            picker.set_from_slider(slider, &canvas);
            picker.set_from_pick(x, y, &canvas);
            print_report(&Report::of(&picker), config.output)
        }
        Commands::Convert { text, from } => {
            let canvas = config.canvas()?;
            handle_convert(&text, from, &canvas, config.output)
        }
        Commands::Hex2dec { text } => {
            match number::hex_to_decimal(&text) {
                Some(value) => println!("{}", value),
                None => exit_with(&format!("'{}' is not a hexadecimal number", text)),
            }
            Ok(())
        }
        Commands::Dec2hex { text } => {
            match number::decimal_to_hex(&text) {
                Some(value) => println!("{}", value),
                None => exit_with(&format!("'{}' is not a decimal number", text)),
            }
            Ok(())
        }
        Commands::Session => {
            let canvas = config.canvas()?;
            let mut session = Session::new(canvas, config.output);
            let stdin = io::stdin();
            session
                .run(stdin.lock(), io::stdout())
                .map_err(AppError::Session)
        }
        Commands::Config { action } => handle_config(action, config),
    }
}

fn handle_convert(
    text: &str,
    from: Option<ColorFormat>,
    canvas: &Canvas,
    output: OutputFormat,
) -> Result<(), AppError> {
    let Some(format) = from.or_else(|| ColorFormat::detect(text)) else {
        exit_with(&format!("Could not tell what color format '{}' is", text));
    };

    let mut picker = Picker::new(canvas);
    match format.parse(text) {
        Ok(color) => {
            picker.display(color, canvas);
            print_report(&Report::of(&picker), output)
        }
        Err(e) => exit_with(&e.to_string()),
    }
}

fn handle_config(action: ConfigAction, config: &AppConfig) -> Result<(), AppError> {
    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigAction::Path => {
            println!("{}", config::config_path()?.display());
        }
        ConfigAction::Set(ConfigSetArgs {
            canvas_width,
            canvas_height,
            output,
        }) => {
            // start from the file, not from the CLI overrides
            let mut saved = config::load_config();
            if let Some(width) = canvas_width {
                saved.canvas_width = width;
            }
            if let Some(height) = canvas_height {
                saved.canvas_height = height;
            }
            if let Some(output) = output {
                saved.output = output;
            }
            let path = config::save_config(&saved)?;
            println!("Saved {}", path.display());
        }
    }
    Ok(())
}

fn print_report(report: &Report, output: OutputFormat) -> Result<(), AppError> {
    match output {
        OutputFormat::Text => println!("{}", report.render()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn exit_with(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
