use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

use grate_disasm::InputFormat;
use grate_shader::ShaderStage;

#[derive(Parser)]
#[command(name = "grate-disasm")]
#[command(about = "Disassemble GR3D shader command streams", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input file encoding
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Binary)]
    format: Format,

    /// Suppress progress output (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Little-endian 32-bit words
    Binary,
    /// Whitespace or comma separated hex words
    Hex,
}

impl From<Format> for InputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Binary => InputFormat::Binary,
            Format::Hex => InputFormat::Hex,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Disassemble a vertex program stream
    Vertex {
        /// Input stream file path
        input: PathBuf,
    },
    /// Disassemble a fragment program stream
    Fragment {
        /// Input stream file path
        input: PathBuf,
    },
    /// Disassemble a linker stream
    Linker {
        /// Input stream file path
        input: PathBuf,
    },
    /// List every command word in a stream
    Dump {
        /// Input stream file path
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let format = InputFormat::from(cli.format);
    let result = match cli.command {
        Commands::Vertex { input } => {
            grate_disasm::disassemble_file(&input, format, ShaderStage::Vertex)
        }
        Commands::Fragment { input } => {
            grate_disasm::disassemble_file(&input, format, ShaderStage::Fragment)
        }
        Commands::Linker { input } => {
            grate_disasm::disassemble_file(&input, format, ShaderStage::Linker)
        }
        Commands::Dump { input } => grate_disasm::dump_file(&input, format),
    };

    match result {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
