//! textwriter - render the built-in text generation samples

use std::borrow::BorrowMut;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use textwriter::{
    BadgeStyle, HtmlWriter, IndentWriter, LineEnding, MarkdownWriter, WriterConfig,
    clamp_indent_unit,
};

#[derive(Parser)]
#[command(name = "textwriter")]
#[command(version, about = "Render indented text generation samples", long_about = None)]
#[command(after_help = "EXAMPLES:
    textwriter                       Print every sample
    textwriter html --tabs           Print the HTML sample indented with tabs
    textwriter markdown -o out.md    Save the Markdown sample to out.md")]
struct Cli {
    /// Samples to render (all when omitted)
    #[arg(value_enum, value_name = "SAMPLE")]
    samples: Vec<Sample>,

    /// Save the rendered text to FILE instead of printing it
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON file with writer settings (indent_unit, indent_char, line_ending)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Characters per indent level; negative values count as 0
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    indent_size: Option<i64>,

    /// Character used for indentation
    #[arg(long, value_name = "CHAR", conflicts_with = "tabs")]
    indent_char: Option<char>,

    /// Indent with one tab per level
    #[arg(long)]
    tabs: bool,

    /// Use CRLF line endings
    #[arg(long)]
    crlf: bool,

    /// Print a JSON object mapping each sample name to its text
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Log details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Sample {
    /// Class outline using explicit indent and outdent
    Basic,
    /// The same outline using curly blocks
    Block,
    /// Nested HTML tags
    Html,
    /// README-style Markdown
    Markdown,
}

impl Sample {
    const ALL: [Sample; 4] = [Sample::Basic, Sample::Block, Sample::Html, Sample::Markdown];

    fn name(self) -> &'static str {
        match self {
            Sample::Basic => "basic",
            Sample::Block => "block",
            Sample::Html => "html",
            Sample::Markdown => "markdown",
        }
    }

    fn write<B: BorrowMut<String>>(self, w: &mut IndentWriter<B>) {
        match self {
            Sample::Basic => basic_sample(w),
            Sample::Block => block_sample(w),
            Sample::Html => html_sample(w),
            Sample::Markdown => markdown_sample(w),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = load_config(cli)?;
    let samples = if cli.samples.is_empty() {
        Sample::ALL.to_vec()
    } else {
        cli.samples.clone()
    };

    if cli.json {
        let rendered: BTreeMap<&str, String> = samples
            .iter()
            .map(|&sample| {
                let mut w = IndentWriter::with_config(config.clone());
                sample.write(&mut w);
                (sample.name(), w.into_inner())
            })
            .collect();
        let json = serde_json::to_string_pretty(&rendered).map_err(|e| e.to_string())?;
        return print_stdout(&format!("{json}\n")).map_err(|e| e.to_string());
    }

    let mut w = IndentWriter::with_config(config);
    for (idx, sample) in samples.iter().enumerate() {
        if idx > 0 {
            w.new_line(1);
        }
        log::debug!("rendering {} sample", sample.name());
        sample.write(&mut w);
    }

    match &cli.output {
        Some(path) => {
            w.save_to(path).map_err(|e| e.to_string())?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        None => print_stdout(w.as_str()).map_err(|e| e.to_string()),
    }
}

fn load_config(cli: &Cli) -> Result<WriterConfig, String> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => WriterConfig::default(),
    };

    if cli.tabs {
        config = config.with_indent_char('\t').with_indent_unit(1);
    }
    if let Some(size) = cli.indent_size {
        config = config.with_indent_unit(clamp_indent_unit(size));
    }
    if let Some(indent_char) = cli.indent_char {
        config = config.with_indent_char(indent_char);
    }
    if cli.crlf {
        config = config.with_line_ending(LineEnding::CrLf);
    }

    log::debug!("writer config: {config:?}");
    Ok(config)
}

fn read_config(path: &Path) -> Result<WriterConfig, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))
}

fn print_stdout(text: &str) -> textwriter::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

// ============================================================================
// Samples
// ============================================================================

fn basic_sample<B: BorrowMut<String>>(w: &mut IndentWriter<B>) {
    w.write_line("class ClassName")
        .write_line("{")
        .indent()
        .write_line("public int SomeValue { get; set; }")
        .write_line("")
        .write_line("public int SomeMethod(int value) {")
        .indent()
        .write_line("return value * 2;")
        .outdent()
        .write_line("}")
        .outdent()
        .write_line("}");
}

fn block_sample<B: BorrowMut<String>>(w: &mut IndentWriter<B>) {
    w.write_line("class ClassName").block_curly(|b| {
        b.write_line("public int SomeValue { get; set; }")
            .write_line("")
            .write("public int SomeMethod(int value) ")
            .block_curly(|b| {
                b.write_line("return value * 2;");
            });
    });
}

fn html_sample<B: BorrowMut<String>>(w: &mut IndentWriter<B>) {
    w.html_tag("div", Some("class='some-class'"), |c| {
        c.html_line_tag("p", "Some paragraph text", None)
            .html_tag("div", None, |c| {
                c.write_line("Inner text");
            })
            .html_self_closing_tag("hr", None);
    });
}

fn markdown_sample<B: BorrowMut<String>>(w: &mut IndentWriter<B>) {
    w.md_badge_crates_io("textwriter", BadgeStyle::Flat)
        .write(" ")
        .md_badge_license_mit(BadgeStyle::Flat)
        .write(" ")
        .md_badge("tests", "passing", "green", BadgeStyle::Flat)
        .new_line(2);

    w.md_anchor("overview").new_line(1).write_line("# Overview").new_line(1);
    w.write("A ")
        .md_bold("fluent")
        .write(" writer with ")
        .md_italic("automatic")
        .write(" indentation. Start with ")
        .md_code("IndentWriter::new()")
        .write(".")
        .md_line_break()
        .write("See the ")
        .md_link("overview", "#overview")
        .write_line(".");

    w.md_hr();

    w.md_table_header("LCR", &["Helper", "Kind", "Indents"])
        .md_table_row(&["block", "core", "yes"])
        .md_table_row(&["wrap", "core", "no"])
        .md_table_row(&["html_tag", "html", "yes"]);
}
