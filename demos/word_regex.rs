use argh::FromArgs;
use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};
use tracing_subscriber::EnvFilter;
use wordhierarchy::{
    visitor::{
        CoverageChecker, DotPrinter, DotPrinterSettings, PrinterSettings, RegexCompiler,
        TreePrinter,
    },
    WordTree,
};

#[derive(FromArgs)]
/// Build a word tree from a vocabulary file and render it
struct WordRegexArgs {
    /// output format, one of 'regex', 'dump', 'dot', or 'check'
    #[argh(option, default = "OutputFormat::Regex")]
    format: OutputFormat,

    /// include node identifiers in 'dump' and 'dot' output
    #[argh(switch)]
    display_id: bool,

    /// file with one word per line, blank lines are skipped
    #[argh(positional)]
    vocabulary_file: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: WordRegexArgs = argh::from_env();

    let vocabulary = read_vocabulary(File::open(&args.vocabulary_file)?)?;
    let tree: WordTree = vocabulary.iter().collect();

    if tree.is_empty() {
        return Err(Box::new(EmptyTreeError));
    }

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    match args.format {
        OutputFormat::Regex => writeln!(output, "{}", RegexCompiler::compile(&tree))?,
        OutputFormat::Dump => {
            let settings = PrinterSettings {
                display_id: args.display_id,
            };
            write!(output, "{}", TreePrinter::print(&tree, settings))?
        },
        OutputFormat::Dot => {
            let settings = DotPrinterSettings {
                display_node_id: args.display_id,
            };
            DotPrinter::print(&mut output, &tree, settings)?
        },
        OutputFormat::Check => {
            let found = CoverageChecker::check(&tree, vocabulary)?;
            writeln!(output, "all {found} words found")?
        },
    }

    output.flush()?;

    Ok(())
}

fn read_vocabulary(file: File) -> io::Result<Vec<String>> {
    BufReader::new(file)
        .lines()
        .filter(|line| !matches!(line, Ok(line) if line.trim().is_empty()))
        .map(|line| line.map(|line| line.trim().to_owned()))
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Regex,
    Dump,
    Dot,
    Check,
}

impl FromStr for OutputFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regex" => Ok(OutputFormat::Regex),
            "dump" => Ok(OutputFormat::Dump),
            "dot" => Ok(OutputFormat::Dot),
            "check" => Ok(OutputFormat::Check),
            _ => Err(FormatParseError(s.into())),
        }
    }
}

#[derive(Debug)]
struct FormatParseError(String);

impl Display for FormatParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unable to parse output format from argument value [{}].",
            self.0
        )
    }
}

#[derive(Debug)]
struct EmptyTreeError;

impl Display for EmptyTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There were no words to insert into the tree!")
    }
}

impl Error for EmptyTreeError {}
