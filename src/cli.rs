use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about = "Open a scientific paper from its journal reference", long_about = None)]
pub struct Cli {
    /// Print the resolved URL without opening a browser
    #[arg(short = 'n', long)]
    pub no_browser: bool,

    /// Log what is being requested (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// JOURNAL VOLUME PAGE, `doi DOI`, `arxiv ID`, `journals` or `autotest`
    #[arg(value_name = "REF", trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}
