use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Regular expression to translate (default: one line from stdin)
    pub pattern: Option<String>,

    /// Amount of random sentences to generate from the grammar
    #[arg(short = 'n', long, value_name = "AMOUNT")]
    pub samples: Option<u32>,

    /// Print only the grammar, without the alphabet
    #[arg(short, long)]
    pub quiet: bool
}
