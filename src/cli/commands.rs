use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate random passwords
    Generate {
        /// Password length
        #[arg(short, long, default_value_t = 12)]
        length: usize,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Minimum number of characters from each selected class
        #[arg(long, default_value_t = 1)]
        min_each: usize,

        /// How many passwords to generate
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },

    /// Generate passphrases built from capitalized words
    Memorable {
        /// Number of words
        #[arg(short, long, default_value_t = 3)]
        words: usize,

        /// Do not append a three digit number
        #[arg(long)]
        no_number: bool,

        /// Do not append a symbol
        #[arg(long)]
        no_symbol: bool,

        /// How many passphrases to generate
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },

    /// Generate numeric PINs
    Pin {
        /// PIN length
        #[arg(short, long, default_value_t = 6)]
        length: usize,

        /// How many PINs to generate
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },

    /// Check a password against minimum requirements and score it
    Validate {
        /// Password to check
        #[arg(required = true)]
        password: String,

        /// Minimum length
        #[arg(long, default_value_t = 8)]
        min_length: usize,

        /// Do not require every character class
        #[arg(long)]
        any_classes: bool,
    },
}
