use clap::Parser;

/// Calendar facts for a year: doomsday, Easter, Pascha, cycles and DST dates.
#[derive(Parser)]
#[command(
    name = "paschalion",
    version,
    about = "Ecclesiastical and civil calendar facts for any year"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the report for this year and exit instead of prompting.
    /// May be given more than once.
    #[arg(
        short,
        long = "year",
        value_name = "YEAR",
        value_parser = paschalion::parse_year,
        allow_negative_numbers = true
    )]
    pub years: Vec<i64>,

    /// Do not clear the terminal before each prompt.
    #[arg(long)]
    pub no_clear: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_and_negative_years() {
        let cli = Cli::try_parse_from(["paschalion", "-y", "2024", "--year", "-44"]).unwrap();
        assert_eq!(cli.years, vec![2024, -44]);
        assert!(!cli.no_clear);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn rejects_non_integer_year() {
        assert!(Cli::try_parse_from(["paschalion", "--year", "soon"]).is_err());
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["paschalion", "-vv", "--no-clear"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_clear);
        assert!(cli.years.is_empty());
    }
}
