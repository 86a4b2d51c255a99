mod report;

use crate::report::ReportJson;
use clap::{Arg, Command};
use hashdict::primes::{generate_multiplier, is_prime};
use hashdict::utils::format_thousand;
use hashdict::{HashDictionary, WordList};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const BLUE: &str = "\x1B[1;34m"; // Bold Blue
    const RESET: &str = "\x1B[0m"; // Reset color

    let matches = Command::new("Hash Dictionary")
        .about(format!(
            "{BLUE}Hashdict: collision report for a fixed-bucket chained hash table{RESET}"
        ))
        .after_help(
            "Examples:\n\
         \n\
         hashdict-rs words.txt\n\
         hashdict-rs words.txt --multiplier 97 --format json --pretty\n\
         hashdict-rs prose.txt --mode text\n\
         \n\
         The table is sized to half the word count, so the word file must\n\
         contain at least two words.\n",
        )
        .arg(
            Arg::new("input")
                .value_name("file")
                .required(true)
                .help("Word file to build the dictionary from"),
        )
        .arg(
            Arg::new("multiplier")
                .short('m')
                .long("multiplier")
                .value_name("N")
                .value_parser(clap::value_parser!(i64).range(1..))
                .help("Hash multiplier; a prime is generated when omitted"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("mode")
                .default_value("lines")
                .value_parser(["lines", "text"])
                .help("Input parsing: [lines|text] (text tokenizes prose)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("format")
                .default_value("text")
                .value_parser(["text", "json"])
                .help("Report format: [text|json]"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(clap::ArgAction::SetTrue)
                .help("Pretty-print JSON when --format json"),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .action(clap::ArgAction::SetTrue)
                .help("Disable the parallel hash precompute"),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let mode = matches.get_one::<String>("mode").map(String::as_str);
    let format = matches.get_one::<String>("format").map(String::as_str);
    let pretty_json = matches.get_flag("pretty");
    let is_parallel = !matches.get_flag("no-parallel");

    let multiplier = match matches.get_one::<i64>("multiplier") {
        Some(&m) => m as isize,
        None => generate_multiplier(),
    };
    if multiplier > 0 && !is_prime(multiplier as usize) {
        eprintln!(
            "{BLUE}Warning: multiplier {multiplier} is not prime; collisions may increase.{RESET}"
        );
    }

    let word_list = match mode {
        Some("text") => {
            let content = fs::read_to_string(input)?;
            WordList::from_text(&content)
        }
        _ => WordList::from_file(input)?,
    };
    eprintln!(
        "{BLUE}Loaded {} word(s) from {input}{RESET}",
        format_thousand(word_list.len())
    );

    let dictionary = HashDictionary::from_words_with(word_list.words(), multiplier, is_parallel)?;

    match format {
        Some("json") => {
            let dto = ReportJson::from(&dictionary);
            let json = if pretty_json {
                serde_json::to_string_pretty(&dto)?
            } else {
                serde_json::to_string(&dto)?
            };
            println!("{json}");
        }
        _ => {
            println!("{}", dictionary.report());
        }
    }

    Ok(())
}
