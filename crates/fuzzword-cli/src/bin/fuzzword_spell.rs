// fuzzword-spell: Check words from stdin against the dictionary.
//
// Reads words from stdin (one per line) and reports whether each word
// is in the dictionary:
//   C: word    (correct)
//   W: word    (wrong / not in the dictionary)
//   E: word (not a word)   (empty or contains digits)
//
// Usage:
//   fuzzword-spell [-d DICT_PATH] [--config PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory containing dictionary.txt
//   --config PATH          JSON engine configuration
//   -s, --suggest          Also print suggestions for misspelled words
//   -n, --max-suggestions N  Suggestions per word with -s (default: 5)
//   --path                 Print the search path of each lookup
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use fuzzword_core::character::is_word_like;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = fuzzword_cli::parse_dict_path(&args);
    let (config_path, args) = fuzzword_cli::parse_config_path(&args);

    if fuzzword_cli::wants_help(&args) {
        println!("fuzzword-spell: Check words from stdin against the dictionary.");
        println!();
        println!("Usage: fuzzword-spell [-d DICT_PATH] [--config PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!("  E: word (not a word)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Dictionary file or directory with dictionary.txt");
        println!("  --config PATH            JSON engine configuration");
        println!("  -s, --suggest            Also print suggestions for misspelled words");
        println!("  -n, --max-suggestions N  Suggestions per word with -s (default: 5)");
        println!("  --path                   Print the search path of each lookup");
        println!("  -h, --help               Print this help");
        return;
    }

    let (max_suggestions, args) =
        fuzzword_cli::take_max_suggestions(&args).unwrap_or_else(|e| fuzzword_cli::fatal(&e));
    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");
    let show_path = args.iter().any(|a| a == "--path");

    fuzzword_cli::init_logging();
    let checker = fuzzword_cli::load_checker(dict_path.as_deref(), config_path.as_deref())
        .unwrap_or_else(|e| fuzzword_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if !is_word_like(word) {
            let _ = writeln!(out, "E: {word} (not a word)");
            continue;
        }

        let (found, path) = checker.lookup(word);
        if found {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
        }
        if show_path {
            let _ = writeln!(out, "P: {}", path.join(" > "));
        }
        if !found && show_suggestions {
            for entry in checker.suggest(word, max_suggestions) {
                let _ = writeln!(out, "S: {}", entry.word);
            }
        }
    }
}
