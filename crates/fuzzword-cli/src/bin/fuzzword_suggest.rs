// fuzzword-suggest: Rank dictionary words by similarity to each query.
//
// Usage:
//   fuzzword-suggest [-d DICT_PATH] [--config PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Dictionary file, or directory containing dictionary.txt
//   --config PATH            JSON engine configuration
//   -n, --max-suggestions N  Maximum number of suggestions (default: 5)
//   --json                   One JSON object per word
//   --timing                 Report search time in milliseconds
//   -h, --help               Print help

use std::io::{self, BufRead, Write};
use std::time::Instant;

use fuzzword_core::character::is_word_like;
use fuzzword_suggest::SpellChecker;

struct Options {
    max_suggestions: usize,
    json: bool,
    timing: bool,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = fuzzword_cli::parse_dict_path(&args);
    let (config_path, args) = fuzzword_cli::parse_config_path(&args);

    if fuzzword_cli::wants_help(&args) {
        println!("fuzzword-suggest: Rank dictionary words by similarity.");
        println!();
        println!("Usage: fuzzword-suggest [-d DICT_PATH] [--config PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Dictionary file or directory with dictionary.txt");
        println!("  --config PATH            JSON engine configuration");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  --json                   Print one JSON object per word");
        println!("  --timing                 Report search time in milliseconds");
        println!("  -h, --help               Print this help");
        return;
    }

    let (max_suggestions, args) =
        fuzzword_cli::take_max_suggestions(&args).unwrap_or_else(|e| fuzzword_cli::fatal(&e));
    let mut options = Options {
        max_suggestions,
        json: false,
        timing: false,
    };
    let mut words: Vec<String> = Vec::new();

    for arg in &args {
        if arg == "--json" {
            options.json = true;
        } else if arg == "--timing" {
            options.timing = true;
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    fuzzword_cli::init_logging();
    let checker = fuzzword_cli::load_checker(dict_path.as_deref(), config_path.as_deref())
        .unwrap_or_else(|e| fuzzword_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
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
            suggest_word(word, &checker, &options, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &checker, &options, &mut out);
        }
    }
}

fn suggest_word(word: &str, checker: &SpellChecker, options: &Options, out: &mut impl Write) {
    if !is_word_like(word) {
        eprintln!("{word}: not a word (empty or contains digits)");
        return;
    }

    let started = Instant::now();
    let correct = checker.check_word(word);
    let suggestions = checker.suggest(word, options.max_suggestions);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if options.json {
        let mut record = serde_json::json!({
            "word": word,
            "correct": correct,
            "suggestions": suggestions,
        });
        if options.timing {
            record["elapsed_ms"] = serde_json::json!(elapsed_ms);
        }
        let _ = writeln!(out, "{record}");
        return;
    }

    if correct {
        let _ = writeln!(out, "{word} (correct)");
    } else if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
    }
    if !correct {
        for entry in &suggestions {
            let _ = writeln!(out, "  {} {:.4}", entry.word, entry.score);
        }
    }
    if options.timing {
        let _ = writeln!(out, "  search time: {elapsed_ms:.3} ms");
    }
}
