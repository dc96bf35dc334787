use std::time::Instant;

use est_g2p::{process_words, BatchOptionsBuilder, Language};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut language = None;
    let mut words = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--language" {
            let name = args
                .next()
                .ok_or("--language requires a value (e.g. mandarin)")?;
            language = Some(
                Language::from_name(&name)
                    .ok_or_else(|| format!("unknown language {name:?}"))?,
            );
        } else {
            words.push(arg);
        }
    }

    if words.is_empty() {
        eprintln!("usage: convert [--language NAME] WORD...");
        eprintln!("languages: mandarin cantonese japanese english korean");
        std::process::exit(2);
    }

    let mut builder = BatchOptionsBuilder::default();
    if let Some(language) = language {
        builder.language(language);
    }
    let options = builder.build()?;

    let start = Instant::now();
    let report = process_words(words.iter().map(String::as_str), &options);
    let elapsed = start.elapsed();

    for (word, converted) in words.iter().zip(&report.words) {
        match converted {
            Some(c) => println!("{word:>12}  [{}]  {}", c.language, c.phonemes),
            None => println!("{word:>12}  (marker)"),
        }
    }

    println!();
    println!("{}", report.counts.summary());
    println!("Converted {} words in {:.2?}", report.counts.total(), elapsed);

    Ok(())
}
