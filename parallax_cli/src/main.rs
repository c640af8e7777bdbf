// Parallax batch generator — CLI entry point.
//
// Generates a batch of spatial-reasoning puzzles and writes, per puzzle, a
// JSON file the rendering layer can consume, plus a single `answers.txt`
// answer key (`<identifier>: <answer>`, one line per puzzle) for automated
// grading.
//
// Usage:
//   parallax [OPTIONS]
//     --out <DIR>        Output directory (default: generated_tests)
//     --count-3d <N>     Mental-rotation puzzles to generate (default: 25)
//     --count-2d <N>     Path-integration puzzles to generate (default: 25)
//     --seed <N>         PRNG seed (default: derived from the clock)
//     --config <FILE>    JSON overrides for the generation config

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use parallax_gen::answer_key::{AnswerKeyEntry, format_answer_key};
use parallax_gen::config::GenConfig;
use parallax_gen::prng::PuzzleRng;
use parallax_gen::puzzle::{Modality, Puzzle, generate_path_puzzle, generate_voxel_puzzle};

fn main() {
    if let Err(e) = run() {
        eprintln!("parallax: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let out_dir: String = parse_flag(&args, "--out").unwrap_or_else(|| "generated_tests".to_string());
    let count_3d: u32 = parse_flag(&args, "--count-3d").unwrap_or(25);
    let count_2d: u32 = parse_flag(&args, "--count-2d").unwrap_or(25);
    let seed: u64 = parse_flag(&args, "--seed").unwrap_or_else(clock_seed);

    let config = match parse_flag::<String>(&args, "--config") {
        Some(path) => GenConfig::from_json_str(&fs::read_to_string(&path)?)?,
        None => GenConfig::default(),
    };

    println!("=== Parallax batch generator ===");
    println!("Output: {out_dir}");
    println!("Seed: {seed}");
    println!("Puzzles: {count_3d} x 3d, {count_2d} x 2d");

    let out = Path::new(&out_dir);
    fs::create_dir_all(out)?;

    let mut rng = PuzzleRng::new(seed);
    let mut entries = Vec::with_capacity((count_3d + count_2d) as usize);

    for index in 1..=count_3d {
        let puzzle = Puzzle::Voxel(generate_voxel_puzzle(&config.voxel, &mut rng));
        entries.push(write_puzzle(out, Modality::ThreeD, index, &puzzle)?);
    }
    for index in 1..=count_2d {
        let puzzle = Puzzle::Path(generate_path_puzzle(&config.path, &mut rng));
        entries.push(write_puzzle(out, Modality::TwoD, index, &puzzle)?);
    }

    let key_path = out.join("answers.txt");
    fs::write(&key_path, format_answer_key(&entries))?;
    println!("Wrote {} puzzles and {}", entries.len(), key_path.display());

    Ok(())
}

/// Write one puzzle's JSON and return its answer-key entry.
fn write_puzzle(
    out: &Path,
    modality: Modality,
    index: u32,
    puzzle: &Puzzle,
) -> Result<AnswerKeyEntry, Box<dyn std::error::Error>> {
    let entry = AnswerKeyEntry {
        modality,
        index,
        answer: puzzle.answer_text(),
    };
    let path = out.join(format!("{}.json", entry.identifier()));
    fs::write(&path, serde_json::to_string_pretty(puzzle)?)?;
    println!("Saved {} (Answer: {})", path.display(), entry.answer);
    Ok(entry)
}

/// Parse `--flag value` style arguments. Uses simple `std::env::args()`
/// matching — no clap dependency.
fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1)?.parse().ok()
}

/// Fallback seed when none is given. Determinism only matters when a seed
/// is passed explicitly.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
