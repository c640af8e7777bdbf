// Answer validation.
//
// Grades a player's guess against a puzzle's answer key: an option label
// for the 3D modality, a typed node id for the 2D modality. A wrong path
// guess reveals the correct destination in its feedback line so the player
// can trace where the path actually led.
//
// This is the whole of the engine's scoring surface — streaks, scores, and
// UI transitions belong to the external game controller.

use crate::puzzle::{PathPuzzle, VoxelPuzzle};
use crate::types::OptionLabel;
use serde::{Deserialize, Serialize};

/// Outcome of grading a single guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgement {
    pub correct: bool,
    /// User-facing feedback line.
    pub feedback: String,
}

/// Grade a multiple-choice guess against a voxel puzzle.
pub fn judge_voxel_guess(puzzle: &VoxelPuzzle, guess: OptionLabel) -> Judgement {
    if guess == puzzle.answer_label() {
        Judgement {
            correct: true,
            feedback: "Correct".to_string(),
        }
    } else {
        Judgement {
            correct: false,
            feedback: "Incorrect structure".to_string(),
        }
    }
}

/// Grade a typed node-id guess against a path puzzle.
pub fn judge_path_guess(puzzle: &PathPuzzle, guess: u32) -> Judgement {
    if guess == puzzle.answer_id.0 {
        Judgement {
            correct: true,
            feedback: "Correct".to_string(),
        }
    } else {
        Judgement {
            correct: false,
            feedback: format!("Wrong destination. It was #{}", puzzle.answer_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PathConfig, VoxelConfig};
    use crate::puzzle::{generate_path_puzzle, generate_voxel_puzzle};
    use parallax_prng::PuzzleRng;

    #[test]
    fn correct_voxel_guess() {
        let mut rng = PuzzleRng::new(42);
        let puzzle = generate_voxel_puzzle(&VoxelConfig::default(), &mut rng);
        let judgement = judge_voxel_guess(&puzzle, puzzle.answer_label());
        assert!(judgement.correct);
        assert_eq!(judgement.feedback, "Correct");
    }

    #[test]
    fn wrong_voxel_guess() {
        let mut rng = PuzzleRng::new(42);
        let puzzle = generate_voxel_puzzle(&VoxelConfig::default(), &mut rng);
        let wrong = OptionLabel::ALL
            .into_iter()
            .find(|&l| l != puzzle.answer_label())
            .unwrap();
        let judgement = judge_voxel_guess(&puzzle, wrong);
        assert!(!judgement.correct);
        assert_eq!(judgement.feedback, "Incorrect structure");
    }

    #[test]
    fn correct_path_guess() {
        let mut rng = PuzzleRng::new(7);
        let puzzle = generate_path_puzzle(&PathConfig::default(), &mut rng);
        assert!(judge_path_guess(&puzzle, puzzle.answer_id.0).correct);
    }

    #[test]
    fn wrong_path_guess_reveals_the_answer() {
        let mut rng = PuzzleRng::new(7);
        let puzzle = generate_path_puzzle(&PathConfig::default(), &mut rng);
        // Every id other than the answer must be judged incorrect.
        for guess in 0..puzzle.nodes.len() as u32 {
            if guess == puzzle.answer_id.0 {
                continue;
            }
            let judgement = judge_path_guess(&puzzle, guess);
            assert!(!judgement.correct);
            assert_eq!(
                judgement.feedback,
                format!("Wrong destination. It was #{}", puzzle.answer_id)
            );
        }
    }

    #[test]
    fn out_of_range_path_guess_is_just_wrong() {
        let mut rng = PuzzleRng::new(7);
        let puzzle = generate_path_puzzle(&PathConfig::default(), &mut rng);
        assert!(!judge_path_guess(&puzzle, 9999).correct);
    }
}
