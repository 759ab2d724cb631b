//! Command-line and environment configuration.

use clap::{ArgAction, Parser};
use sentencify_core::model::{BuilderSettings, LessonId, SettingsError};

#[derive(Debug, Parser)]
#[command(
    name = "sentencify",
    version,
    about = "Practice English sentence structure by assembling color-coded word parts"
)]
pub struct Cli {
    /// Number of slots in the sentence row.
    #[arg(
        long,
        env = "SENTENCIFY_SLOTS",
        value_name = "N",
        default_value_t = BuilderSettings::DEFAULT_SLOT_COUNT
    )]
    pub slots: usize,

    /// Shuffle each exercise's word pool when a lesson opens.
    #[arg(long, env = "SENTENCIFY_SHUFFLE")]
    pub shuffle: bool,

    /// Open this lesson (e.g. `simple`) right after launch.
    #[arg(long, env = "SENTENCIFY_LESSON", value_name = "ID")]
    pub lesson: Option<LessonId>,

    /// Increase log verbosity (-v for debug, -vv for trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidSlotCount` when `--slots` is out of range.
    pub fn builder_settings(&self) -> Result<BuilderSettings, SettingsError> {
        BuilderSettings::new(self.slots, self.shuffle)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use sentencify_core::model::LessonId;

    use super::Cli;

    #[test]
    fn explicit_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "sentencify",
            "--slots",
            "8",
            "--shuffle",
            "--lesson",
            "compound",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.slots, 8);
        assert!(cli.shuffle);
        assert_eq!(cli.lesson, Some(LessonId::new("compound")));
        assert_eq!(cli.verbose, 2);
        let settings = cli.builder_settings().unwrap();
        assert_eq!(settings.slot_count(), 8);
        assert!(settings.shuffle_parts());
    }

    #[test]
    fn zero_slots_fail_validation() {
        let cli = Cli::try_parse_from(["sentencify", "--slots", "0"]).unwrap();
        assert!(cli.builder_settings().is_err());
    }

    #[test]
    fn blank_lesson_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["sentencify", "--lesson", "  "]).is_err());
    }
}
