use matchpoint_core::model::format::MatchFormat;
use matchpoint_core::model::outcome::MatchDescriptor;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Match record loaded from YAML: the match descriptor plus the score entry
/// exactly as the reporter typed it. Score fields stay raw strings; the
/// engine decides what they mean.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub match_id: String,
    pub player1: PlayerRecord,
    pub player2: PlayerRecord,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
    #[serde(default)]
    pub retired: Option<OverrideRecord>,
    #[serde(default)]
    pub walkover: Option<OverrideRecord>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SetRecord {
    #[serde(default)]
    pub player1_games: String,
    #[serde(default)]
    pub player2_games: String,
    #[serde(default)]
    pub player1_tiebreak: String,
    #[serde(default)]
    pub player2_tiebreak: String,
}

/// Early-termination block naming the winner by participant id.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OverrideRecord {
    pub winner_id: String,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read record {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse record {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid record in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: RecordValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum RecordValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

fn invalid(field: &str, message: impl Into<String>) -> RecordValidationError {
    RecordValidationError::InvalidField {
        field: field.to_string(),
        message: message.into(),
    }
}

impl MatchRecord {
    /// Load a record from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| RecordError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let record: MatchRecord =
            serde_yaml::from_reader(reader).map_err(|source| RecordError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        record.validate().map_err(|source| RecordError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(record)
    }

    /// Check the record's surface shape without touching the scoring rules.
    /// The engine itself cannot represent "retired and walkover at once",
    /// but a YAML file can write both blocks, so they are policed here.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.match_id.trim().is_empty() {
            return Err(invalid("match_id", "must not be blank"));
        }
        if self.player1.id.trim().is_empty() || self.player2.id.trim().is_empty() {
            return Err(invalid("players", "participant ids must not be blank"));
        }
        if self.player1.id == self.player2.id {
            return Err(invalid("players", "participants must be distinct"));
        }

        let total_sets = MatchFormat::best_of_three().total_sets();
        if self.sets.len() > total_sets {
            return Err(invalid(
                "sets",
                format!("at most {total_sets} set entries are allowed"),
            ));
        }

        if self.retired.is_some() && self.walkover.is_some() {
            return Err(invalid(
                "retired/walkover",
                "a match cannot be both retired and a walkover",
            ));
        }
        for (field, block) in [("retired", &self.retired), ("walkover", &self.walkover)] {
            if let Some(record) = block {
                if record.winner_id != self.player1.id && record.winner_id != self.player2.id {
                    return Err(invalid(
                        field,
                        format!("winner_id '{}' is not a participant", record.winner_id),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn descriptor(&self) -> MatchDescriptor {
        MatchDescriptor {
            id: self.match_id.clone(),
            player1_id: self.player1.id.clone(),
            player1_name: self.player1.name.clone(),
            player2_id: self.player2.id.clone(),
            player2_name: self.player2.name.clone(),
            existing_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchRecord, RecordValidationError};

    const BASIC_YAML: &str = r#"
match_id: "league-42/m7"
player1:
  id: "p-ana"
  name: "Ana"
player2:
  id: "p-bea"
  name: "Bea"
sets:
  - player1_games: "6"
    player2_games: "4"
  - player1_games: "6"
    player2_games: "6"
    player1_tiebreak: "7"
    player2_tiebreak: "5"
"#;

    #[test]
    fn loads_and_validates_basic_record() {
        let record: MatchRecord = serde_yaml::from_str(BASIC_YAML).expect("parse yaml");
        record.validate().expect("validate");

        assert_eq!(record.match_id, "league-42/m7");
        assert_eq!(record.sets.len(), 2);
        assert_eq!(record.sets[1].player1_tiebreak, "7");
        assert!(record.sets[0].player1_tiebreak.is_empty());
        assert!(record.retired.is_none());

        let descriptor = record.descriptor();
        assert_eq!(descriptor.player2_name, "Bea");
    }

    #[test]
    fn rejects_blank_match_id() {
        let yaml = BASIC_YAML.replace("league-42/m7", "  ");
        let record: MatchRecord = serde_yaml::from_str(&yaml).expect("parse");
        let err = record.validate().expect_err("should fail");
        assert!(matches!(
            err,
            RecordValidationError::InvalidField { field, .. } if field == "match_id"
        ));
    }

    #[test]
    fn rejects_duplicate_participants() {
        let yaml = BASIC_YAML.replace("p-bea", "p-ana");
        let record: MatchRecord = serde_yaml::from_str(&yaml).expect("parse");
        let err = record.validate().expect_err("should fail");
        assert!(matches!(
            err,
            RecordValidationError::InvalidField { field, .. } if field == "players"
        ));
    }

    #[test]
    fn rejects_simultaneous_override_blocks() {
        let yaml = format!(
            "{BASIC_YAML}retired:\n  winner_id: \"p-ana\"\nwalkover:\n  winner_id: \"p-ana\"\n"
        );
        let record: MatchRecord = serde_yaml::from_str(&yaml).expect("parse");
        let err = record.validate().expect_err("should fail");
        assert!(matches!(
            err,
            RecordValidationError::InvalidField { field, .. } if field == "retired/walkover"
        ));
    }

    #[test]
    fn rejects_override_winner_outside_the_match() {
        let yaml = format!("{BASIC_YAML}walkover:\n  winner_id: \"p-zoe\"\n");
        let record: MatchRecord = serde_yaml::from_str(&yaml).expect("parse");
        let err = record.validate().expect_err("should fail");
        assert!(matches!(
            err,
            RecordValidationError::InvalidField { field, .. } if field == "walkover"
        ));
    }

    #[test]
    fn rejects_too_many_set_entries() {
        let yaml = format!(
            "{BASIC_YAML}  - player1_games: \"6\"\n    player2_games: \"1\"\n  - player1_games: \"6\"\n    player2_games: \"2\"\n"
        );
        let record: MatchRecord = serde_yaml::from_str(&yaml).expect("parse");
        let err = record.validate().expect_err("should fail");
        assert!(matches!(
            err,
            RecordValidationError::InvalidField { field, .. } if field == "sets"
        ));
    }
}
