use std::collections::{BTreeMap, BTreeSet};

use crate::{
    error::{OutforgeError, OutforgeResult},
    generate::output_file_name,
    param::Param,
};

/// One outfit line: a template, its stat table, and the ordered upgrade
/// stages to render. The stat table is fixed per definition and shared by
/// every stage; each stage only varies the normalized position the
/// interpolated entries are sampled at.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OutfitDef {
    /// Catalog key, e.g. `"pincer"`.
    pub name: String,
    /// Template file name under the template directory.
    pub template: String,
    pub params: BTreeMap<String, Param>,
    /// Stage names, first to last. Also the output file identities.
    pub stages: Vec<String>,
}

impl OutfitDef {
    pub fn validate(&self) -> OutforgeResult<()> {
        if self.template.is_empty() {
            return Err(OutforgeError::validation(format!(
                "outfit '{}' has no template file name",
                self.name
            )));
        }
        if self.stages.is_empty() {
            return Err(OutforgeError::validation(format!(
                "outfit '{}' has an empty stage sequence",
                self.name
            )));
        }

        let mut outputs = BTreeSet::new();
        for stage in &self.stages {
            if stage.is_empty() {
                return Err(OutforgeError::validation(format!(
                    "outfit '{}' has an empty stage name",
                    self.name
                )));
            }
            if !outputs.insert(output_file_name(stage)) {
                return Err(OutforgeError::validation(format!(
                    "outfit '{}': stage '{}' collides with an earlier stage's output file",
                    self.name, stage
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(stages: &[&str]) -> OutfitDef {
        OutfitDef {
            name: "test".to_string(),
            template: "test.xml.template".to_string(),
            params: BTreeMap::new(),
            stages: stages.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn accepts_distinct_stages() {
        assert!(def(&["Stage I", "Stage II"]).validate().is_ok());
    }

    #[test]
    fn rejects_empty_stage_sequence() {
        let err = def(&[]).validate().unwrap_err();
        assert!(matches!(err, OutforgeError::Validation(_)));
    }

    #[test]
    fn rejects_output_file_collisions() {
        // distinct stage names, same lowercased/underscored file
        let err = def(&["Stage I", "STAGE i"]).validate().unwrap_err();
        assert!(matches!(err, OutforgeError::Validation(_)));
    }
}
