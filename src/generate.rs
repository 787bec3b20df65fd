use std::{collections::BTreeMap, fs, path::Path};

use crate::{
    error::{OutforgeError, OutforgeResult},
    param::{Param, Value, stage_position},
    template::Template,
};

/// Extension of every generated definition file.
pub const OUTPUT_EXTENSION: &str = "xml";

/// Renders one definition file per upgrade stage from a template and a
/// parameter table.
///
/// The template text and the table are fixed at construction; parameter
/// values stay unevaluated until [`Generator::run`], which samples the
/// interpolated entries at each stage's normalized position.
#[derive(Clone, Debug)]
pub struct Generator {
    text: String,
    params: BTreeMap<String, Param>,
}

impl Generator {
    /// Load the template from `path`.
    pub fn from_path(path: &Path, params: BTreeMap<String, Param>) -> OutforgeResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| OutforgeError::TemplateNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(text, params))
    }

    pub fn from_text(text: impl Into<String>, params: BTreeMap<String, Param>) -> Self {
        Self {
            text: text.into(),
            params,
        }
    }

    /// Render one file per stage into `out_dir`.
    ///
    /// Fail-fast: the first template or IO error aborts the remaining
    /// stages; files already written stay on disk.
    #[tracing::instrument(skip(self), fields(stages = stages.len()))]
    pub fn run(&self, stages: &[String], out_dir: &Path) -> OutforgeResult<()> {
        if stages.is_empty() {
            return Err(OutforgeError::validation("stage sequence is empty"));
        }
        let template = Template::parse(&self.text)?;

        for (k, stage) in stages.iter().enumerate() {
            let x = stage_position(k, stages.len());
            let vars = eval_stage(&self.params, stage, x);
            let rendered = template.render(&vars)?;

            let path = out_dir.join(output_file_name(stage));
            fs::write(&path, rendered).map_err(|source| OutforgeError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(stage = %stage, path = %path.display(), "wrote definition file");
        }

        Ok(())
    }
}

/// Evaluated parameter table for one stage: interpolated entries sampled at
/// `x`, constants passed through, and `name` bound to the stage name. The
/// stage name wins over any `name` entry in the table.
pub fn eval_stage(
    params: &BTreeMap<String, Param>,
    stage: &str,
    x: f64,
) -> BTreeMap<String, Value> {
    let mut vars: BTreeMap<String, Value> = params
        .iter()
        .map(|(key, param)| (key.clone(), param.sample(x)))
        .collect();
    vars.insert("name".to_string(), Value::Text(stage.to_string()));
    vars
}

/// Output file identity of a stage: lowercased, spaces to underscores,
/// `.xml` appended.
pub fn output_file_name(stage: &str) -> String {
    format!(
        "{}.{OUTPUT_EXTENSION}",
        stage.to_lowercase().replace(' ', "_")
    )
}
