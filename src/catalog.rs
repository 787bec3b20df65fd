use std::{collections::BTreeMap, path::Path};

use crate::{
    error::OutforgeResult,
    generate::Generator,
    outfit::OutfitDef,
    param::Param,
};

/// The built-in outfit lines.
///
/// TODO: the stinger, barb, fang, talon and claw organ lines still need
/// stat tables and templates.
pub fn builtin_outfits() -> Vec<OutfitDef> {
    vec![OutfitDef {
        name: "pincer".to_string(),
        template: "pincer.xml.template".to_string(),
        params: table(&[
            ("price", Param::lerp(4500.0, 20000.0)),
            ("damage", Param::lerp_round(8.0, 17.0)),
            ("energy", Param::from(4)),
            ("range", Param::lerp_round(750.0, 900.0)),
            ("falloff", Param::lerp_round(450.0, 750.0)),
            ("speed", Param::lerp_round(550.0, 700.0)),
            ("heatup", Param::lerp_round(25.0, 40.0)),
        ]),
        stages: vec![
            "Pincer Organ Stage I".to_string(),
            "Pincer Organ Stage II".to_string(),
            "Pincer Organ Stage III".to_string(),
        ],
    }]
}

fn table(entries: &[(&str, Param)]) -> BTreeMap<String, Param> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Render every definition in `defs`: templates come from `templates_dir`,
/// output files land in `out_dir`. Stops at the first failure.
pub fn generate_all(defs: &[OutfitDef], templates_dir: &Path, out_dir: &Path) -> OutforgeResult<()> {
    for def in defs {
        def.validate()?;
        let generator = Generator::from_path(&templates_dir.join(&def.template), def.params.clone())?;
        generator.run(&def.stages, out_dir)?;
    }
    Ok(())
}
