use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_outforge")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "outforge.exe"
            } else {
                "outforge"
            });
            p
        })
}

fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

#[test]
fn cli_generate_writes_definition_files() {
    let out = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&out).unwrap();
    let stage_file = out.join("pincer_organ_stage_ii.xml");
    let _ = std::fs::remove_file(&stage_file);

    let status = std::process::Command::new(exe())
        .arg("generate")
        .arg("--templates")
        .arg(templates_dir())
        .arg("--out")
        .arg(&out)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(stage_file.exists());

    let body = std::fs::read_to_string(&stage_file).unwrap();
    assert!(body.contains("<outfit name=\"Pincer Organ Stage II\">"));
    assert!(body.contains("<damage type=\"impact\">13</damage>"));
}

#[test]
fn cli_dump_emits_parseable_json() {
    let output = std::process::Command::new(exe())
        .args(["dump", "--only", "pincer"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stages = json["pincer"].as_array().unwrap();
    assert_eq!(stages.len(), 3);
    assert_eq!(stages[0]["position"], 0.0);
    assert_eq!(stages[2]["position"], 1.0);
    assert_eq!(stages[1]["params"]["damage"], 13);
    assert_eq!(stages[0]["params"]["name"], "Pincer Organ Stage I");
}

#[test]
fn cli_generate_rejects_unknown_outfit() {
    let out = PathBuf::from("target").join("cli_smoke_unknown");
    std::fs::create_dir_all(&out).unwrap();

    let output = std::process::Command::new(exe())
        .arg("generate")
        .arg("--templates")
        .arg(templates_dir())
        .arg("--out")
        .arg(&out)
        .args(["--only", "kraken"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("kraken"));
}
