use std::collections::HashMap;
use std::fs;

use chrono::{TimeZone, Utc};
use speculate2::speculate;
use statusboard::data::TableData;
use statusboard::error::RenderError;
use statusboard::models::{FeatureRecord, RustcVersion, Stabilization};
use statusboard::page::{generate, PageShell};

fn record(title: &str) -> FeatureRecord {
    FeatureRecord {
        title: title.to_string(),
        rfc: None,
        repo: None,
        tracking: None,
        stabilized: None,
        unresolved: None,
    }
}

fn sample_tables() -> TableData {
    let mut stabilized = record("`async`/`await` syntax");
    stabilized.stabilized = Some(Stabilization {
        version: "1.39".to_string(),
        pr: 63209,
    });
    HashMap::from([
        ("blockers".to_string(), vec![stabilized, record("pinning")]),
        ("ecosystem".to_string(), vec![record("tokio")]),
    ])
}

fn shell() -> PageShell {
    PageShell::new("Are we async yet?")
        .section("blockers", "Blockers")
        .section("ecosystem", "Ecosystem")
}

fn stable(minor: u32) -> RustcVersion {
    RustcVersion { major: 1, minor }
}

speculate! {
    describe "shell rendering" {
        before {
            let generated = Utc.with_ymd_and_hms(2019, 11, 7, 12, 0, 0).unwrap();
        }

        it "renders one list per section, in shell order" {
            let html = shell().render(&sample_tables(), stable(40), generated).unwrap();
            let blockers = html.find("<ul id=\"blockers\">").expect("blockers list");
            let ecosystem = html.find("<ul id=\"ecosystem\">").expect("ecosystem list");
            assert!(blockers < ecosystem);
            assert!(html.contains("<h2>Blockers</h2>"));
            assert!(html.contains("<title>Are we async yet?</title>"));
        }

        it "stamps the generation time into the footer" {
            let html = shell().render(&sample_tables(), stable(40), generated).unwrap();
            assert!(html.contains("Generated at "));
            assert!(html.contains("Nov 2019 12:00:00 +0000"));
        }

        it "fails when a section has no table" {
            let shell = PageShell::new("x").section("missing", "Missing");
            let err = shell.render(&sample_tables(), stable(40), generated).unwrap_err();
            assert!(matches!(err, RenderError::MissingSection(id) if id == "missing"));
        }
    }

    describe "generate" {
        it "writes index.html into a fresh out dir" {
            let tmp = tempfile::tempdir().unwrap();
            let out = tmp.path().join("out");
            generate(&shell(), &sample_tables(), stable(40), &out, None).unwrap();
            let html = fs::read_to_string(out.join("index.html")).unwrap();
            assert!(html.contains("<ul id=\"blockers\">"));
        }

        it "clears leftovers from a previous run" {
            let tmp = tempfile::tempdir().unwrap();
            let out = tmp.path().join("out");
            fs::create_dir_all(&out).unwrap();
            fs::write(out.join("stale.html"), "old").unwrap();
            generate(&shell(), &sample_tables(), stable(40), &out, None).unwrap();
            assert!(!out.join("stale.html").exists());
            assert!(out.join("index.html").exists());
        }

        it "copies static assets next to the page" {
            let tmp = tempfile::tempdir().unwrap();
            let statics = tmp.path().join("static");
            fs::create_dir_all(&statics).unwrap();
            fs::write(statics.join("style.css"), "body {}").unwrap();
            let out = tmp.path().join("out");
            generate(&shell(), &sample_tables(), stable(40), &out, Some(&statics)).unwrap();
            assert_eq!(fs::read_to_string(out.join("style.css")).unwrap(), "body {}");
        }

        it "surfaces render failures instead of writing output" {
            let tmp = tempfile::tempdir().unwrap();
            let out = tmp.path().join("out");
            let mut bad = record("broken");
            bad.stabilized = Some(Stabilization {
                version: "nightly".to_string(),
                pr: 1,
            });
            let tables = HashMap::from([("blockers".to_string(), vec![bad])]);
            let shell = PageShell::new("x").section("blockers", "Blockers");
            assert!(generate(&shell, &tables, stable(40), &out, None).is_err());
            assert!(!out.join("index.html").exists());
        }
    }
}
