//! End-to-end behaviour of the license database over a real identifier list

use licensedb::{LicenseDb, LicenseDbConfig, LicenseDbError, MemorySource};
use std::fs;
use tempfile::TempDir;

const SPDX_IDS: &str = include_str!("fixtures/spdx-ids.txt");

fn ids() -> impl Iterator<Item = &'static str> {
    SPDX_IDS.lines().map(str::trim).filter(|l| !l.is_empty())
}

fn memory_db() -> LicenseDb {
    LicenseDb::from_source(MemorySource::from_names(ids()), &LicenseDbConfig::default()).unwrap()
}

#[test]
fn test_normalize() {
    let db = memory_db();
    let cases = [
        ("GPL3+", "GPL-3.0-or-later"),
        ("gPl3", "GPL-3.0"),
        ("mIt", "MIT"),
        ("", ""),
        (
            "asl20 oR gPl-3.0-wIth-autOconf-excEption",
            "Apache-2.0 OR GPL-3.0-or-later WITH Autoconf-exception-3.0",
        ),
        ("GPL-2.0-with-bison-exception", "GPL-2.0-or-later WITH Bison-exception-2.2"),
    ];
    for (input, expected) in cases {
        assert_eq!(db.normalize(input), expected, "input {:?}", input);
    }
}

#[test]
fn test_to_short_text() {
    let db = memory_db();
    let cases = [
        ("GPL-3.0-or-later MiT", "GPL MIT"),
        ("GPL-3.0-or-later GPL-2.0-only or mIt", "GPL3 GPL2 OR MIT"),
        ("", ""),
    ];
    for (input, expected) in cases {
        assert_eq!(db.to_short_text(input), expected, "input {:?}", input);
    }
}

#[test]
fn test_extract() {
    let db = memory_db();
    let extraction =
        db.extract("bsd  fdsfsadf GpL2  Or  \n  aSl20  aNd  gPl-3.0-wIth-autOconf-excEption");
    assert_eq!(extraction.licenses, vec!["Apache-2.0", "GPL-3.0-or-later"]);
    assert_eq!(extraction.exceptions, vec!["Autoconf-exception-3.0"]);
    assert_eq!(extraction.ambiguous, vec!["BSD", "GPL-2.0"]);
    assert_eq!(extraction.unknown, vec!["fdsfsadf"]);

    assert!(db.extract("").is_empty());
}

#[test]
fn test_are_matching() {
    let db = memory_db();
    assert!(db.are_matching("GPL3 MIT", "MIT GPL3+"));
    assert!(db.are_matching("GPL", "GPL-2.0-only"));
    assert!(db.are_matching(
        "MIT OR GPL-3.0-with-gcc-exception",
        "GPL3+ MIT GCC-exception-3.1"
    ));
    assert!(!db.are_matching("GPL3", "GPL2"));
    assert!(!db.are_matching("MIT", "MIT AND Apache-2.0"));
}

#[test]
fn test_get_files() {
    let db = memory_db();
    let files = db.get_files("GPL3+ WITH GCC-exception-3.1 OR MIT");

    assert_eq!(files.licenses.len(), 2);
    assert_eq!(files.licenses["GPL-3.0-or-later"].short_name, "GPL");
    assert_eq!(
        files.licenses["GPL-3.0-or-later"].text,
        "GPL-3.0-or-later license text"
    );
    assert_eq!(files.licenses["MIT"].short_name, "MIT");
    assert_eq!(files.exceptions["GCC-exception-3.1"].short_name, "GCC");
    assert!(files.unknown.is_empty());

    let json = files.to_json().unwrap();
    assert!(json.contains("\"short_name\": \"GCC\""));
}

#[test]
fn test_resolve_glob_and_short_forms() {
    let db = memory_db();
    assert_eq!(db.resolve_glob("GPL3"), "GPL-3.0-389-ds-base-exception");
    assert_eq!(db.resolve_glob("BSD"), "BSD-1-Clause");
    assert_eq!(db.resolve_glob("not-a-glob"), "not-a-glob");

    let mut forms = db.short_forms_of("GPL-3.0-only");
    forms.sort();
    assert_eq!(forms, vec!["GPL", "GPL-3", "GPL-3.0", "GPL3", "GPL3.0"]);
}

#[test]
fn test_lookup_helpers() {
    let db = memory_db();
    assert_eq!(db.list().len(), ids().count());
    assert!(db.is_exception("Classpath-exception-2.0"));
    assert!(!db.is_exception("MIT"));
    assert_eq!(db.canonicalize("asl20"), "Apache-2.0");
    assert_eq!(db.text("ISC").as_deref(), Some("ISC license text"));
}

#[test]
fn test_config_extends_tables() {
    let mut config = LicenseDbConfig::default();
    config.aliases.insert("expat".into(), "MIT".into());
    config.exceptions.push("Vendor-linking-exception".into());
    let source = MemorySource::from_names(ids()).with("Vendor-linking-exception", "vendor text");

    let db = LicenseDb::from_source(source, &config).unwrap();
    assert_eq!(db.normalize("expat or asl20"), "MIT OR Apache-2.0");
    let extraction = db.extract("MIT WITH Vendor-linking-exception");
    assert_eq!(extraction.exceptions, vec!["Vendor-linking-exception"]);
}

#[test]
fn test_empty_source_is_fatal() {
    let err = LicenseDb::from_source(MemorySource::new(), &LicenseDbConfig::default()).unwrap_err();
    assert!(matches!(err, LicenseDbError::EmptySource(_)));
}

#[test]
fn test_directory_source_from_project_config() {
    let root = TempDir::new().unwrap();
    let text_dir = root.path().join("text");
    fs::create_dir(&text_dir).unwrap();
    for id in ["MIT", "Apache-2.0", "GPL-2.0-only", "GPL-2.0-or-later", "GPL-3.0-only"] {
        fs::write(text_dir.join(format!("{}.txt", id)), format!("{} body", id)).unwrap();
    }
    fs::write(root.path().join("licensedb.toml"), "data_dir = \"text\"\n").unwrap();

    let config = LicenseDbConfig::from_project_root(root.path());
    let db = LicenseDb::open(&config).unwrap();

    assert_eq!(
        db.list(),
        ["Apache-2.0", "GPL-2.0-only", "GPL-2.0-or-later", "GPL-3.0-only", "MIT"]
    );
    assert_eq!(db.normalize("gpl2+ or mit"), "GPL-2.0-or-later OR MIT");

    let files = db.get_files("GPL2 AND MIT");
    assert_eq!(files.licenses["GPL-2.0-only"].text, "GPL-2.0-only body");
    assert_eq!(files.licenses["MIT"].text, "MIT body");
}

#[test]
fn test_global_install_once() {
    let installed = LicenseDb::install(memory_db()).unwrap();
    assert_eq!(installed.normalize("mit"), "MIT");
    assert!(LicenseDb::global().is_some());

    let rejected = LicenseDb::install(memory_db());
    assert!(rejected.is_err());
    assert_eq!(LicenseDb::global().unwrap().normalize("asl20"), "Apache-2.0");
}
