//! Unused import removal with the built-in and with injected analyzers

use reviser::revise::{FileSnapshot, UsageAnalyzer};
use reviser::{Options, Reviser, process};
use std::collections::HashSet;
use std::path::Path;

const PROJECT: &str = "github.com/psawicki5/goimports-reviser";

fn remove_unused(source: &str) -> (String, bool) {
    process::<&str>(PROJECT, source, &[], Options::REMOVE_UNUSED).unwrap()
}

/// Reports a fixed set of names regardless of the file.
struct FixedUsage(&'static [&'static str]);

impl UsageAnalyzer for FixedUsage {
    fn referenced_names(
        &self,
        _file: &FileSnapshot<'_>,
    ) -> Result<HashSet<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }
}

struct FailingUsage;

impl UsageAnalyzer for FailingUsage {
    fn referenced_names(
        &self,
        _file: &FileSnapshot<'_>,
    ) -> Result<HashSet<String>, Box<dyn std::error::Error + Send + Sync>> {
        Err("type information unavailable".into())
    }
}

#[test]
fn test_unused_plain_and_aliased_imports_are_removed() {
    let source = r#"package testdata

import (
	"fmt"
	p "github.com/pkg/errors"
	"strings"
	_ "github.com/lib/pq"
	. "github.com/onsi/gomega"
)

func main() {
	fmt.Println("x")
}
"#;
    let expected = r#"package testdata

import (
	"fmt"

	_ "github.com/lib/pq"
	. "github.com/onsi/gomega"
)

func main() {
	fmt.Println("x")
}
"#;
    let (text, changed) = remove_unused(source);
    assert_eq!(text, expected);
    assert!(changed);
}

#[test]
fn test_used_alias_is_kept_under_its_alias() {
    let source = r#"package testdata

import (
	pkgerrors "github.com/pkg/errors"
)

var err = pkgerrors.New("x")
"#;
    let (text, changed) = remove_unused(source);
    assert_eq!(text, source);
    assert!(!changed);
}

#[test]
fn test_versioned_path_uses_assumed_name() {
    let source = r#"package testdata

import (
	"github.com/go-pg/pg/v9"
	"gopkg.in/yaml.v2"
)

var db = pg.Connect
"#;
    let expected = r#"package testdata

import (
	"github.com/go-pg/pg/v9"
)

var db = pg.Connect
"#;
    let (text, _) = remove_unused(source);
    assert_eq!(text, expected);
}

#[test]
fn test_emptied_section_is_removed_entirely() {
    let source = r#"// Some comments are here
package testdata

// test
import (
	"fmt"
)

// nolint:gomnd
func main(){
}
"#;
    let expected = r#"// Some comments are here
package testdata

// nolint:gomnd
func main(){
}
"#;
    let (text, changed) = remove_unused(source);
    assert_eq!(text, expected);
    assert!(changed);
}

#[test]
fn test_comments_of_removed_imports_go_with_them() {
    let source = r#"package testdata

import (
	// strings doc
	"strings" // strings trailing
	"fmt"
)

func main() { fmt.Println() }
"#;
    let (text, _) = remove_unused(source);
    assert!(!text.contains("strings"));
    assert!(text.contains("import (\n\t\"fmt\"\n)"));
}

#[test]
fn test_injected_analyzer_decides_usage() {
    let source = "package main\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n";
    let reviser = Reviser::new(PROJECT)
        .with_options(Options::REMOVE_UNUSED)
        .with_usage_analyzer(FixedUsage(&["os"]));
    let revision = reviser.revise(Path::new("main.go"), source).unwrap();
    assert_eq!(revision.text, "package main\n\nimport (\n\t\"os\"\n)\n");
    assert!(revision.changed);
}

#[test]
fn test_analyzer_is_not_consulted_without_the_option() {
    let source = "package main\n\nimport (\n\t\"fmt\"\n)\n";
    let reviser = Reviser::new(PROJECT).with_usage_analyzer(FailingUsage);
    let revision = reviser.revise(Path::new("main.go"), source).unwrap();
    assert!(!revision.changed);
}

#[test]
fn test_analyzer_failure_is_reported() {
    let source = "package main\n\nimport (\n\t\"fmt\"\n)\n";
    let reviser = Reviser::new(PROJECT)
        .with_options(Options::REMOVE_UNUSED)
        .with_usage_analyzer(FailingUsage);
    let err = reviser.revise(Path::new("main.go"), source).unwrap_err();
    assert_eq!(err.status_code(), "USAGE_ANALYSIS_FAILED");
    assert!(err.to_string().contains("type information unavailable"));
}

#[test]
fn test_broken_body_is_not_guessed_at() {
    let source = "package main\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n\nfunc main() {\n\tfmt.Println(\n}\n";
    let err = process::<&str>(PROJECT, source, &[], Options::REMOVE_UNUSED).unwrap_err();
    assert_eq!(err.status_code(), "USAGE_ANALYSIS_FAILED");
}

#[test]
fn test_import_with_underivable_name_is_kept() {
    let source = r#"package main

import (
	"fmt"

	"github.com/json-iterator/go"
)

func main() {
	fmt.Println(jsoniter.ConfigCompatibleWithStandardLibrary)
}
"#;
    let (text, changed) = remove_unused(source);
    assert_eq!(text, source);
    assert!(!changed);
}
