//! Sorting and grouping through the public entry points

use reviser::{Options, Reviser, process};
use std::path::Path;

const PROJECT: &str = "github.com/psawicki5/goimports-reviser";

fn revise(source: &str) -> (String, bool) {
    process::<&str>(PROJECT, source, &[], Options::empty()).unwrap()
}

/// Output must be a fixed point of the transformation.
fn assert_idempotent(output: &str) {
    let (again, changed) = revise(output);
    assert_eq!(again, output);
    assert!(!changed, "second pass changed:\n{again}");
}

#[test]
fn test_groups_in_category_order() {
    let source = r#"// Some comments are here
package testdata

import (
	"log"

	"github.com/psawicki5/goimports-reviser/testdata/innderpkg"

	"bytes"

	"golang.org/x/exp/slices"
)

// nolint:gomnd
"#;
    let expected = r#"// Some comments are here
package testdata

import (
	"bytes"
	"log"

	"github.com/psawicki5/goimports-reviser/testdata/innderpkg"

	"golang.org/x/exp/slices"
)

// nolint:gomnd
"#;
    let (text, changed) = revise(source);
    assert_eq!(text, expected);
    assert!(changed);
    assert_idempotent(&text);
}

#[test]
fn test_irregular_whitespace_is_normalized() {
    let source = "package testdata\n\t\t\nimport (\n\"log\"\n\"github.com/pkg/errors\"\n)\n";
    let expected = "package testdata\n\nimport (\n\t\"log\"\n\n\t\"github.com/pkg/errors\"\n)\n";
    let (text, changed) = revise(source);
    assert_eq!(text, expected);
    assert!(changed);
    assert_idempotent(&text);
}

#[test]
fn test_single_category_has_no_blank_lines() {
    let source = r#"package testdata

import (
	"strings"

	"context"
	"net/http"
)
"#;
    let expected = r#"package testdata

import (
	"context"
	"net/http"
	"strings"
)
"#;
    let (text, changed) = revise(source);
    assert_eq!(text, expected);
    assert!(changed);
}

#[test]
fn test_third_party_sorts_byte_wise() {
    let source = r#"package testdata

import (
	"github.com/pkg/errors"
	sq "github.com/Masterminds/squirrel"
	"go.uber.org/zap"
)
"#;
    let expected = r#"package testdata

import (
	sq "github.com/Masterminds/squirrel"
	"github.com/pkg/errors"
	"go.uber.org/zap"
)
"#;
    let (text, _) = revise(source);
    assert_eq!(text, expected);
}

#[test]
fn test_canonical_file_is_unchanged() {
    let source = r#"package testdata

import (
	"fmt"

	"github.com/psawicki5/goimports-reviser/testdata/innderpkg"
)

func main() {
	fmt.Println(innderpkg.Something())
}
"#;
    let (text, changed) = revise(source);
    assert_eq!(text, source);
    assert!(!changed);
}

#[test]
fn test_single_standalone_import_is_unchanged() {
    let source = "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println()\n}\n";
    let (text, changed) = revise(source);
    assert_eq!(text, source);
    assert!(!changed);
}

#[test]
fn test_file_without_imports_is_unchanged() {
    let source = "package main\n\nfunc main() {}\n";
    let (text, changed) = revise(source);
    assert_eq!(text, source);
    assert!(!changed);
}

#[test]
fn test_empty_import_block_is_deleted() {
    let source = "package main\n\nimport ()\n\nfunc main() {}\n";
    let (text, changed) = revise(source);
    assert_eq!(text, "package main\n\nfunc main() {}\n");
    assert!(changed);
    assert_idempotent(&text);
}

#[test]
fn test_empty_block_merges_away_beside_a_standalone_import() {
    let source = "package main\n\nimport ()\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println()\n}\n";
    let (text, changed) = revise(source);
    assert_eq!(text, "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println()\n}\n");
    assert!(changed);
    assert_idempotent(&text);
}

#[test]
fn test_crlf_file_keeps_crlf_line_endings() {
    let source = "package main\r\n\r\nimport (\r\n\t\"os\" // exit\r\n\t\"github.com/pkg/errors\"\r\n\t\"fmt\"\r\n)\r\n\r\nfunc main() {\r\n\tfmt.Println(os.Args, errors.New)\r\n}\r\n";
    let expected = "package main\r\n\r\nimport (\r\n\t\"fmt\"\r\n\t\"os\" // exit\r\n\r\n\t\"github.com/pkg/errors\"\r\n)\r\n\r\nfunc main() {\r\n\tfmt.Println(os.Args, errors.New)\r\n}\r\n";
    let (text, changed) = revise(source);
    assert_eq!(text, expected);
    assert!(changed);
    assert_eq!(text.matches('\n').count(), text.matches("\r\n").count());
    assert_idempotent(&text);
}

#[test]
fn test_result_does_not_depend_on_input_order() {
    let forward = "package main\n\nimport (\n\t\"os\"\n\t\"github.com/pkg/errors\"\n\t\"context\"\n)\n";
    let backward = "package main\n\nimport (\n\t\"context\"\n\t\"github.com/pkg/errors\"\n\t\"os\"\n)\n";
    assert_eq!(revise(forward).0, revise(backward).0);
}

#[test]
fn test_malformed_import_section_is_a_parse_error() {
    let source = "package main\n\nimport (\n\t\"fmt\"\n\t\"os\n)\n";
    let err = process::<&str>(PROJECT, source, &[], Options::empty()).unwrap_err();
    assert_eq!(err.status_code(), "PARSE_ERROR");
}

#[test]
fn test_statement_in_import_section_is_a_parse_error() {
    for source in [
        "package main\n\nimport \"fmt\" \"os\"\n",
        "package main\n\nimport \"fmt\"\nx := 1\nimport \"os\"\n",
    ] {
        let err = process::<&str>(PROJECT, source, &[], Options::empty()).unwrap_err();
        assert_eq!(err.status_code(), "PARSE_ERROR", "{source:?}");
    }
}

#[test]
fn test_body_syntax_errors_do_not_block_reordering() {
    let source = "package main\n\nimport (\n\t\"os\"\n\t\"fmt\"\n)\n\nfunc main() {\n\tfmt.Println(\n}\n";
    let (text, changed) = revise(source);
    assert!(changed);
    assert!(text.starts_with("package main\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n\nfunc main() {"));
}

#[test]
fn test_reviser_serves_many_threads() {
    let reviser = Reviser::new(PROJECT);
    let sources: Vec<String> = (0..8)
        .map(|i| format!("package p{i}\n\nimport (\n\t\"os\"\n\t\"fmt\"\n)\n"))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| {
                let reviser = &reviser;
                scope.spawn(move || reviser.revise(Path::new("p.go"), source).unwrap())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let revision = handle.join().unwrap();
            assert!(revision.changed);
            assert_eq!(
                revision.text,
                format!("package p{i}\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n")
            );
        }
    });
}
