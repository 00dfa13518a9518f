//! Local-prefix groups

use reviser::{Options, process};

fn revise(project: &str, local: &[&str], source: &str) -> String {
    process(project, source, local, Options::empty()).unwrap().0
}

const MIXED: &str = r#"package testdata

import (
	"github.com/pkg/errors"
	"goimports-reviser/testdata/innderpkg"
	"goimports-reviser/pkg"
	"fmt"
)
"#;

#[test]
fn test_local_group_sits_between_standard_and_project() {
    let expected = r#"package testdata

import (
	"fmt"

	"goimports-reviser/pkg"

	"goimports-reviser/testdata/innderpkg"

	"github.com/pkg/errors"
)
"#;
    assert_eq!(
        revise("goimports-reviser", &["goimports-reviser/pkg"], MIXED),
        expected
    );
}

#[test]
fn test_without_local_prefixes_project_is_one_group() {
    let expected = r#"package testdata

import (
	"fmt"

	"goimports-reviser/pkg"
	"goimports-reviser/testdata/innderpkg"

	"github.com/pkg/errors"
)
"#;
    assert_eq!(revise("goimports-reviser", &[], MIXED), expected);
}

#[test]
fn test_each_prefix_gets_its_own_group() {
    let source = r#"package testdata

import (
	"github.com/acme/platform/log"
	"github.com/acme/app/internal/db"
	"github.com/acme/shared/metrics"
	"github.com/pkg/errors"
	"os"
)
"#;
    let expected = r#"package testdata

import (
	"os"

	"github.com/acme/platform/log"

	"github.com/acme/shared/metrics"

	"github.com/acme/app/internal/db"

	"github.com/pkg/errors"
)
"#;
    let local = ["github.com/acme/shared", "github.com/acme/platform"];
    assert_eq!(revise("github.com/acme/app", &local, source), expected);
}

#[test]
fn test_more_specific_prefix_group_comes_first() {
    let source = r#"package testdata

import (
	"github.com/acme/platform/log"
	"github.com/acme/tools"
)
"#;
    let expected = r#"package testdata

import (
	"github.com/acme/platform/log"

	"github.com/acme/tools"
)
"#;
    // the more specific prefix is emitted first whatever the configured order
    let local = ["github.com/acme", "github.com/acme/platform"];
    assert_eq!(revise("github.com/other/app", &local, source), expected);
}

#[test]
fn test_project_under_a_local_prefix() {
    let source = r#"package testdata

import (
	"github.com/szwagier-company/mirek"
	"github.com/szwagier-company/srv-serwus/internal/api"
	"strings"
)
"#;
    let expected = r#"package testdata

import (
	"strings"

	"github.com/szwagier-company/srv-serwus/internal/api"

	"github.com/szwagier-company/mirek"
)
"#;
    assert_eq!(
        revise(
            "github.com/szwagier-company",
            &["github.com/szwagier-company/srv-serwus"],
            source
        ),
        expected
    );
}

#[test]
fn test_local_prefix_equal_to_project_wins() {
    let source = r#"package testdata

import (
	"github.com/acme/app/db"
	"github.com/pkg/errors"
)
"#;
    let expected = r#"package testdata

import (
	"github.com/acme/app/db"

	"github.com/pkg/errors"
)
"#;
    let text = revise("github.com/acme/app", &["github.com/acme/app"], source);
    assert_eq!(text, expected);
}
