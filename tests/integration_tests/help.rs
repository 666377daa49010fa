// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests against the command-line help text.

use itertools::Itertools;

use crate::{finderchart, get_cmd_output};

#[test]
fn test_finderchart_help_is_correct() {
    let mut stdouts = vec![];

    // First with --help
    let cmd = finderchart().arg("--help").ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    stdouts.push(stdout);

    // Then with -h
    let cmd = finderchart().arg("-h").ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    stdouts.push(stdout);

    for stdout in stdouts {
        assert!(stdout.contains("chart"));
        assert!(stdout.contains("targets-verify"));
        assert!(stdout.contains("Make a finder chart for each target in a list."));
    }
}

#[test]
fn test_chart_help_is_correct() {
    let mut stdouts = vec![];

    // First with --help
    let cmd = finderchart().args(["chart", "--help"]).ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    stdouts.push(stdout);

    // Then with -h
    let cmd = finderchart().args(["chart", "-h"]).ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    stdouts.push(stdout);

    for stdout in stdouts {
        // The supported surveys are listed against --survey.
        let mut iter = stdout.split("\n\n").filter(|s| s.contains("--survey "));
        let survey_line = iter.next();
        assert!(
            survey_line.is_some(),
            "No lines containing '--survey ' were found in chart's help text"
        );
        let survey_line = survey_line.unwrap().split_ascii_whitespace().join(" ");
        assert!(
            survey_line.contains("dss2-color, dss2-red, dss2-blue, 2mass-j, sdss9-color"),
            "{survey_line}"
        );
    }
}
