use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs/example.txt");

    cmd.assert().success().stdout(str::contains("94"));
}

#[test]
fn part2_output_right_answer_for_unfortunate_grid() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs/unfortunate.txt");

    cmd.assert().success().stdout(str::contains("71"));
}

#[test]
fn part2_reports_unreachable_goal() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs/tiny.txt");

    cmd.assert().success().stderr(str::contains("There's no way"));
}

#[test]
fn part2_rejects_inverted_run_bounds() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.args(["inputs/example.txt", "--min-run", "5", "--max-run", "4"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid run length bounds"));
}

#[test]
fn part2_handles_run_bounds_beyond_grid() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.args(["inputs/example.txt", "--max-run", "1099511627776"]);

    cmd.assert().success().stdout(str::contains("The least heat loss"));
}
