use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "draughts";

#[test]
fn banner_and_board() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("d\nquit\n")
            .assert()
            .success()
            .stdout(
                contains("Draughts rule engine")
                    .and(contains(". p . p . p . p"))
                    .and(contains("P . P . P . P .")),
            ),
    );
}

#[test]
fn verbose_moves() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--quiet", "--notation", "verbose"])
            .write_stdin("move 9 1\nscore\n")
            .assert()
            .success()
            .stdout(contains("Piece to 4,4").and(contains("score +0"))),
    );
}

#[test]
fn empty_random_roster() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--quiet", "--random", "--keep-probability", "0", "--seed", "1"])
            .write_stdin("moves\nscore\n")
            .assert()
            .success()
            .stdout("score +0\n"),
    );
}

#[test]
fn rejects_probability() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--quiet", "--random", "--keep-probability", "1.5"])
            .assert()
            .failure()
            .stderr(contains("keep probability should be within [0, 1], got 1.5")),
    );
}
