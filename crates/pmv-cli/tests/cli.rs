use assert_cmd::Command;
use predicates::prelude::*;

fn pmv() -> Command {
    Command::cargo_bin("pmv").unwrap()
}

#[test]
fn prints_values_in_key_order() {
    pmv()
        .args(["stage=stage:idle", "duration:12345", "conns=connections:wimax,ethernet"])
        .assert()
        .success()
        .stdout("_1: 3h25m45s\nconns: Ethernet,Wimax\nstage: Idle\n");
}

#[test]
fn later_value_replaces_earlier() {
    pmv()
        .args(["x=int:1", "x=uint:18446744073709551615"])
        .assert()
        .success()
        .stdout("x: 18446744073709551615\n");
}

#[test]
fn rejects_unknown_kind() {
    pmv()
        .arg("float:1.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown literal kind"));
}

#[test]
fn enforces_variable_limit() {
    pmv()
        .args(["--max-variables", "1", "a=bool:true", "b=bool:false"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("variable store is full"));
}

#[test]
fn writes_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.txt");
    pmv()
        .arg("--snapshot")
        .arg(&path)
        .arg("when=time:1398810655")
        .assert()
        .success();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "when: 4/29/2014 22:30:55 GMT\n");
}

#[test]
fn unnamed_values_keep_argument_order() {
    let args: Vec<String> = (0..11).map(|i| format!("int:{}", i)).collect();
    let expected: String = (0..11).map(|i| format!("_{:02}: {}\n", i, i)).collect();
    pmv().args(&args).assert().success().stdout(expected);
}
