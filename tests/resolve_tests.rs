//! End-to-end resolve tests against a mock update server

mod common;

use common::{TestUpdateServer, manifest};
use predicates::prelude::*;

async fn release_server() -> TestUpdateServer {
    let server = TestUpdateServer::start().await;
    server.serve("/latest", "31960\n").await;
    server
        .serve(
            "/update/31960/Manifest.MoM",
            "MANIFEST\t30\n\
             version:\t31960\n\
             previous:\t31950\n\
             filecount:\t6\n\
             \n\
             M...\t1111\t31950\tos-core\n\
             M...\t2222\t31960\teditors\n\
             M...\t3333\t31900\tpython3-basic\n\
             M...\t4444\t31960\tos-testsuite\n\
             M...\t5555\t31960\tcurl-dev\n\
             I...\t6666\t31960\tos-core.I.31950\n",
        )
        .await;
    server
        .serve(
            "/update/31950/Manifest.os-core",
            &manifest(40_000_000, &["/usr/bin/ls", "/usr/bin/vi", "/usr/lib/libc.so.6"]),
        )
        .await;
    server
        .serve(
            "/update/31960/Manifest.editors",
            &manifest(1_000_000, &["/usr/bin/vi", "/usr/bin/vim", "/usr/bin/nano"]),
        )
        .await;
    server
        .serve(
            "/update/31900/Manifest.python3-basic",
            &manifest(80_000_000, &["/usr/bin/python3", "/usr/bin/pip3"]),
        )
        .await;
    server
        .serve(
            "/update/31960/Manifest.os-testsuite",
            &manifest(1, &["/usr/bin/ls", "/usr/bin/bats"]),
        )
        .await;
    server
        .serve(
            "/update/31960/Manifest.curl-dev",
            &manifest(10, &["/usr/bin/curl-config", "/usr/bin/nano"]),
        )
        .await;
    server.forbid("/update/31960/Manifest.os-core.I.31950").await;
    server
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_resolve_latest_release() {
    let server = release_server().await;

    server
        .command()
        .args(["resolve", "--no-progress"])
        .assert()
        .success()
        .stdout(
            "R\tR-basic\n\
             R-script\tR-basic\n\
             bats\tos-testsuite\n\
             curl-config\tcurl-dev\n\
             ls\tos-core\n\
             nano\teditors\n\
             pip3\tpython3-basic\n\
             pkg-config\tc-basic\n\
             python\tpython3-basic\n\
             python2.7\tpython2-basic\n\
             python3\tpython3-basic\n\
             python3.7\tpython3-basic\n\
             vi\teditors\n\
             vim\teditors\n",
        );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_resolve_is_the_default_command() {
    let server = release_server().await;

    server
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("vim\teditors\n"))
        .stdout(predicate::str::contains("bats\tos-testsuite\n"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_resolve_pinned_release_skips_latest() {
    let server = TestUpdateServer::start().await;
    server.forbid("/latest").await;
    server
        .serve("/update/200/Manifest.MoM", "M...\tabcd\t190\tzsh\n")
        .await;
    server
        .serve("/update/190/Manifest.zsh", &manifest(500, &["/usr/bin/zsh"]))
        .await;

    server
        .command()
        .args(["resolve", "--release", "200", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zsh\tzsh\n"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_resolve_json_format() {
    let server = release_server().await;

    let output = server
        .command()
        .args(["resolve", "--format", "json", "--no-progress"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 14);

    let vim = rows.iter().find(|row| row["binary"] == "vim").unwrap();
    assert_eq!(vim["bundle"], "editors");
    assert_eq!(vim["score"], 1_000_000.0);

    let python = rows.iter().find(|row| row["binary"] == "python").unwrap();
    assert_eq!(python["bundle"], "python3-basic");
    assert_eq!(python["score"], 0.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_manifest_prints_nothing() {
    let server = TestUpdateServer::start().await;
    server.serve("/latest", "300").await;
    server
        .serve(
            "/update/300/Manifest.MoM",
            "M...\ta\t300\teditors\nM...\tb\t300\tvim\n",
        )
        .await;
    server
        .serve("/update/300/Manifest.editors", &manifest(1, &["/usr/bin/nano"]))
        .await;
    server.fail("/update/300/Manifest.vim", 404).await;

    server
        .command()
        .args(["resolve", "--no-progress"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Request to"))
        .stderr(predicate::str::contains("Manifest.vim returned HTTP 404"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_latest_release() {
    let server = TestUpdateServer::start().await;
    server.fail("/latest", 503).await;

    server
        .command()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("returned HTTP 503"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_empty_latest_release() {
    let server = TestUpdateServer::start().await;
    server.serve("/latest", "  \n").await;

    server
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("is empty"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_verbose_logs_to_stderr_only() {
    let server = TestUpdateServer::start().await;
    server.serve("/latest", "200").await;
    server
        .serve("/update/200/Manifest.MoM", "M...\tabcd\t200\tzsh\n")
        .await;
    server
        .serve("/update/200/Manifest.zsh", &manifest(500, &["/usr/bin/zsh"]))
        .await;

    let expected_stdout = [
        "R\tR-basic",
        "R-script\tR-basic",
        "pkg-config\tc-basic",
        "python\tpython3-basic",
        "python2.7\tpython2-basic",
        "python3\tpython3-basic",
        "python3.7\tpython3-basic",
        "zsh\tzsh",
    ]
    .map(|line| format!("{line}\n"))
    .concat();

    let output = server.command().arg("--verbose").output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_stdout);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Manifest.zsh"));
}
