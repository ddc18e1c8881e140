//! Common test utilities for binowner integration tests

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command for the binowner binary with a clean logging environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn binowner_cmd() -> Command {
    let mut cmd = Command::cargo_bin("binowner").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("BINOWNER_BASE_URL")
        .env_remove("BINOWNER_LATEST_URL");
    cmd
}

/// An update server serving fixed documents
#[allow(dead_code)]
pub struct TestUpdateServer {
    pub server: MockServer,
}

#[allow(dead_code)]
impl TestUpdateServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}/update", self.server.uri())
    }

    pub fn latest_url(&self) -> String {
        format!("{}/latest", self.server.uri())
    }

    /// Serve `body` at `url_path`, answered any number of times
    pub async fn serve(&self, url_path: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Fail requests to `url_path` with `status`
    pub async fn fail(&self, url_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Assert `url_path` is never requested
    pub async fn forbid(&self, url_path: &str) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// A binowner command pointed at this server
    pub fn command(&self) -> Command {
        let mut cmd = binowner_cmd();
        cmd.arg("--base-url")
            .arg(self.base_url())
            .arg("--latest-url")
            .arg(self.latest_url());
        cmd
    }
}

/// Build a bundle manifest declaring `size` and one file record per path
#[allow(dead_code)]
pub fn manifest(size: u64, paths: &[&str]) -> String {
    let mut text = format!(
        "MANIFEST\t30\nversion:\t100\nprevious:\t90\nfilecount:\t{}\ncontentsize:\t{}\n\n",
        paths.len(),
        size
    );
    for path in paths {
        text.push_str(&format!("F...\t0123abcd\t100\t{path}\n"));
    }
    text
}
