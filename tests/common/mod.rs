#![allow(dead_code)]
//! Shared utilities for integration testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::net::TcpListener;

use router_agent::config::AgentConfig;
use router_agent::exec::{CommandRunner, ExecError};
use router_agent::http::HttpServer;
use router_agent::lifecycle::Shutdown;

pub const TEST_TOKEN: &str = "integration-secret";

/// Scripted stand-in for the system utilities.
///
/// Emulates the config store as an in-memory map and interface statuses as
/// canned JSON documents; individual verbs can be forced to fail. Every
/// invocation is recorded for ordering assertions.
#[derive(Default)]
pub struct StubRunner {
    pub store: Mutex<HashMap<String, String>>,
    pub statuses: Mutex<HashMap<String, String>>,
    pub failures: Mutex<HashMap<String, (i32, String)>>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl StubRunner {
    pub fn with_credentials(interface: &str, username: &str, password: &str) -> Arc<Self> {
        let runner = Self::default();
        {
            let mut store = runner.store.lock().unwrap();
            store.insert(
                format!("network.{interface}.username"),
                username.to_string(),
            );
            store.insert(
                format!("network.{interface}.password"),
                password.to_string(),
            );
        }
        Arc::new(runner)
    }

    pub fn with_status(interface: &str, status_json: &str) -> Arc<Self> {
        let runner = Self::default();
        runner
            .statuses
            .lock()
            .unwrap()
            .insert(interface.to_string(), status_json.to_string());
        Arc::new(runner)
    }

    /// Force a verb ("uci get", "ifstatus", "ifdown", ...) to fail.
    pub fn fail(&self, verb: &str, code: i32, stderr: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(verb.to_string(), (code, stderr.to_string()));
    }

    /// The verbs invoked so far, in order.
    pub fn verbs_called(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|argv| Self::verb_of(argv))
            .collect()
    }

    fn verb_of(argv: &[String]) -> String {
        let program = argv[0].rsplit('/').next().unwrap_or(&argv[0]);
        if program == "uci" {
            format!("uci {}", argv.get(1).map(String::as_str).unwrap_or(""))
        } else {
            program.to_string()
        }
    }
}

#[async_trait]
impl CommandRunner for StubRunner {
    async fn run(&self, argv: &[String]) -> Result<String, ExecError> {
        self.calls.lock().unwrap().push(argv.to_vec());
        let verb = Self::verb_of(argv);

        if let Some((code, stderr)) = self.failures.lock().unwrap().get(&verb).cloned() {
            return Err(ExecError::NonZero { code, stderr });
        }

        match verb.as_str() {
            "uci get" => self
                .store
                .lock()
                .unwrap()
                .get(&argv[2])
                .cloned()
                .ok_or_else(|| ExecError::NonZero {
                    code: 1,
                    stderr: "uci: Entry not found".to_string(),
                }),
            "uci set" => {
                let (key, value) = argv[2].split_once('=').expect("set takes key=value");
                self.store
                    .lock()
                    .unwrap()
                    .insert(key.to_string(), value.to_string());
                Ok(String::new())
            }
            "uci commit" => Ok(String::new()),
            "ifstatus" => self
                .statuses
                .lock()
                .unwrap()
                .get(&argv[1])
                .cloned()
                .ok_or_else(|| ExecError::NonZero {
                    code: 1,
                    stderr: format!("Interface {} not found", argv[1]),
                }),
            "ifdown" | "ifup" => Ok(String::new()),
            other => Err(ExecError::NonZero {
                code: 127,
                stderr: format!("{other}: not found"),
            }),
        }
    }
}

/// Start a live agent on a loopback port with the given runner.
///
/// Returns the base URL and the shutdown handle keeping the server alive.
pub async fn spawn_agent(runner: Arc<StubRunner>) -> (String, Shutdown) {
    let mut config = AgentConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.auth.access_token = TEST_TOKEN.to_string();

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::with_runner(config, runner);

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    (format!("http://{addr}"), shutdown)
}

/// True when `text` looks like `YYYY-MM-DD HH:MM:SS`.
pub fn is_timestamp(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 19 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}
