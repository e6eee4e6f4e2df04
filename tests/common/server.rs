use std::{
    io::{BufRead, BufReader},
    process::{Child, Command, ExitStatus, Stdio},
    sync::{Arc, Mutex},
    thread,
    time::{Duration, Instant},
};

use assert_cmd::cargo::cargo_bin;

use super::api::ALICE;

pub struct Config {
    pub port: u16,
    pub peers: Vec<String>,
    pub peer_sync_ms: u64,
    pub max_nonce: u64,
    pub difficulty: u32,
    pub transaction_waiting_ms: u64,
    pub miner_address: String,
    pub wallet_keyword: Option<String>,
}

pub struct ServerBuilder {
    config: Config,
}

#[allow(dead_code)]
impl ServerBuilder {
    pub fn new() -> ServerBuilder {
        let config = Config {
            port: 8000,
            peer_sync_ms: 10,
            difficulty: 0,
            transaction_waiting_ms: 10,
            peers: Vec::<String>::new(),
            max_nonce: 1_000,
            miner_address: ALICE.to_string(),
            wallet_keyword: None,
        };

        ServerBuilder { config }
    }

    pub fn difficulty(mut self, difficulty: u32) -> ServerBuilder {
        self.config.difficulty = difficulty;

        self
    }

    pub fn port(mut self, port: u16) -> ServerBuilder {
        self.config.port = port;

        self
    }

    pub fn peer(mut self, port: u16) -> ServerBuilder {
        self.config.peers.push(format!("http://localhost:{}", port));

        self
    }

    /// Slows peer sync down so only explicit `/nodes/resolve` calls sync.
    pub fn peer_sync_ms(mut self, peer_sync_ms: u64) -> ServerBuilder {
        self.config.peer_sync_ms = peer_sync_ms;

        self
    }

    pub fn max_nonce(mut self, max_nonce: u64) -> ServerBuilder {
        self.config.max_nonce = max_nonce;

        self
    }

    pub fn wallet(mut self, keyword: &str) -> ServerBuilder {
        self.config.wallet_keyword = Some(keyword.to_string());

        self
    }

    pub fn start(self) -> Server {
        Server::new(self.config)
    }
}

type SyncedOutput = Arc<Mutex<Vec<String>>>;

pub struct Server {
    pub config: Config,
    process: Child,
    output: SyncedOutput,
}

#[allow(dead_code)]
impl Server {
    fn start_process(config: &Config) -> Child {
        let mut command = Command::new(cargo_bin("block_wallet"));

        command
            .env("PORT", config.port.to_string())
            .env("PEERS", config.peers.join(","))
            .env("DIFFICULTY", config.difficulty.to_string())
            .env("MAX_NONCE", config.max_nonce.to_string())
            .env(
                "TRANSACTION_WAITING_MS",
                config.transaction_waiting_ms.to_string(),
            )
            .env("PEER_SYNC_MS", config.peer_sync_ms.to_string())
            .env("MINER_ADDRESS", &config.miner_address)
            .env("WALLET_KEYWORD", config.wallet_keyword.as_deref().unwrap_or(""))
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        command.spawn().unwrap()
    }

    fn start_stdout_reading(process: &mut Child) -> SyncedOutput {
        let output = Arc::new(Mutex::new(Vec::<String>::new()));
        let thread_output = output.clone();
        let stdout = process.stdout.take().unwrap();

        thread::spawn(move || {
            let buf = BufReader::new(stdout);

            for line in buf.lines() {
                match line {
                    Ok(line) => thread_output.lock().unwrap().push(line),
                    Err(_) => break,
                }
            }
        });

        output
    }

    fn count_messages_in_output(&self, message: &str) -> usize {
        let lines = self.output.lock().unwrap();

        lines.iter().filter(|line| line.contains(message)).count()
    }

    /// Waits until `message` has been logged more often than when the wait began.
    fn wait_for_new_log_message(&mut self, message: &str, seen_before: usize) -> bool {
        let wait_time = Duration::from_millis(50);
        let max_wait_time = Duration::from_secs(10);

        let start = Instant::now();

        while Instant::now() < start + max_wait_time {
            if self.count_messages_in_output(message) > seen_before {
                return true;
            }

            thread::sleep(wait_time);
        }

        println!("Gave up waiting for {:?}", message);

        false
    }

    pub fn new(config: Config) -> Server {
        let mut process = Server::start_process(&config);
        let output = Server::start_stdout_reading(&mut process);

        let mut server = Server {
            process,
            config,
            output,
        };

        assert!(server.wait_for_new_log_message("actix-web-service", 0));

        server
    }

    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.config.port)
    }

    pub fn mined_blocks(&self) -> usize {
        self.count_messages_in_output("Valid block found for index")
    }

    pub fn wait_for_mining(&mut self, mined_before: usize) -> bool {
        self.wait_for_new_log_message("Valid block found for index", mined_before)
    }

    pub fn peer_syncs(&self) -> usize {
        self.count_messages_in_output("Added new peer block")
    }

    pub fn wait_for_peer_sync(&mut self, synced_before: usize) -> bool {
        self.wait_for_new_log_message("Added new peer block", synced_before)
    }

    /// Waits for the node process to stop by itself.
    pub fn wait_for_exit(&mut self) -> Option<ExitStatus> {
        let wait_time = Duration::from_millis(50);
        let max_wait_time = Duration::from_secs(10);

        let start = Instant::now();

        while Instant::now() < start + max_wait_time {
            if let Ok(Some(status)) = self.process.try_wait() {
                return Some(status);
            }

            thread::sleep(wait_time);
        }

        None
    }

    pub fn wait_for_log(&mut self, message: &str) -> bool {
        self.wait_for_new_log_message(message, 0)
    }

    fn stop(&mut self) {
        println!("Shutting down server on port {}", self.config.port);

        if let Err(err) = self.process.kill() {
            println!("Kill failed: {}", err);
        }

        let _ = self.process.wait();
    }
}

/**
 * Stopping the server on variable drop allows us to not worry about
 * leaving zombie child process in the background.
 */
impl Drop for Server {
    fn drop(&mut self) {
        self.stop();
    }
}
