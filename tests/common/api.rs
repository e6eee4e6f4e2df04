use block_wallet::model::{Block, Transaction, BLOCK_SUBSIDY};
use isahc::{Body, ReadResponseExt, Request, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use super::Server;

pub const ALICE: &str = "2bd806c97f0e00af1a1fc3328fa763a9269723c8db8fac4f93af71db186d6e90";
pub const BOB: &str = "81b637d8fcd2c6da6359e6963113a1170de795e4b725b84d1e0b4cfd9ec58ce9";

#[derive(Deserialize)]
struct ChainBody {
    chain: Vec<Block>,
    length: usize,
}

#[allow(dead_code)]
pub trait Api {
    fn get_blocks(&self) -> Vec<Block>;
    fn get_last_block(&self) -> Block;
    fn add_block(&self, block: &Block) -> Response<Body>;
    fn add_valid_block(&self) -> Response<Body>;
    fn add_transaction(&self, body: &Value) -> Response<Body>;
    fn get_json(&self, path: &str) -> (u16, Value);
    fn post_json(&self, path: &str, body: &Value) -> (u16, Value);
    fn register_node(&self, port: u16) -> (u16, Value);
}

impl Api for Server {
    fn get_blocks(&self) -> Vec<Block> {
        let uri = format!("{}/chain", self.base_url());
        let mut response = isahc::get(uri).unwrap();

        assert_eq!(response.status().as_u16(), 200);

        let raw_body = response.text().unwrap();
        let body: ChainBody = serde_json::from_str(&raw_body).unwrap();
        assert_eq!(body.length, body.chain.len());

        body.chain
    }

    fn get_last_block(&self) -> Block {
        self.get_blocks().last().unwrap().to_owned()
    }

    fn add_valid_block(&self) -> Response<Body> {
        let last_block = self.get_last_block();
        let coinbase = Transaction::coinbase(BOB.parse().unwrap(), BLOCK_SUBSIDY);
        let block = Block::new(last_block.index + 1, 0, last_block.hash, vec![coinbase]);

        self.add_block(&block)
    }

    fn add_block(&self, block: &Block) -> Response<Body> {
        let uri = format!("{}/blocks", self.base_url());
        let body = serde_json::to_string(&block).unwrap();

        post_request(uri, body)
    }

    fn add_transaction(&self, body: &Value) -> Response<Body> {
        let uri = format!("{}/transactions/new", self.base_url());

        post_request(uri, body.to_string())
    }

    fn get_json(&self, path: &str) -> (u16, Value) {
        let uri = format!("{}{}", self.base_url(), path);
        let response = isahc::get(uri).unwrap();

        read_json(response)
    }

    fn post_json(&self, path: &str, body: &Value) -> (u16, Value) {
        let uri = format!("{}{}", self.base_url(), path);

        read_json(post_request(uri, body.to_string()))
    }

    fn register_node(&self, port: u16) -> (u16, Value) {
        let node = format!("localhost:{}", port);

        self.post_json("/nodes/register", &json!({ "nodes": [node] }))
    }
}

fn read_json(mut response: Response<Body>) -> (u16, Value) {
    let status = response.status().as_u16();
    let raw_body = response.text().unwrap();

    (status, serde_json::from_str(&raw_body).unwrap_or(Value::Null))
}

fn post_request(uri: String, body: String) -> Response<Body> {
    let request = Request::post(uri)
        .header("Content-Type", "application/json")
        .body(body)
        .unwrap();

    isahc::send(request).unwrap()
}
