use actix_web::{web, HttpResponse};

use crate::{
    model::{Block, Transaction},
    peer,
};

use super::{
    error::ApiError,
    messages::{
        AddressResponse, ChainResponse, LoginRequest, LoginResponse, MessageResponse,
        RegisterNodesRequest, RegisterNodesResponse, ResolveResponse, TransactionRequest,
        WalletInfoResponse,
    },
    ApiState,
};

type ApiResult = Result<HttpResponse, ApiError>;

pub async fn get_info(state: web::Data<ApiState>) -> ApiResult {
    let address = state.wallet.address().ok_or(ApiError::WalletNotLoggedIn)?;
    let amount = state.blockchain.get_balance(&address);

    Ok(HttpResponse::Ok().json(WalletInfoResponse {
        wallet: address.to_string(),
        amount,
    }))
}

pub async fn new_transaction(
    state: web::Data<ApiState>,
    request: web::Json<TransactionRequest>,
) -> ApiResult {
    let transaction = Transaction::new(
        request.sender_address()?,
        request.recipient_address()?,
        request.amount.parse()?,
    );

    state.pool.add_transaction(transaction);
    let index = state.blockchain.get_last_block().index + 1;

    Ok(HttpResponse::Created().json(MessageResponse {
        message: format!("Transaction will be added to Block {}", index),
    }))
}

pub async fn login(state: web::Data<ApiState>, request: web::Json<LoginRequest>) -> ApiResult {
    let keyword = request.keyword.trim();

    if keyword.is_empty() {
        return Err(ApiError::MissingKeyword);
    }

    let address = state.wallet.login(keyword);

    Ok(HttpResponse::Ok().json(LoginResponse {
        wallet: address.to_string(),
    }))
}

pub async fn get_addr(state: web::Data<ApiState>) -> HttpResponse {
    let pubkey = state
        .wallet
        .address()
        .map(|address| address.to_string())
        .unwrap_or_default();

    HttpResponse::Ok().json(AddressResponse { pubkey })
}

pub async fn full_chain(state: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(ChainResponse::new(state.blockchain.get_all_blocks()))
}

pub async fn add_block(state: web::Data<ApiState>, block: web::Json<Block>) -> ApiResult {
    let block = block.into_inner();
    info!("Received new block {}", block.index);

    state
        .blockchain
        .add_block(block)
        .map_err(|err| ApiError::InvalidBlock(err.to_string()))?;

    Ok(HttpResponse::Ok().finish())
}

pub async fn register_nodes(
    state: web::Data<ApiState>,
    request: web::Json<RegisterNodesRequest>,
) -> ApiResult {
    let nodes = request.nodes.as_ref().ok_or(ApiError::MissingNodes)?;

    for node in nodes {
        if state.nodes.register(node) {
            info!("Registered node {}", node);
        }
    }

    Ok(HttpResponse::Created().json(RegisterNodesResponse {
        message: "New nodes have been added".to_string(),
        total_nodes: state.nodes.all(),
    }))
}

pub async fn resolve(state: web::Data<ApiState>) -> ApiResult {
    let blockchain = state.blockchain.clone();
    let nodes = state.nodes.clone();
    let self_url = state.self_url.clone();

    let replaced = web::block(move || peer::resolve_conflicts(&blockchain, &nodes, &self_url))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    let chain = state.blockchain.get_all_blocks();
    let response = if replaced {
        ResolveResponse::Replaced {
            message: "Our chain was replaced".to_string(),
            new_chain: chain,
        }
    } else {
        ResolveResponse::Authoritative {
            message: "Our chain is authoritative".to_string(),
            chain,
        }
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/getInfo", web::get().to(get_info))
        .route("/info", web::get().to(get_info))
        .route("/transactions/new", web::post().to(new_transaction))
        .route("/login", web::post().to(login))
        .route("/getAddr", web::get().to(get_addr))
        .route("/chain", web::get().to(full_chain))
        .route("/blocks", web::post().to(add_block))
        .route("/nodes/register", web::post().to(register_nodes))
        .route("/nodes/resolve", web::get().to(resolve));
}
