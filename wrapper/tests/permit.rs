//! Integration tests for offline-signed approvals (permits).
//!
//! These need real Cosmos address derivation so the signing key can be linked
//! to the owner account, hence the bech32 mock api instead of the default one.

use cosmwasm_std::{Addr, Api, Binary, CanonicalAddr, Uint128};
use cw_multi_test::{
    App, AppBuilder, BankKeeper, ContractWrapper, Executor, MockAddressGenerator, MockApiBech32,
    WasmKeeper,
};
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;

use mold_wrapper::msg::{AllowanceResponse, ExecuteMsg, InstantiateMsg, NonceResponse, QueryMsg};
use mold_wrapper::permit;

type BechApp = App<BankKeeper, MockApiBech32>;

fn contract_wrapper() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mold_wrapper::contract::execute,
        mold_wrapper::contract::instantiate,
        mold_wrapper::contract::query,
    )
    .with_reply(mold_wrapper::contract::reply);
    Box::new(contract)
}

struct Suite {
    app: BechApp,
    wrapper: Addr,
    owner: Addr,
    spender: Addr,
    relayer: Addr,
    key: SigningKey,
    public_key: Binary,
}

fn setup() -> Suite {
    let mut app = AppBuilder::default()
        .with_api(MockApiBech32::new("mold"))
        .with_wasm(WasmKeeper::new().with_address_generator(MockAddressGenerator))
        .build(|_, _, _| {});
    let api = MockApiBech32::new("mold");

    // Deterministic secp256k1 key; the owner account is the Cosmos address
    // derived from it, so the permit's key-to-owner link holds.
    let key = SigningKey::from_slice(&[7u8; 32]).unwrap();
    let public_key = Binary::from(key.verifying_key().to_encoded_point(true).as_bytes());
    let canonical = CanonicalAddr::from(permit::pubkey_address(public_key.as_slice()));
    let owner = api.addr_humanize(&canonical).unwrap();

    let spender = api.addr_make("spender");
    let relayer = api.addr_make("relayer");
    let deployer = api.addr_make("deployer");
    let underlying = api.addr_make("underlying");

    let wrapper_code = app.store_code(contract_wrapper());
    let wrapper = app
        .instantiate_contract(
            wrapper_code,
            deployer,
            &InstantiateMsg {
                underlying: underlying.to_string(),
                name: "Mold Security Test".to_string(),
                symbol: "mldTST".to_string(),
                decimals: 6,
                transfer_delay_blocks: None,
            },
            &[],
            "mold-TST",
            None,
        )
        .unwrap();

    Suite {
        app,
        wrapper,
        owner,
        spender,
        relayer,
        key,
        public_key,
    }
}

impl Suite {
    fn sign(&self, amount: u128, nonce: u64, deadline: u64) -> Binary {
        let digest = permit::permit_digest(
            &self.app.block_info().chain_id,
            self.wrapper.as_str(),
            self.owner.as_str(),
            self.spender.as_str(),
            Uint128::new(amount),
            nonce,
            deadline,
        );
        let signature: Signature = self.key.sign_prehash(&digest).unwrap();
        let signature = signature.normalize_s().unwrap_or(signature);
        Binary::from(signature.to_bytes().as_slice())
    }

    /// Submits the permit, reporting failures as the root-cause string.
    fn submit(&mut self, amount: u128, deadline: u64, signature: Binary) -> Result<(), String> {
        self.app
            .execute_contract(
                self.relayer.clone(),
                self.wrapper.clone(),
                &ExecuteMsg::Permit {
                    owner: self.owner.to_string(),
                    spender: self.spender.to_string(),
                    amount: Uint128::new(amount),
                    deadline,
                    signature,
                    public_key: self.public_key.clone(),
                },
                &[],
            )
            .map(|_| ())
            .map_err(|err| err.root_cause().to_string())
    }

    fn allowance(&self) -> u128 {
        let res: AllowanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.wrapper.clone(),
                &QueryMsg::Allowance {
                    owner: self.owner.to_string(),
                    spender: self.spender.to_string(),
                },
            )
            .unwrap();
        res.allowance.u128()
    }

    fn nonce(&self) -> u64 {
        let res: NonceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.wrapper.clone(),
                &QueryMsg::Nonce {
                    address: self.owner.to_string(),
                },
            )
            .unwrap();
        res.nonce
    }

    fn deadline(&self) -> u64 {
        self.app.block_info().time.seconds() + 600
    }
}

#[test]
fn permit_sets_allowance_and_consumes_nonce() {
    let mut suite = setup();
    let deadline = suite.deadline();

    let signature = suite.sign(500, 0, deadline);
    suite.submit(500, deadline, signature).unwrap();

    assert_eq!(suite.allowance(), 500);
    assert_eq!(suite.nonce(), 1);
}

#[test]
fn permit_cannot_be_replayed() {
    let mut suite = setup();
    let deadline = suite.deadline();

    let signature = suite.sign(500, 0, deadline);
    suite.submit(500, deadline, signature.clone()).unwrap();

    // The nonce moved on, so the same signature no longer verifies.
    let err = suite.submit(500, deadline, signature).unwrap_err();
    assert!(err.contains("Invalid permit"));
    assert_eq!(suite.nonce(), 1);
}

#[test]
fn successive_permits_use_successive_nonces() {
    let mut suite = setup();
    let deadline = suite.deadline();

    let first = suite.sign(500, 0, deadline);
    suite.submit(500, deadline, first).unwrap();

    let second = suite.sign(9, 1, deadline);
    suite.submit(9, deadline, second).unwrap();

    assert_eq!(suite.allowance(), 9);
    assert_eq!(suite.nonce(), 2);
}

#[test]
fn expired_permit_is_rejected() {
    let mut suite = setup();
    let deadline = suite.app.block_info().time.seconds() - 1;

    let signature = suite.sign(500, 0, deadline);
    let err = suite.submit(500, deadline, signature).unwrap_err();
    assert!(err.contains("Expired permit"));
    assert_eq!(suite.nonce(), 0);
}

#[test]
fn tampered_amount_is_rejected() {
    let mut suite = setup();
    let deadline = suite.deadline();

    // Signed over 500, submitted with 9000.
    let signature = suite.sign(500, 0, deadline);
    let err = suite.submit(9000, deadline, signature).unwrap_err();
    assert!(err.contains("Invalid permit"));
    assert_eq!(suite.allowance(), 0);
}

#[test]
fn foreign_key_cannot_sign_for_owner() {
    let mut suite = setup();
    let deadline = suite.deadline();

    // A different key produces a valid signature over the right digest, but
    // its address is not the owner's.
    let intruder = SigningKey::from_slice(&[9u8; 32]).unwrap();
    let intruder_pk = Binary::from(intruder.verifying_key().to_encoded_point(true).as_bytes());
    let digest = permit::permit_digest(
        &suite.app.block_info().chain_id,
        suite.wrapper.as_str(),
        suite.owner.as_str(),
        suite.spender.as_str(),
        Uint128::new(500),
        0,
        deadline,
    );
    let signature: Signature = intruder.sign_prehash(&digest).unwrap();
    let signature = signature.normalize_s().unwrap_or(signature);

    suite.public_key = intruder_pk;
    let err = suite
        .submit(500, deadline, Binary::from(signature.to_bytes().as_slice()))
        .unwrap_err();
    assert!(err.contains("Invalid permit"));
    assert_eq!(suite.allowance(), 0);
}
