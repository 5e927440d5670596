//! Compiled-in seed signatures
//!
//! A small curated set of selectors consulted only when the store has no
//! rows for a lookup. These rows predate ingestion and are trusted as-is;
//! one entry (`0xb30dfbfa`) carries a name that disagrees with its folded
//! signature and is kept that way deliberately.

use fourbyte_common::Selector;

/// One curated seed row. Same shape as a primary-store row minus the
/// co-occurrence data, which does not exist for curated entries.
#[derive(Debug)]
pub struct SeedSignature {
    pub selector: &'static str,
    pub name: &'static str,
    pub folded_name: &'static str,
    /// JSON-encoded `{type, name}` array, identical in shape to the
    /// primary store's `params` column.
    pub params: &'static str,
}

/// Exact-match lookup in the seed table.
pub fn seed_lookup(selector: Selector) -> Option<&'static SeedSignature> {
    let rendered = selector.to_hex();
    SEED_SIGNATURES
        .binary_search_by(|entry| entry.selector.cmp(rendered.as_str()))
        .ok()
        .map(|index| &SEED_SIGNATURES[index])
}

/// Seed rows, sorted by selector for binary search.
static SEED_SIGNATURES: &[SeedSignature] = &[
    SeedSignature {
        selector: "0x03287842",
        name: "ExcludeFromMaxLimit",
        folded_name: "ExcludeFromMaxLimit(address[])",
        params: r#"[{"type": "address[]","name": "wallets"}]"#,
    },
    SeedSignature {
        selector: "0x06f92bcc",
        name: "moon",
        folded_name: "moon(address[],address[],uint256,uint256,uint256,address)",
        params: r#"[{"type": "address[]","name": "wallets"},{"type": "address[]","name": "path"},{"type": "uint256","name": "amountOutMin"},{"type": "uint256","name": "tax"},{"type": "uint256","name": "uiMode"},{"type": "address","name": "router"}]"#,
    },
    SeedSignature {
        selector: "0x10bd2c49",
        name: "swapExactTokensForTokens",
        folded_name: "swapExactTokensForTokens(uint256,uint256,address[],address,uint256,bytes32,address)",
        params: r#"[{"type": "uint256","name": "amountIn"},{"type": "uint256","name": "amountOutMin"},{"type": "address[]","name": "path"},{"type": "address","name": "to"},{"type": "uint256","name": "deadline"},{"type": "bytes32","name": "code"},{"type": "address","name": "launchTokenAddr"}]"#,
    },
    SeedSignature {
        selector: "0x13c30ead",
        name: "swapETHForMaxTransaction",
        folded_name: "swapETHForMaxTransaction(uint256,address[],address,uint256,bytes32,bool,address)",
        params: r#"[{"type": "uint256","name": "amountOut"},{"type": "address[]","name": "path"},{"type": "address","name": "to"},{"type": "uint256","name": "deadline"},{"type": "bytes32","name": "code"},{"type": "bool","name": "isOnlyForExact"},{"type": "address","name": "launchTokenAddr"}]"#,
    },
    SeedSignature {
        selector: "0x18b072a5",
        name: "setLaunchTime",
        folded_name: "setLaunchTime(address,uint256)",
        params: r#"[{"type": "address","name": "_launchToken"},{"type": "uint256","name": "_LaunchTime"}]"#,
    },
    SeedSignature {
        selector: "0x1f00ca74",
        name: "getAmountsIn",
        folded_name: "getAmountsIn(uint256,address[])",
        params: r#"[{"type": "uint256","name": "amountOut"},{"type": "address[]","name": "path"}]"#,
    },
    SeedSignature {
        selector: "0x1f107a45",
        name: "setLimitAmount",
        folded_name: "setLimitAmount(uint256)",
        params: r#"[{"type": "uint256","name": "_amount"}]"#,
    },
    SeedSignature {
        selector: "0x27a14fc2",
        name: "setMaxWalletAmount",
        folded_name: "setMaxWalletAmount(uint256)",
        params: r#"[{"type": "uint256","name": "wallet_size"}]"#,
    },
    SeedSignature {
        selector: "0x49787653",
        name: "isExcludedFromMaxLimit",
        folded_name: "isExcludedFromMaxLimit(address)",
        params: r#"[{"type": "address","name": "wallet"}]"#,
    },
    SeedSignature {
        selector: "0x5a029f74",
        name: "swapETHForExactTokens",
        folded_name: "swapETHForExactTokens(uint256,address[],address,uint256,bytes32,address)",
        params: r#"[{"type": "uint256","name": "amountOut"},{"type": "address[]","name": "path"},{"type": "address","name": "to"},{"type": "uint256","name": "deadline"},{"type": "bytes32","name": "code"},{"type": "address","name": "launchTokenAddr"}]"#,
    },
    SeedSignature {
        selector: "0x5a0e9f60",
        name: "setdMaxTxAmounts",
        folded_name: "setdMaxTxAmounts(address,uint256,uint256)",
        params: r#"[{"type": "address","name": "_doubtlaunchTokenAddress"},{"type": "uint256","name": "amount1"},{"type": "uint256","name": "amount2"}]"#,
    },
    SeedSignature {
        selector: "0x6eab69f1",
        name: "setLaunchTokenAddress",
        folded_name: "setLaunchTokenAddress(address)",
        params: r#"[{"type": "address","name": "_launchTokenAddress"}]"#,
    },
    SeedSignature {
        selector: "0x89d8d21c",
        name: "swapTokensForMaxTransaction",
        folded_name: "swapTokensForMaxTransaction(uint256,uint256,address[],address,uint256,bytes32,bool,address)",
        params: r#"[{"type": "uint256","name": "amountIn"},{"type": "uint256","name": "amountOut"},{"type": "address[]","name": "path"},{"type": "address","name": "to"},{"type": "uint256","name": "deadline"},{"type": "bytes32","name": "code"},{"type": "bool","name": "isOnlyForExact"},{"type": "address","name": "launchTokenAddr"}]"#,
    },
    SeedSignature {
        selector: "0x99eb91e1",
        name: "swapTokensForETH",
        folded_name: "swapTokensForETH(uint256,uint256,address[],address,uint256,bytes32,address)",
        params: r#"[{"type": "uint256","name": "amountIn"},{"type": "uint256","name": "amountOutMin"},{"type": "address[]","name": "path"},{"type": "address","name": "to"},{"type": "uint256","name": "deadline"},{"type": "bytes32","name": "code"},{"type": "address","name": "launchTokenAddr"}]"#,
    },
    SeedSignature {
        selector: "0x9ff46e74",
        name: "setLaunchTime",
        folded_name: "setLaunchTime(uint256)",
        params: r#"[{"type": "uint256","name": "_LaunchTime"}]"#,
    },
    SeedSignature {
        selector: "0xa6f80d1d",
        name: "swapTokensForExactTokens",
        folded_name: "swapTokensForExactTokens(uint256,uint256,address[],address,uint256,bytes32,address)",
        params: r#"[{"type": "uint256","name": "amountIn"},{"type": "uint256","name": "amountOut"},{"type": "address[]","name": "path"},{"type": "address","name": "to"},{"type": "uint256","name": "deadline"},{"type": "bytes32","name": "code"},{"type": "address","name": "launchTokenAddr"}]"#,
    },
    SeedSignature {
        selector: "0xb0d562fd",
        name: "setLaunchInfo",
        folded_name: "setLaunchInfo(address,uint256,uint256,uint256)",
        params: r#"[{"type": "address","name": "_launchTokenAddr"},{"type": "uint256","name": "_launchTime"},{"type": "uint256","name": "_maxTx"},{"type": "uint256","name": "_maxWallet"}]"#,
    },
    SeedSignature {
        selector: "0xb30dfbfa",
        name: "getdLaunchToken",
        folded_name: "setdLaunchToken(address)",
        params: r#"[{"type": "address","name": "_doubtlaunchTokenAddress"}]"#,
    },
    SeedSignature {
        selector: "0xc0762e5e",
        name: "setDexRouterAddress",
        folded_name: "setDexRouterAddress(address)",
        params: r#"[{"type": "address","name": "routerAddress"}]"#,
    },
    SeedSignature {
        selector: "0xcfe4ce21",
        name: "setFeeInfos",
        folded_name: "setFeeInfos(address,uint256[],uint256[],address[],address)",
        params: r#"[{"type": "address","name": "_tokenAddress"},{"type": "uint256[]","name": "sellFees"},{"type": "uint256[]","name": "buyFees"},{"type": "address[]","name": "feeReceivers"},{"type": "address","name": "_withdrawer"}]"#,
    },
    SeedSignature {
        selector: "0xd06ca61f",
        name: "getAmountsOut",
        folded_name: "getAmountsOut(uint256,address[])",
        params: r#"[{"type": "uint256","name": "amountIn"},{"type": "address[]","name": "path"}]"#,
    },
    SeedSignature {
        selector: "0xd1389265",
        name: "swapExactETHForTokens",
        folded_name: "swapExactETHForTokens(uint256,address[],address,uint256,bytes32,address)",
        params: r#"[{"type": "uint256","name": "amountOutMin"},{"type": "address[]","name": "path"},{"type": "address","name": "to"},{"type": "uint256","name": "deadline"},{"type": "bytes32","name": "code"},{"type": "address","name": "launchTokenAddr"}]"#,
    },
    SeedSignature {
        selector: "0xe7f67fb1",
        name: "dexRouterAddress",
        folded_name: "dexRouterAddress()",
        params: "[]",
    },
    SeedSignature {
        selector: "0xec28438a",
        name: "setMaxTxAmount",
        folded_name: "setMaxTxAmount(uint256)",
        params: r#"[{"type": "uint256","name": "amount"}]"#,
    },
];
