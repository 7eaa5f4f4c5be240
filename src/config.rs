pub const HYPERLIQUID_INFO_URL: &str = "https://api.hyperliquid.xyz/info";
pub const NUCLEUS_BACKEND_URL: &str = "https://backend.nucleusearn.io";

pub const LHYPE_VAULT_ADDRESS: &str = "0x5748ae796AE46A4F1348a1693de4b50560485562";
pub const USDHL_TOKEN_ADDRESS: &str = "0xb50A96253aBDF803D85efcDce07Ad8becBc52BD5";

pub const WHLP_VAULT_ADDRESS: &str = "0x1359b05241cA5076c9F59605214f4F84114c0dE8";
pub const HLP_VAULT_ADDRESS: &str = "0xdfc24b077bc1425ad1dea75bcb6f8158e10df303";

pub const WHLP_HYPER_CORE_MULTISIGS: [&str; 5] = [
    "0x9fcB7066C8AeEe704f9D017996b490873b306E51",
    "0x41f45A847bB6c8bFf1448FEE5C9525875D443b9E",
    "0x296B1078D860c69C94CA933c4BcD2d6f192DD86e",
    "0x31Cbd708B505d3A9A0dae336BC9476b694256e74",
    "0xFBB47621086901487C7f3beC6F23205738d59e27",
];

pub const HYPER_EVM_CHAIN_ID: &str = "999";
pub const LHYPE_STRATEGIES_CACHE_KEY: &str = "lhype-tokens";

pub const PROTOCOL_CHAIN: &str = "hyperliquid";
// reported token composition does not match the wallet holdings 1:1
pub const MISREPRESENTED_TOKENS: bool = true;

#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    pub lhype_vault_address: String,
    pub whlp_vault_address: String,
    pub hlp_vault_address: String,
    pub usdhl_token_address: String,
    pub chain_id: String,
    pub strategies_cache_key: String,
    pub strategies_endpoint: String,
    pub hyper_core_multisigs: Vec<String>,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            lhype_vault_address: LHYPE_VAULT_ADDRESS.to_string(),
            whlp_vault_address: WHLP_VAULT_ADDRESS.to_string(),
            hlp_vault_address: HLP_VAULT_ADDRESS.to_string(),
            usdhl_token_address: USDHL_TOKEN_ADDRESS.to_string(),
            chain_id: HYPER_EVM_CHAIN_ID.to_string(),
            strategies_cache_key: LHYPE_STRATEGIES_CACHE_KEY.to_string(),
            strategies_endpoint: NUCLEUS_BACKEND_URL.to_string(),
            hyper_core_multisigs: WHLP_HYPER_CORE_MULTISIGS
                .iter()
                .map(|multisig| multisig.to_string())
                .collect(),
        }
    }
}

impl ProtocolConfig {
    pub fn underlying_strategies_url(&self) -> String {
        format!(
            "{endpoint}/v1/vaults/underlying_strategies?vault_address={vault}&chain_id={chain}",
            endpoint = self.strategies_endpoint,
            vault = self.lhype_vault_address,
            chain = self.chain_id
        )
    }
}
