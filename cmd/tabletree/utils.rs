use eyre::{WrapErr, eyre};
use tabletree_common::{H256, serde_utils};

pub fn parse_h256(value: &str) -> eyre::Result<H256> {
    let raw = serde_utils::bytes::from_hex_str(value)
        .wrap_err_with(|| format!("Invalid hash {value}"))?;
    if raw.len() != H256::len_bytes() {
        return Err(eyre!(
            "Invalid hash {value}: expected {} bytes, got {}",
            H256::len_bytes(),
            raw.len()
        ));
    }
    Ok(H256::from_slice(&raw))
}

pub fn format_hash(hash: &H256) -> String {
    format!("{hash:#x}")
}

/// One hash per line, or a JSON array of hex strings.
pub fn format_hashes(hashes: &[H256], json: bool) -> eyre::Result<String> {
    if json {
        return serde_json::to_string(hashes).wrap_err("Failed to serialize hashes");
    }
    Ok(hashes.iter().map(format_hash).collect::<Vec<_>>().join("\n"))
}
