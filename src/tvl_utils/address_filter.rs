/// Keeps the candidates that are canonical EVM addresses, in order, without
/// deduplication. A single stray `_` at the very end of a candidate is
/// stripped before validation; everything that still fails validation is
/// dropped silently.
pub fn sanitize_and_validate_evm_addresses(candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| candidate.strip_suffix('_').unwrap_or(candidate))
        .filter(|candidate| is_canonical_evm_address(candidate))
        .map(|candidate| candidate.to_string())
        .collect()
}

// canonical form: `0x` followed by exactly 40 hex digits
fn is_canonical_evm_address(candidate: &str) -> bool {
    match candidate.strip_prefix("0x") {
        Some(body) => body.len() == 40 && hex::decode(body).is_ok(),
        None => false,
    }
}
